//! Utility endpoints: user listing and store introspection.

use axum::extract::State;
use axum::Json;
use luct_db::models::user::PublicUser;
use luct_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/users
///
/// Every account's public fields. Password hashes never leave the service.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<PublicUser>>> {
    let users = UserRepo::list_public(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/debug/tables
pub async fn list_tables(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let tables = luct_db::list_tables(&state.pool).await?;
    Ok(Json(tables))
}
