//! Route definitions for the lecturer-facing `/reports` resource and the
//! `/lecturers` login.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, reports};
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /courses                   -> list_courses
/// GET    /lecturer/{lecturerName}   -> list_by_lecturer
/// GET    /{reportId}/ratings        -> list_ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list).post(reports::create))
        .route("/courses", get(reports::list_courses))
        .route("/lecturer/{lecturerName}", get(reports::list_by_lecturer))
        .route("/{reportId}/ratings", get(reports::list_ratings))
}

/// Routes mounted at `/lecturers`.
///
/// ```text
/// POST   /login                     -> lecturer_login
/// ```
pub fn lecturer_router() -> Router<AppState> {
    Router::new().route("/login", post(auth::lecturer_login))
}
