//! Login and registration handlers.
//!
//! Every role has its own login route; all of them share [`login_as`].
//! Only students may self-register.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luct_core::error::CoreError;
use luct_core::password::{hash_password, verify_password};
use luct_core::roles::{ROLE_LECTURER, ROLE_PL, ROLE_PRL, ROLE_STUDENT};
use luct_core::types::DbId;
use luct_db::models::user::{LoginRequest, NewUser, PublicUser, RegisterStudent};
use luct_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ActionResponse;
use crate::state::AppState;
use crate::validation::validate_body;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Payload of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginPayload {
    pub user: PublicUser,
}

/// Payload of a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPayload {
    pub user_id: DbId,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Check `email` + `password` against accounts holding `role`.
///
/// Unknown emails, wrong passwords and accounts of another role all produce
/// the same 401 so the response does not reveal which part failed.
pub async fn login_as(
    state: &AppState,
    input: &LoginRequest,
    role: &'static str,
) -> AppResult<ActionResponse<LoginPayload>> {
    validate_body(input)?;

    let user = UserRepo::find_by_email_and_role(&state.pool, &input.email, role)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !verify_password(&input.password, &user.password)? {
        tracing::debug!(role, "Login rejected: password mismatch");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    tracing::info!(user_id = user.id, role, "User logged in");
    Ok(ActionResponse::new(
        "Login successful",
        LoginPayload { user: user.into() },
    ))
}

/// POST /api/students/login
pub async fn student_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ActionResponse<LoginPayload>>> {
    login_as(&state, &input, ROLE_STUDENT).await.map(Json)
}

/// POST /api/lecturers/login
pub async fn lecturer_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ActionResponse<LoginPayload>>> {
    login_as(&state, &input, ROLE_LECTURER).await.map(Json)
}

/// POST /api/prl/login
pub async fn prl_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ActionResponse<LoginPayload>>> {
    login_as(&state, &input, ROLE_PRL).await.map(Json)
}

/// POST /api/pl/login
pub async fn pl_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ActionResponse<LoginPayload>>> {
    login_as(&state, &input, ROLE_PL).await.map(Json)
}

/// POST /api/students/register
///
/// Creates a student account. A taken email is rejected with 400; the
/// insert is conditional on the unique email, so concurrent registrations
/// of one address cannot both succeed.
pub async fn register_student(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterStudent>,
) -> AppResult<(StatusCode, Json<ActionResponse<RegisteredPayload>>)> {
    validate_body(&input)?;

    let password_hash = hash_password(&input.password)?;
    let new_user = NewUser {
        email: &input.email,
        password_hash: &password_hash,
        role: ROLE_STUDENT,
        name: &input.name,
    };

    let user = UserRepo::create_if_absent(&state.pool, &new_user)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Duplicate(
                "User with this email already exists".into(),
            ))
        })?;

    tracing::info!(user_id = user.id, "Student registered");
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            "Student registered successfully",
            RegisteredPayload {
                user_id: user.id,
                user: user.into(),
            },
        )),
    ))
}
