//! Route definitions for the Program Leader (`/pl`) resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{auth, pl};
use crate::state::AppState;

/// Routes mounted at `/pl`.
///
/// ```text
/// POST   /login                     -> pl_login
/// GET    /dashboard                 -> dashboard
/// GET    /courses                   -> list_modules
/// POST   /courses                   -> create_module
/// PUT    /courses/{moduleId}/assign -> assign_lecturer
/// GET    /reports                   -> list_reviewed_reports
/// GET    /monitoring                -> monitoring
/// GET    /classes                   -> list_classes
/// GET    /lectures                  -> list_lectures
/// GET    /ratings                   -> ratings
/// GET    /lecturers                 -> list_lecturers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::pl_login))
        .route("/dashboard", get(pl::dashboard))
        .route("/courses", get(pl::list_modules).post(pl::create_module))
        .route("/courses/{moduleId}/assign", put(pl::assign_lecturer))
        .route("/reports", get(pl::list_reviewed_reports))
        .route("/monitoring", get(pl::monitoring))
        .route("/classes", get(pl::list_classes))
        .route("/lectures", get(pl::list_lectures))
        .route("/ratings", get(pl::ratings))
        .route("/lecturers", get(pl::list_lecturers))
}
