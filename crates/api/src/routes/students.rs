//! Route definitions for the `/students` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, students};
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// POST   /register                    -> register_student
/// POST   /login                       -> student_login
/// GET    /reports                     -> list_reports
/// GET    /reports/course/{courseCode} -> list_reports_by_course
/// POST   /ratings                     -> create_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register_student))
        .route("/login", post(auth::student_login))
        .route("/reports", get(students::list_reports))
        .route(
            "/reports/course/{courseCode}",
            get(students::list_reports_by_course),
        )
        .route("/ratings", post(students::create_rating))
}
