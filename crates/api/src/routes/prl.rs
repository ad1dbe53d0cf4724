//! Route definitions for the Principal Lecturer (`/prl`) resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{auth, prl};
use crate::state::AppState;

/// Routes mounted at `/prl`.
///
/// ```text
/// POST   /login                         -> prl_login
/// GET    /courses                       -> list_courses
/// GET    /courses/{courseCode}/lectures -> list_course_lectures
/// GET    /reports?status=               -> list_reports
/// GET    /reports/status/{status}       -> list_reports_by_status
/// PUT    /reports/{reportId}/feedback   -> add_feedback
/// GET    /monitoring                    -> monitoring
/// GET    /ratings                       -> ratings
/// GET    /classes                       -> list_classes
/// GET    /classes/{className}           -> class_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::prl_login))
        .route("/courses", get(prl::list_courses))
        .route(
            "/courses/{courseCode}/lectures",
            get(prl::list_course_lectures),
        )
        .route("/reports", get(prl::list_reports))
        .route("/reports/status/{status}", get(prl::list_reports_by_status))
        .route("/reports/{reportId}/feedback", put(prl::add_feedback))
        .route("/monitoring", get(prl::monitoring))
        .route("/ratings", get(prl::ratings))
        .route("/classes", get(prl::list_classes))
        .route("/classes/{className}", get(prl::class_detail))
}
