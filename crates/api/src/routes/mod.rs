pub mod health;
pub mod pl;
pub mod prl;
pub mod reports;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// All routes, mounted by the app router under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check and utility listings.
        .merge(health::router())
        // Student self-service: registration, browsing, ratings.
        .nest("/students", students::router())
        // Lecturer login and report intake.
        .nest("/lecturers", reports::lecturer_router())
        .nest("/reports", reports::router())
        // Principal Lecturer review and monitoring.
        .nest("/prl", prl::router())
        // Program Leader catalog and analytics.
        .nest("/pl", pl::router())
}
