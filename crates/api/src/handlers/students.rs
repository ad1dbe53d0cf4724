//! Handlers for the student-facing `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use luct_core::error::CoreError;
use luct_core::rating::{validate_comment, validate_rating};
use luct_core::types::DbId;
use luct_db::models::rating::{CreateRating, RatingRequest};
use luct_db::models::report::Report;
use luct_db::repositories::{RatingRepo, ReportRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ActionResponse;
use crate::state::AppState;

/// Payload of a stored rating.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCreated {
    pub rating_id: DbId,
}

/// GET /api/students/reports
pub async fn list_reports(State(state): State<AppState>) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list(&state.pool).await?;
    Ok(Json(reports))
}

/// GET /api/students/reports/course/{courseCode}
pub async fn list_reports_by_course(
    State(state): State<AppState>,
    Path(course_code): Path<String>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list_by_course(&state.pool, &course_code).await?;
    Ok(Json(reports))
}

/// POST /api/students/ratings
///
/// A student rates a report at most once; a repeat is rejected with 400
/// and leaves the first rating untouched.
pub async fn create_rating(
    State(state): State<AppState>,
    AppJson(request): AppJson<RatingRequest>,
) -> AppResult<(StatusCode, Json<ActionResponse<RatingCreated>>)> {
    let input = CreateRating::try_from(request)?;
    validate_rating(input.rating_value)?;
    validate_comment(input.comments.as_deref())?;

    let rating = RatingRepo::create_if_absent(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Duplicate(
                "You have already rated this report".into(),
            ))
        })?;

    tracing::info!(
        rating_id = rating.id,
        report_id = rating.report_id,
        student_id = rating.student_id,
        "Rating submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            "Rating submitted successfully",
            RatingCreated {
                rating_id: rating.id,
            },
        )),
    ))
}
