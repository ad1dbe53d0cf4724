//! Handlers for the lecturer-facing `/reports` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use luct_core::error::CoreError;
use luct_core::types::DbId;
use luct_db::models::course::Course;
use luct_db::models::rating::Rating;
use luct_db::models::report::{CreateReport, Report};
use luct_db::repositories::{CourseRepo, RatingRepo, ReportRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ActionResponse;
use crate::state::AppState;
use crate::validation::validate_body;

/// Payload of a stored report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub report_id: DbId,
}

/// GET /api/reports/courses
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// POST /api/reports
///
/// Stores a lecture report with status `submitted`. An unknown course code
/// is rejected with 400 by the foreign key on `reports.course_code`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReport>,
) -> AppResult<(StatusCode, Json<ActionResponse<ReportCreated>>)> {
    validate_body(&input)?;

    let report = ReportRepo::create(&state.pool, &input).await?;

    tracing::info!(
        report_id = report.id,
        course_code = %report.course_code,
        week = report.week_of_reporting,
        "Report submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            "Report submitted successfully",
            ReportCreated {
                report_id: report.id,
            },
        )),
    ))
}

/// GET /api/reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list(&state.pool).await?;
    Ok(Json(reports))
}

/// GET /api/reports/lecturer/{lecturerName}
pub async fn list_by_lecturer(
    State(state): State<AppState>,
    Path(lecturer_name): Path<String>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list_by_lecturer_name(&state.pool, &lecturer_name).await?;
    Ok(Json(reports))
}

/// GET /api/reports/{reportId}/ratings
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
) -> AppResult<Json<Vec<Rating>>> {
    ReportRepo::find_by_id(&state.pool, report_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: report_id,
        }))?;

    let ratings = RatingRepo::list_by_report(&state.pool, report_id).await?;
    Ok(Json(ratings))
}
