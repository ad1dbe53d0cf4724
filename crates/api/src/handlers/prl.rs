//! Handlers for the Principal Lecturer (`/prl`) resource: report review,
//! course and class overviews, monitoring.

use axum::extract::{Path, Query, State};
use axum::Json;
use luct_core::error::CoreError;
use luct_core::report::ReportStatus;
use luct_core::types::DbId;
use luct_db::models::class::ClassOverview;
use luct_db::models::course::CourseOverview;
use luct_db::models::dashboard::{CourseRatingStat, CourseStat, MonitoringSummary, RecentRating};
use luct_db::models::report::{ReportFeedback, ReportSummary};
use luct_db::repositories::{ClassRepo, CourseRepo, DashboardRepo, ReportRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::StatusFilterParams;
use crate::response::ActionResponse;
use crate::state::AppState;
use crate::validation::validate_body;

/// Reports shown on the monitoring page.
const RECENT_REPORTS_LIMIT: i64 = 5;

/// Ratings shown on the ratings page.
const RECENT_RATINGS_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Payload of a feedback update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSaved {
    pub report_id: DbId,
}

/// Response for `GET /prl/monitoring`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringResponse {
    pub summary: MonitoringSummary,
    pub recent_reports: Vec<ReportSummary>,
    pub course_stats: Vec<CourseStat>,
}

/// Response for `GET /prl/ratings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsResponse {
    pub rating_stats: Vec<CourseRatingStat>,
    pub recent_ratings: Vec<RecentRating>,
}

/// Response for `GET /prl/classes/{className}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetailResponse {
    pub class_info: ClassOverview,
    pub reports: Vec<ReportSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/prl/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseOverview>>> {
    let courses = CourseRepo::list_overview(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/prl/courses/{courseCode}/lectures
pub async fn list_course_lectures(
    State(state): State<AppState>,
    Path(course_code): Path<String>,
) -> AppResult<Json<Vec<ReportSummary>>> {
    let lectures = ReportRepo::list_summaries_by_course(&state.pool, &course_code).await?;
    Ok(Json(lectures))
}

/// GET /api/prl/reports?status=
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<Json<Vec<ReportSummary>>> {
    let status = params.parse()?;
    let reports = ReportRepo::list_summaries(&state.pool, status).await?;
    Ok(Json(reports))
}

/// GET /api/prl/reports/status/{status}
pub async fn list_reports_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<ReportSummary>>> {
    let status = ReportStatus::parse(&status)?;
    let reports = ReportRepo::list_summaries(&state.pool, Some(status)).await?;
    Ok(Json(reports))
}

/// PUT /api/prl/reports/{reportId}/feedback
///
/// Stores the feedback verbatim and moves the report to the requested
/// status (default `reviewed`). A missing report is a 404 and nothing
/// changes.
pub async fn add_feedback(
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
    AppJson(input): AppJson<ReportFeedback>,
) -> AppResult<Json<ActionResponse<FeedbackSaved>>> {
    validate_body(&input)?;
    let status = ReportStatus::feedback_target(input.status.as_deref())?;

    let updated = ReportRepo::add_feedback(&state.pool, report_id, &input.feedback, status).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: report_id,
        }));
    }

    tracing::info!(report_id, %status, "Feedback added to report");
    Ok(Json(ActionResponse::new(
        "Feedback added successfully",
        FeedbackSaved { report_id },
    )))
}

/// GET /api/prl/monitoring
pub async fn monitoring(State(state): State<AppState>) -> AppResult<Json<MonitoringResponse>> {
    let summary = DashboardRepo::monitoring_summary(&state.pool).await?;
    let recent_reports =
        ReportRepo::list_recent_summaries(&state.pool, RECENT_REPORTS_LIMIT).await?;
    let course_stats = DashboardRepo::course_stats(&state.pool).await?;

    Ok(Json(MonitoringResponse {
        summary,
        recent_reports,
        course_stats,
    }))
}

/// GET /api/prl/ratings
pub async fn ratings(State(state): State<AppState>) -> AppResult<Json<RatingsResponse>> {
    let rating_stats = DashboardRepo::course_rating_stats(&state.pool).await?;
    let recent_ratings = DashboardRepo::recent_ratings(&state.pool, RECENT_RATINGS_LIMIT).await?;

    Ok(Json(RatingsResponse {
        rating_stats,
        recent_ratings,
    }))
}

/// GET /api/prl/classes
pub async fn list_classes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClassOverview>>> {
    let classes = ClassRepo::list_overview(&state.pool).await?;
    Ok(Json(classes))
}

/// GET /api/prl/classes/{className}
pub async fn class_detail(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
) -> AppResult<Json<ClassDetailResponse>> {
    let class_info = ClassRepo::find_overview_by_name(&state.pool, &class_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Class",
                key: class_name.clone(),
            })
        })?;
    let reports = ReportRepo::list_summaries_by_class(&state.pool, &class_name).await?;

    Ok(Json(ClassDetailResponse {
        class_info,
        reports,
    }))
}
