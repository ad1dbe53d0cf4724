//! Handlers for the Program Leader (`/pl`) resource: module catalog,
//! lecturer assignment and program analytics.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use luct_core::error::CoreError;
use luct_core::programs::DASHBOARD_PROGRAMS;
use luct_core::roles::ROLE_LECTURER;
use luct_core::types::DbId;
use luct_db::models::class::ProgramClass;
use luct_db::models::dashboard::{
    LecturerPerformance, PlSummary, ProgramPerformance, ProgramRatingStat, ProgramStat,
    RatingBucket, WeeklyProgress,
};
use luct_db::models::program_module::{AssignLecturer, CreateProgramModule, ModuleOverview};
use luct_db::models::report::{ProgramLecture, ReportSummary};
use luct_db::models::user::LecturerSummary;
use luct_db::repositories::{ClassRepo, DashboardRepo, ProgramModuleRepo, ReportRepo, UserRepo};
use serde::Serialize;
use sqlx::error::ErrorKind;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ActionResponse;
use crate::state::AppState;
use crate::validation::validate_body;

/// Reports shown as recent activity on the dashboard.
const RECENT_ACTIVITY_LIMIT: i64 = 6;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `GET /pl/dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: PlSummary,
    pub recent_activity: Vec<ReportSummary>,
    pub program_stats: Vec<ProgramStat>,
}

/// Payload of a created module.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCreated {
    pub module_id: DbId,
}

/// Response for `GET /pl/monitoring`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringResponse {
    pub program_performance: Vec<ProgramPerformance>,
    pub lecturer_performance: Vec<LecturerPerformance>,
    pub weekly_progress: Vec<WeeklyProgress>,
}

/// Response for `GET /pl/ratings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsResponse {
    pub program_ratings: Vec<ProgramRatingStat>,
    pub rating_distribution: Vec<RatingBucket>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/pl/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let summary = DashboardRepo::pl_summary(&state.pool).await?;
    let recent_activity =
        ReportRepo::list_recent_summaries(&state.pool, RECENT_ACTIVITY_LIMIT).await?;

    let mut program_stats = Vec::with_capacity(DASHBOARD_PROGRAMS.len());
    for program in DASHBOARD_PROGRAMS {
        program_stats.push(DashboardRepo::program_stat(&state.pool, program).await?);
    }

    Ok(Json(DashboardResponse {
        summary,
        recent_activity,
        program_stats,
    }))
}

/// POST /api/pl/courses
///
/// Adds a module to the catalog. A module code already in use is a 409.
pub async fn create_module(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProgramModule>,
) -> AppResult<(StatusCode, Json<ActionResponse<ModuleCreated>>)> {
    validate_body(&input)?;

    let module = ProgramModuleRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "Module code '{}' already exists",
                    input.module_code
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(module_id = module.id, module_code = %module.module_code, "Module created");
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            "Course module added successfully",
            ModuleCreated {
                module_id: module.id,
            },
        )),
    ))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| matches!(db_err.kind(), ErrorKind::UniqueViolation))
}

/// GET /api/pl/courses
pub async fn list_modules(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ModuleOverview>>> {
    let modules = ProgramModuleRepo::list_overview(&state.pool).await?;
    Ok(Json(modules))
}

/// PUT /api/pl/courses/{moduleId}/assign
///
/// Sets or clears (`null`) the module's lecturer. The target account must
/// hold the lecturer role.
pub async fn assign_lecturer(
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
    AppJson(input): AppJson<AssignLecturer>,
) -> AppResult<Json<ActionResponse<()>>> {
    if let Some(lecturer_id) = input.lecturer_id {
        let user = UserRepo::find_by_id(&state.pool, lecturer_id).await?;
        if !user.is_some_and(|u| u.role == ROLE_LECTURER) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "User {lecturer_id} is not a lecturer"
            ))));
        }
    }

    let updated =
        ProgramModuleRepo::assign_lecturer(&state.pool, module_id, input.lecturer_id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }));
    }

    tracing::info!(module_id, lecturer_id = ?input.lecturer_id, "Module lecturer assigned");
    Ok(Json(ActionResponse::new("Lecturer assigned successfully", ())))
}

/// GET /api/pl/reports
///
/// Reports a PRL has already commented on.
pub async fn list_reviewed_reports(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReportSummary>>> {
    let reports = ReportRepo::list_reviewed_summaries(&state.pool).await?;
    Ok(Json(reports))
}

/// GET /api/pl/monitoring
pub async fn monitoring(State(state): State<AppState>) -> AppResult<Json<MonitoringResponse>> {
    let program_performance = DashboardRepo::program_performance(&state.pool).await?;
    let lecturer_performance = DashboardRepo::lecturer_performance(&state.pool).await?;
    let weekly_progress = DashboardRepo::weekly_progress(&state.pool).await?;

    Ok(Json(MonitoringResponse {
        program_performance,
        lecturer_performance,
        weekly_progress,
    }))
}

/// GET /api/pl/classes
pub async fn list_classes(State(state): State<AppState>) -> AppResult<Json<Vec<ProgramClass>>> {
    let classes = ClassRepo::list_by_program(&state.pool).await?;
    Ok(Json(classes))
}

/// GET /api/pl/lectures
pub async fn list_lectures(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProgramLecture>>> {
    let lectures = ReportRepo::list_program_lectures(&state.pool).await?;
    Ok(Json(lectures))
}

/// GET /api/pl/ratings
pub async fn ratings(State(state): State<AppState>) -> AppResult<Json<RatingsResponse>> {
    let program_ratings = DashboardRepo::program_rating_stats(&state.pool).await?;
    let rating_distribution = DashboardRepo::rating_distribution(&state.pool).await?;

    Ok(Json(RatingsResponse {
        program_ratings,
        rating_distribution,
    }))
}

/// GET /api/pl/lecturers
pub async fn list_lecturers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LecturerSummary>>> {
    let lecturers = UserRepo::list_lecturers(&state.pool).await?;
    Ok(Json(lecturers))
}
