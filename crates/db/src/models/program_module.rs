//! Program module catalog entries managed by the Program Leader.

use luct_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::lenient;

/// A row from the `program_modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramModule {
    pub id: DbId,
    pub module_code: String,
    pub module_name: String,
    pub program: String,
    pub credits: i64,
    pub semester: i64,
    pub lecturer_id: Option<DbId>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for adding a module. `credits` defaults to 3 and `semester` to 1.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgramModule {
    #[serde(default)]
    #[validate(length(min = 1, message = "Module code is required"))]
    pub module_code: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Module name is required"))]
    pub module_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Program is required"))]
    pub program: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    #[validate(range(min = 1, max = 60, message = "Credits must be between 1 and 60"))]
    pub credits: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    #[validate(range(min = 1, max = 12, message = "Semester must be between 1 and 12"))]
    pub semester: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub lecturer_id: Option<DbId>,
}

/// DTO for (re)assigning a module's lecturer. `null` or `""` unassigns.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignLecturer {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub lecturer_id: Option<DbId>,
}

/// A module with its lecturer and the statistics of reports filed under
/// the matching course code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub module: ProgramModule,
    pub lecturer_name: Option<String>,
    pub total_lectures: i64,
    pub avg_attendance: Option<f64>,
    pub avg_rating: Option<f64>,
}
