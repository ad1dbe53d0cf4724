//! Course reference data.

use luct_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub course_code: String,
    pub course_name: String,
}

/// A course with its report and class counts (PRL courses view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub course: Course,
    pub total_reports: i64,
    pub total_classes: i64,
    /// Lecturer of the course's first scheduled class, if any.
    pub main_lecturer: Option<String>,
}
