//! Scheduled class model and views.

use luct_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub class_name: String,
    pub course_code: String,
    pub lecturer_id: Option<DbId>,
    pub schedule_day: Option<String>,
    pub schedule_time: Option<String>,
    pub venue: Option<String>,
    pub created_at: Timestamp,
}

/// A class with its course, lecturer and report statistics.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub class: Class,
    pub course_name: String,
    pub lecturer_name: Option<String>,
    pub total_reports: i64,
    pub avg_attendance: Option<f64>,
}

/// A class overview tagged with the program whose module matches its course.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramClass {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub overview: ClassOverview,
    pub program: Option<String>,
}
