//! Lecture report entity model, DTOs and read views.

use luct_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::lenient;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub lecturer_id: Option<DbId>,
    pub lecturer_name: String,
    pub faculty_name: String,
    pub class_name: String,
    pub week_of_reporting: i64,
    pub date_of_lecture: String,
    pub course_name: String,
    pub course_code: String,
    pub actual_students_present: i64,
    pub total_registered_students: i64,
    pub venue: String,
    pub scheduled_time: String,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub prl_feedback: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Lecturer submission payload. Field names follow the report form
/// (`facultyName`, `weekOfReporting`, ...) and numeric fields may arrive as
/// strings.
///
/// When `lecturer_id` is omitted the lecturer is resolved from
/// `lecturer_name`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    #[serde(default)]
    #[validate(length(min = 1, message = "Faculty name is required"))]
    pub faculty_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Class name is required"))]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    #[validate(
        required(message = "Week of reporting is required"),
        range(min = 1, message = "Week of reporting must be at least 1")
    )]
    pub week_of_reporting: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Date of lecture is required"))]
    pub date_of_lecture: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Course name is required"))]
    pub course_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Course code is required"))]
    pub course_code: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub lecturer_id: Option<DbId>,
    pub lecturer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    #[validate(
        required(message = "Actual students present is required"),
        range(min = 0, message = "Actual students present cannot be negative")
    )]
    pub actual_students_present: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    #[validate(
        required(message = "Total registered students is required"),
        range(min = 0, message = "Total registered students cannot be negative")
    )]
    pub total_registered_students: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Venue is required"))]
    pub venue: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Scheduled time is required"))]
    pub scheduled_time: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Topic taught is required"))]
    pub topic_taught: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Learning outcomes are required"))]
    pub learning_outcomes: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Recommendations are required"))]
    pub recommendations: String,
}

/// PRL feedback payload. `status` defaults to `reviewed`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportFeedback {
    #[serde(default)]
    #[validate(length(min = 1, message = "Feedback is required"))]
    pub feedback: String,
    pub status: Option<String>,
}

/// A report with its attendance ratio and rating statistics.
///
/// `lecturer_name` prefers the name of the linked lecturer account over the
/// name captured at submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub report: Report,
    /// `present * 100 / registered`; null when nobody is registered.
    pub attendance_rate: Option<f64>,
    pub avg_rating: Option<f64>,
    pub total_ratings: i64,
}

/// A report summary tagged with the program whose module matches its
/// course code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramLecture {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: ReportSummary,
    pub program: Option<String>,
}
