//! Aggregated views returned by the PRL and PL dashboard queries.

use luct_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// PRL monitoring
// ---------------------------------------------------------------------------

/// Headline numbers for the PRL monitoring page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonitoringSummary {
    pub total_reports: i64,
    pub pending_reports: i64,
    pub reviewed_reports: i64,
    pub active_courses: i64,
    pub active_lecturers: i64,
    pub avg_attendance_rate: Option<f64>,
    pub avg_system_rating: Option<f64>,
}

/// Per-course report count, attendance and rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseStat {
    pub course_code: String,
    pub course_name: String,
    pub report_count: i64,
    /// Null for a course with no reports.
    pub avg_attendance: Option<f64>,
    pub avg_rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Rating statistics for one course. Only courses with ratings appear.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseRatingStat {
    pub course_code: String,
    pub course_name: String,
    pub total_ratings: i64,
    pub average_rating: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub unique_students: i64,
}

/// A rating joined with the report it scores and the student who gave it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentRating {
    pub id: DbId,
    pub report_id: DbId,
    pub student_id: DbId,
    pub rating_value: i64,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub course_code: String,
    pub class_name: String,
    pub topic_taught: String,
    pub student_name: String,
}

/// Rating statistics for one program. Ratings on reports whose course code
/// matches no module are grouped under a null program.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramRatingStat {
    pub program: Option<String>,
    pub total_ratings: i64,
    pub average_rating: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub unique_students: i64,
    pub rated_courses: i64,
}

/// Number of ratings given each value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatingBucket {
    pub rating_value: i64,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// PL dashboard & monitoring
// ---------------------------------------------------------------------------

/// Headline numbers for the PL dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlSummary {
    pub total_reports: i64,
    pub total_courses: i64,
    pub total_lecturers: i64,
    pub total_classes: i64,
    pub avg_attendance: Option<f64>,
    pub avg_rating: Option<f64>,
    pub pending_reviews: i64,
    pub reviewed_reports: i64,
}

/// Report statistics for one dashboard program (matched by course-code
/// prefix).
#[derive(Debug, Clone, Serialize)]
pub struct ProgramStat {
    pub program: String,
    pub reports_count: i64,
    pub attendance_rate: Option<f64>,
    pub avg_rating: Option<f64>,
}

/// Module, report and lecturer totals for one program.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramPerformance {
    pub program: String,
    pub total_modules: i64,
    pub total_reports: i64,
    pub avg_attendance: Option<f64>,
    pub avg_rating: Option<f64>,
    pub lecturers_count: i64,
}

/// Workload and outcomes for one lecturer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LecturerPerformance {
    pub lecturer_id: DbId,
    pub lecturer_name: String,
    pub modules_assigned: i64,
    pub reports_submitted: i64,
    pub avg_attendance: Option<f64>,
    pub avg_rating: Option<f64>,
}

/// Report volume and attendance for one teaching week.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeeklyProgress {
    pub week_of_reporting: i64,
    pub reports_count: i64,
    pub avg_attendance: Option<f64>,
}
