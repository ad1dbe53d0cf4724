//! Repository for the `courses` table.

use sqlx::SqlitePool;

use crate::models::course::{Course, CourseOverview};

/// Provides read access to course reference data.
pub struct CourseRepo;

impl CourseRepo {
    /// List all courses ordered by code.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT id, course_code, course_name FROM courses ORDER BY course_code",
        )
        .fetch_all(pool)
        .await
    }

    /// List courses with their report and class counts and the lecturer of
    /// their first class.
    pub async fn list_overview(pool: &SqlitePool) -> Result<Vec<CourseOverview>, sqlx::Error> {
        sqlx::query_as::<_, CourseOverview>(
            "SELECT c.id, c.course_code, c.course_name, \
                 (SELECT COUNT(*) FROM reports r WHERE r.course_code = c.course_code) \
                     AS total_reports, \
                 (SELECT COUNT(*) FROM classes cls WHERE cls.course_code = c.course_code) \
                     AS total_classes, \
                 (SELECT u.name FROM classes cls \
                     JOIN users u ON u.id = cls.lecturer_id \
                     WHERE cls.course_code = c.course_code \
                     ORDER BY cls.id LIMIT 1) AS main_lecturer \
             FROM courses c \
             ORDER BY c.course_code",
        )
        .fetch_all(pool)
        .await
    }
}
