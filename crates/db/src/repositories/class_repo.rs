//! Repository for the `classes` table.

use sqlx::SqlitePool;

use crate::models::class::{ClassOverview, ProgramClass};
use crate::queries::avg_attendance;

/// Select list and joins shared by the class overview queries. Reports are
/// attributed to a class by matching both class name and course code.
fn overview_select() -> String {
    format!(
        "SELECT cls.id, cls.class_name, cls.course_code, cls.lecturer_id, \
             cls.schedule_day, cls.schedule_time, cls.venue, cls.created_at, \
             c.course_name, u.name AS lecturer_name, \
             COUNT(r.id) AS total_reports, {} AS avg_attendance",
        avg_attendance("r")
    )
}

const OVERVIEW_JOINS: &str = "\
    FROM classes cls \
    JOIN courses c ON c.course_code = cls.course_code \
    LEFT JOIN users u ON u.id = cls.lecturer_id \
    LEFT JOIN reports r ON r.class_name = cls.class_name AND r.course_code = cls.course_code";

/// Provides class listings with report statistics.
pub struct ClassRepo;

impl ClassRepo {
    /// All classes with course, lecturer and report statistics, by name.
    pub async fn list_overview(pool: &SqlitePool) -> Result<Vec<ClassOverview>, sqlx::Error> {
        let query = format!(
            "{} {OVERVIEW_JOINS} GROUP BY cls.id ORDER BY cls.class_name, cls.id",
            overview_select()
        );
        sqlx::query_as::<_, ClassOverview>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a class by name. When several courses share the class name the
    /// earliest created class is returned.
    pub async fn find_overview_by_name(
        pool: &SqlitePool,
        class_name: &str,
    ) -> Result<Option<ClassOverview>, sqlx::Error> {
        let query = format!(
            "{} {OVERVIEW_JOINS} WHERE cls.class_name = $1 GROUP BY cls.id ORDER BY cls.id LIMIT 1",
            overview_select()
        );
        sqlx::query_as::<_, ClassOverview>(&query)
            .bind(class_name)
            .fetch_optional(pool)
            .await
    }

    /// All classes tagged with the program whose module code equals the
    /// class's course code, ordered by program then class name.
    pub async fn list_by_program(pool: &SqlitePool) -> Result<Vec<ProgramClass>, sqlx::Error> {
        let query = format!(
            "{}, pm.program AS program {OVERVIEW_JOINS} \
             LEFT JOIN program_modules pm ON pm.module_code = cls.course_code \
             GROUP BY cls.id \
             ORDER BY pm.program, cls.class_name, cls.id",
            overview_select()
        );
        sqlx::query_as::<_, ProgramClass>(&query)
            .fetch_all(pool)
            .await
    }
}
