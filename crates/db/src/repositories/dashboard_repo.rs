//! Read-only aggregations behind the PRL and PL dashboards.
//!
//! Every figure is recomputed from the source tables on each call.

use luct_core::programs::ProgramPrefix;
use luct_core::report::{STATUS_REVIEWED, STATUS_SUBMITTED};
use luct_core::roles::ROLE_LECTURER;
use sqlx::SqlitePool;

use crate::models::dashboard::{
    CourseRatingStat, CourseStat, LecturerPerformance, MonitoringSummary, PlSummary,
    ProgramPerformance, ProgramRatingStat, ProgramStat, RatingBucket, RecentRating,
    WeeklyProgress,
};
use crate::queries::{avg_attendance, avg_rating_where};

/// Provides the dashboard aggregation queries.
pub struct DashboardRepo;

impl DashboardRepo {
    // -----------------------------------------------------------------------
    // PRL
    // -----------------------------------------------------------------------

    /// Report totals by status, active courses/lecturers and system-wide
    /// attendance and rating averages.
    pub async fn monitoring_summary(pool: &SqlitePool) -> Result<MonitoringSummary, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(r.id) AS total_reports, \
                 COUNT(CASE WHEN r.status = $1 THEN 1 END) AS pending_reports, \
                 COUNT(CASE WHEN r.status = $2 THEN 1 END) AS reviewed_reports, \
                 COUNT(DISTINCT r.course_code) AS active_courses, \
                 COUNT(DISTINCT r.lecturer_name) AS active_lecturers, \
                 {} AS avg_attendance_rate, \
                 (SELECT AVG(rating_value) FROM ratings) AS avg_system_rating \
             FROM reports r",
            avg_attendance("r")
        );
        sqlx::query_as::<_, MonitoringSummary>(&query)
            .bind(STATUS_SUBMITTED)
            .bind(STATUS_REVIEWED)
            .fetch_one(pool)
            .await
    }

    /// Per-course report counts with attendance and rating averages, busiest
    /// course first. Courses without reports are included with null averages.
    pub async fn course_stats(pool: &SqlitePool) -> Result<Vec<CourseStat>, sqlx::Error> {
        let query = format!(
            "SELECT c.course_code, c.course_name, \
                 COUNT(r.id) AS report_count, \
                 {} AS avg_attendance, \
                 {} AS avg_rating \
             FROM courses c \
             LEFT JOIN reports r ON r.course_code = c.course_code \
             GROUP BY c.id \
             ORDER BY report_count DESC, c.course_code",
            avg_attendance("r"),
            avg_rating_where("rr.course_code = c.course_code"),
        );
        sqlx::query_as::<_, CourseStat>(&query).fetch_all(pool).await
    }

    /// Rating statistics per course, best rated first.
    pub async fn course_rating_stats(
        pool: &SqlitePool,
    ) -> Result<Vec<CourseRatingStat>, sqlx::Error> {
        sqlx::query_as::<_, CourseRatingStat>(
            "SELECT r.course_code, c.course_name, \
                 COUNT(rt.id) AS total_ratings, \
                 AVG(rt.rating_value) AS average_rating, \
                 MIN(rt.rating_value) AS min_rating, \
                 MAX(rt.rating_value) AS max_rating, \
                 COUNT(DISTINCT rt.student_id) AS unique_students \
             FROM ratings rt \
             JOIN reports r ON r.id = rt.report_id \
             JOIN courses c ON c.course_code = r.course_code \
             GROUP BY r.course_code \
             ORDER BY average_rating DESC, r.course_code",
        )
        .fetch_all(pool)
        .await
    }

    /// The `limit` most recent ratings with report and student context.
    pub async fn recent_ratings(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<RecentRating>, sqlx::Error> {
        sqlx::query_as::<_, RecentRating>(
            "SELECT rt.id, rt.report_id, rt.student_id, rt.rating_value, rt.comments, \
                 rt.created_at, r.course_code, r.class_name, r.topic_taught, \
                 u.name AS student_name \
             FROM ratings rt \
             JOIN reports r ON r.id = rt.report_id \
             JOIN users u ON u.id = rt.student_id \
             ORDER BY rt.created_at DESC, rt.id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // PL
    // -----------------------------------------------------------------------

    /// Headline totals for the PL dashboard.
    pub async fn pl_summary(pool: &SqlitePool) -> Result<PlSummary, sqlx::Error> {
        let query = format!(
            "SELECT \
                 (SELECT COUNT(*) FROM reports) AS total_reports, \
                 (SELECT COUNT(*) FROM courses) AS total_courses, \
                 (SELECT COUNT(*) FROM users WHERE role = $1) AS total_lecturers, \
                 (SELECT COUNT(DISTINCT class_name) FROM reports) AS total_classes, \
                 (SELECT {} FROM reports r) AS avg_attendance, \
                 (SELECT AVG(rating_value) FROM ratings) AS avg_rating, \
                 (SELECT COUNT(*) FROM reports WHERE status = $2) AS pending_reviews, \
                 (SELECT COUNT(*) FROM reports WHERE status = $3) AS reviewed_reports",
            avg_attendance("r")
        );
        sqlx::query_as::<_, PlSummary>(&query)
            .bind(ROLE_LECTURER)
            .bind(STATUS_SUBMITTED)
            .bind(STATUS_REVIEWED)
            .fetch_one(pool)
            .await
    }

    /// Report count, attendance and rating for the reports of one program.
    pub async fn program_stat(
        pool: &SqlitePool,
        program: &ProgramPrefix,
    ) -> Result<ProgramStat, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(r.id), {}, {} \
             FROM reports r WHERE r.course_code LIKE $1",
            avg_attendance("r"),
            avg_rating_where("rr.course_code LIKE $1"),
        );
        let (reports_count, attendance_rate, avg_rating) =
            sqlx::query_as::<_, (i64, Option<f64>, Option<f64>)>(&query)
                .bind(program.like_pattern())
                .fetch_one(pool)
                .await?;
        Ok(ProgramStat {
            program: program.program.to_string(),
            reports_count,
            attendance_rate,
            avg_rating,
        })
    }

    /// Module, report and lecturer totals per program.
    pub async fn program_performance(
        pool: &SqlitePool,
    ) -> Result<Vec<ProgramPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT pm.program, \
                 COUNT(DISTINCT pm.id) AS total_modules, \
                 COUNT(DISTINCT r.id) AS total_reports, \
                 {} AS avg_attendance, \
                 {} AS avg_rating, \
                 COUNT(DISTINCT pm.lecturer_id) AS lecturers_count \
             FROM program_modules pm \
             LEFT JOIN reports r ON r.course_code = pm.module_code \
             GROUP BY pm.program \
             ORDER BY pm.program",
            avg_attendance("r"),
            avg_rating_where(
                "rr.course_code IN \
                 (SELECT module_code FROM program_modules WHERE program = pm.program)"
            ),
        );
        sqlx::query_as::<_, ProgramPerformance>(&query)
            .fetch_all(pool)
            .await
    }

    /// Modules, reports, attendance and rating per lecturer, most active
    /// first.
    pub async fn lecturer_performance(
        pool: &SqlitePool,
    ) -> Result<Vec<LecturerPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT u.id AS lecturer_id, u.name AS lecturer_name, \
                 (SELECT COUNT(*) FROM program_modules pm WHERE pm.lecturer_id = u.id) \
                     AS modules_assigned, \
                 COUNT(r.id) AS reports_submitted, \
                 {} AS avg_attendance, \
                 {} AS avg_rating \
             FROM users u \
             LEFT JOIN reports r ON r.lecturer_id = u.id \
             WHERE u.role = $1 \
             GROUP BY u.id \
             ORDER BY reports_submitted DESC, u.name",
            avg_attendance("r"),
            avg_rating_where("rr.lecturer_id = u.id"),
        );
        sqlx::query_as::<_, LecturerPerformance>(&query)
            .bind(ROLE_LECTURER)
            .fetch_all(pool)
            .await
    }

    /// Report count and attendance per teaching week, in week order.
    pub async fn weekly_progress(pool: &SqlitePool) -> Result<Vec<WeeklyProgress>, sqlx::Error> {
        let query = format!(
            "SELECT r.week_of_reporting, COUNT(*) AS reports_count, \
                 {} AS avg_attendance \
             FROM reports r \
             GROUP BY r.week_of_reporting \
             ORDER BY r.week_of_reporting",
            avg_attendance("r")
        );
        sqlx::query_as::<_, WeeklyProgress>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rating statistics per program, best rated first.
    pub async fn program_rating_stats(
        pool: &SqlitePool,
    ) -> Result<Vec<ProgramRatingStat>, sqlx::Error> {
        sqlx::query_as::<_, ProgramRatingStat>(
            "SELECT pm.program, \
                 COUNT(rt.id) AS total_ratings, \
                 AVG(rt.rating_value) AS average_rating, \
                 MIN(rt.rating_value) AS min_rating, \
                 MAX(rt.rating_value) AS max_rating, \
                 COUNT(DISTINCT rt.student_id) AS unique_students, \
                 COUNT(DISTINCT r.course_code) AS rated_courses \
             FROM ratings rt \
             JOIN reports r ON r.id = rt.report_id \
             LEFT JOIN program_modules pm ON pm.module_code = r.course_code \
             GROUP BY pm.program \
             ORDER BY average_rating DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of ratings per value, highest value first.
    pub async fn rating_distribution(pool: &SqlitePool) -> Result<Vec<RatingBucket>, sqlx::Error> {
        sqlx::query_as::<_, RatingBucket>(
            "SELECT rating_value, COUNT(*) AS count \
             FROM ratings \
             GROUP BY rating_value \
             ORDER BY rating_value DESC",
        )
        .fetch_all(pool)
        .await
    }
}
