//! Repository for the `reports` table.

use luct_core::report::{ReportStatus, DEFAULT_LECTURER_NAME, STATUS_SUBMITTED};
use luct_core::roles::ROLE_LECTURER;
use luct_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::report::{CreateReport, ProgramLecture, Report, ReportSummary};
use crate::queries::{ReportOrder, ReportSummaryQuery, REPORT_COLUMNS};

/// Provides insert, review and listing operations for lecture reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a lecturer's report with status `submitted` and no feedback.
    ///
    /// A missing `lecturer_id` is resolved from `lecturer_name` (default
    /// [`DEFAULT_LECTURER_NAME`]) against lecturer accounts; it stays null
    /// when no account has that name.
    pub async fn create(pool: &SqlitePool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let lecturer_name = input
            .lecturer_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_LECTURER_NAME);

        let query = format!(
            "INSERT INTO reports ( \
                 lecturer_id, lecturer_name, faculty_name, class_name, week_of_reporting, \
                 date_of_lecture, course_name, course_code, actual_students_present, \
                 total_registered_students, venue, scheduled_time, topic_taught, \
                 learning_outcomes, recommendations, status \
             ) VALUES ( \
                 COALESCE($1, (SELECT id FROM users WHERE name = $2 AND role = '{ROLE_LECTURER}' \
                               ORDER BY id LIMIT 1)), \
                 $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16 \
             ) \
             RETURNING {REPORT_COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(input.lecturer_id)
            .bind(lecturer_name)
            .bind(&input.faculty_name)
            .bind(&input.class_name)
            .bind(input.week_of_reporting)
            .bind(&input.date_of_lecture)
            .bind(&input.course_name)
            .bind(&input.course_code)
            .bind(input.actual_students_present)
            .bind(input.total_registered_students)
            .bind(&input.venue)
            .bind(&input.scheduled_time)
            .bind(&input.topic_taught)
            .bind(&input.learning_outcomes)
            .bind(&input.recommendations)
            .bind(STATUS_SUBMITTED)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every report, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Report>, sqlx::Error> {
        let query =
            format!("SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Report>(&query).fetch_all(pool).await
    }

    /// List the reports filed under one course code, newest first.
    pub async fn list_by_course(
        pool: &SqlitePool,
        course_code: &str,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE course_code = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(course_code)
            .fetch_all(pool)
            .await
    }

    /// List one lecturer's reports, newest first. Matches the name captured
    /// at submission or the current name of the linked account.
    pub async fn list_by_lecturer_name(
        pool: &SqlitePool,
        lecturer_name: &str,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE lecturer_name = $1 \
                OR lecturer_id IN (SELECT id FROM users WHERE name = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(lecturer_name)
            .fetch_all(pool)
            .await
    }

    /// Attach PRL feedback and move the report to `status`.
    ///
    /// Returns `false` if no report has this id.
    pub async fn add_feedback(
        pool: &SqlitePool,
        id: DbId,
        feedback: &str,
        status: ReportStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE reports SET prl_feedback = $1, status = $2 WHERE id = $3")
            .bind(feedback)
            .bind(status.as_str())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Report summaries, newest first, optionally restricted to one status.
    pub async fn list_summaries(
        pool: &SqlitePool,
        status: Option<ReportStatus>,
    ) -> Result<Vec<ReportSummary>, sqlx::Error> {
        let mut builder = ReportSummaryQuery::new();
        if status.is_some() {
            builder = builder.filter("r.status = $1");
        }
        let query = builder.build();
        let mut q = sqlx::query_as::<_, ReportSummary>(&query);
        if let Some(status) = status {
            q = q.bind(status.as_str());
        }
        q.fetch_all(pool).await
    }

    /// The `limit` most recently submitted report summaries.
    pub async fn list_recent_summaries(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<ReportSummary>, sqlx::Error> {
        let query = ReportSummaryQuery::new().limit(limit).build();
        sqlx::query_as::<_, ReportSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Summaries of the lectures delivered for one course, latest lecture first.
    pub async fn list_summaries_by_course(
        pool: &SqlitePool,
        course_code: &str,
    ) -> Result<Vec<ReportSummary>, sqlx::Error> {
        let query = ReportSummaryQuery::new()
            .filter("r.course_code = $1")
            .order(ReportOrder::LectureDateDesc)
            .build();
        sqlx::query_as::<_, ReportSummary>(&query)
            .bind(course_code)
            .fetch_all(pool)
            .await
    }

    /// Summaries of the lectures delivered to one class, latest lecture first.
    pub async fn list_summaries_by_class(
        pool: &SqlitePool,
        class_name: &str,
    ) -> Result<Vec<ReportSummary>, sqlx::Error> {
        let query = ReportSummaryQuery::new()
            .filter("r.class_name = $1")
            .order(ReportOrder::LectureDateDesc)
            .build();
        sqlx::query_as::<_, ReportSummary>(&query)
            .bind(class_name)
            .fetch_all(pool)
            .await
    }

    /// Summaries of reports a PRL has commented on, newest first.
    pub async fn list_reviewed_summaries(
        pool: &SqlitePool,
    ) -> Result<Vec<ReportSummary>, sqlx::Error> {
        let query = ReportSummaryQuery::new()
            .filter("r.prl_feedback IS NOT NULL")
            .build();
        sqlx::query_as::<_, ReportSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Every report summary tagged with its program, latest lecture first.
    pub async fn list_program_lectures(
        pool: &SqlitePool,
    ) -> Result<Vec<ProgramLecture>, sqlx::Error> {
        let query = ReportSummaryQuery::new()
            .join("LEFT JOIN program_modules pm ON pm.module_code = r.course_code")
            .column("pm.program AS program")
            .order(ReportOrder::LectureDateDesc)
            .build();
        sqlx::query_as::<_, ProgramLecture>(&query)
            .fetch_all(pool)
            .await
    }
}
