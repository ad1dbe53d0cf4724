//! Repository for the `ratings` table.

use luct_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::rating::{CreateRating, Rating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, report_id, student_id, rating_value, comments, created_at";

/// Provides insert and lookup operations for student ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a rating unless this student already rated this report.
    ///
    /// Relies on `uq_ratings_report_student`, so the duplicate check and the
    /// insert are a single atomic statement. Returns `None` for a duplicate.
    /// Out-of-range values still fail with a check violation.
    pub async fn create_if_absent(
        pool: &SqlitePool,
        input: &CreateRating,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (report_id, student_id, rating_value, comments) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (report_id, student_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.report_id)
            .bind(input.student_id)
            .bind(input.rating_value)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
    }

    /// List the ratings of one report, oldest first.
    pub async fn list_by_report(
        pool: &SqlitePool,
        report_id: DbId,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM ratings WHERE report_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Rating>(&query)
            .bind(report_id)
            .fetch_all(pool)
            .await
    }
}
