//! Student rating entity model and DTOs.

use luct_core::error::CoreError;
use luct_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lenient;

/// A row from the `ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub report_id: DbId,
    pub student_id: DbId,
    pub rating_value: i64,
    pub comments: Option<String>,
    pub created_at: Timestamp,
}

/// Insert payload for a student rating a report.
#[derive(Debug, Clone)]
pub struct CreateRating {
    pub report_id: DbId,
    pub student_id: DbId,
    pub rating_value: i64,
    pub comments: Option<String>,
}

/// Request body for `POST /students/ratings`.
///
/// Every field is optional at the serde level so a missing field surfaces
/// as a validation error instead of an extractor rejection; converting into
/// [`CreateRating`] checks presence.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRequest {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub report_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub student_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub rating_value: Option<i64>,
    pub comments: Option<String>,
}

impl TryFrom<RatingRequest> for CreateRating {
    type Error = CoreError;

    fn try_from(req: RatingRequest) -> Result<Self, Self::Error> {
        let (Some(report_id), Some(student_id), Some(rating_value)) =
            (req.report_id, req.student_id, req.rating_value)
        else {
            return Err(CoreError::Validation(
                "report_id, student_id and rating_value are required".into(),
            ));
        };
        Ok(Self {
            report_id,
            student_id,
            rating_value,
            comments: req.comments.filter(|c| !c.trim().is_empty()),
        })
    }
}
