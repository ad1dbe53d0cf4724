//! Student rating bounds and validation.

use crate::error::CoreError;

/// Lowest accepted rating value.
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating value.
pub const MAX_RATING: i64 = 5;

/// Maximum length for a rating comment.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Validate that a rating value lies within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(value: i64) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {value}"
        )))
    }
}

pub fn validate_comment(comment: Option<&str>) -> Result<(), CoreError> {
    match comment {
        Some(c) if c.chars().count() > MAX_COMMENT_LENGTH => Err(CoreError::Validation(
            format!("Comment must be at most {MAX_COMMENT_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}
