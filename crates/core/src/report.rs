//! Report status lifecycle.
//!
//! A report is created `submitted` and moves to `reviewed` once a Principal
//! Lecturer attaches feedback. There is no path back.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_SUBMITTED: &str = "submitted";
pub const STATUS_REVIEWED: &str = "reviewed";

/// All valid report status values.
pub const VALID_REPORT_STATUSES: &[&str] = &[STATUS_SUBMITTED, STATUS_REVIEWED];

/// Lecturer name stored on reports submitted without one.
pub const DEFAULT_LECTURER_NAME: &str = "Dr. John Smith";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Submitted,
    Reviewed,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Submitted => STATUS_SUBMITTED,
            ReportStatus::Reviewed => STATUS_REVIEWED,
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            STATUS_SUBMITTED => Ok(ReportStatus::Submitted),
            STATUS_REVIEWED => Ok(ReportStatus::Reviewed),
            other => Err(CoreError::Validation(format!(
                "Invalid report status '{other}'. Must be one of: {}",
                VALID_REPORT_STATUSES.join(", ")
            ))),
        }
    }

    /// Resolve the status a feedback update moves a report into.
    ///
    /// Defaults to `reviewed`. Moving a report back to `submitted` is refused.
    pub fn feedback_target(requested: Option<&str>) -> Result<Self, CoreError> {
        let target = match requested {
            None => ReportStatus::Reviewed,
            Some(s) => ReportStatus::parse(s)?,
        };
        if target == ReportStatus::Submitted {
            return Err(CoreError::Validation(
                "A report cannot be moved back to 'submitted'".to_string(),
            ));
        }
        Ok(target)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
