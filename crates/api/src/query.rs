//! Shared query parameter types for API handlers.

use luct_core::report::ReportStatus;
use serde::Deserialize;

use crate::error::AppResult;

/// `?status=` filter on report listings.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}

impl StatusFilterParams {
    /// The requested status, if any. A blank value means no filter; an
    /// unknown value is a validation error.
    pub fn parse(&self) -> AppResult<Option<ReportStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(ReportStatus::parse(raw)?)),
        }
    }
}
