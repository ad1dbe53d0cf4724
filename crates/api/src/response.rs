//! Shared response envelope for write endpoints.
//!
//! Creates, updates and logins answer with `{ "success": true, "message": ...,
//! ...payload }`. Use [`ActionResponse`] instead of ad-hoc `json!` bodies so the
//! envelope stays consistent across roles. Read endpoints return their rows
//! directly.

use serde::Serialize;

/// `{ "success": true, "message": ..., ...T }` response envelope.
///
/// `T` is flattened into the envelope, so it must serialize as a map
/// (a struct) or as `()` for no payload.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn new(message: &'static str, payload: T) -> Self {
        Self {
            success: true,
            message,
            payload,
        }
    }
}
