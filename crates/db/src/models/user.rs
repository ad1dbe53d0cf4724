//! User entity model and DTOs.

use luct_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A full row from the `users` table. Never serialized: it carries the
/// password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: String,
    pub faculty: String,
    pub created_at: Timestamp,
}

/// The fields of a user that may leave the service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// A lecturer as listed for module assignment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LecturerSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// Request body for student self-registration.
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation errors rather than extractor rejections.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterStudent {
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Request body shared by every role's login endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Insert payload for a user whose password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub name: &'a str,
}
