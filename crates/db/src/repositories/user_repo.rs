//! Repository for the `users` table.

use luct_core::roles::ROLE_LECTURER;
use luct_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::user::{LecturerSummary, NewUser, PublicUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password, role, name, faculty, created_at";

/// Provides queries over users of every role.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user unless the email is already registered.
    ///
    /// The uniqueness check and the insert are one statement, so two
    /// concurrent registrations of the same email cannot both succeed.
    /// Returns `None` when the email was taken.
    pub async fn create_if_absent(
        pool: &SqlitePool,
        input: &NewUser<'_>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password, role, name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.email)
            .bind(input.password_hash)
            .bind(input.role)
            .bind(input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the account with this email holding `role`.
    pub async fn find_by_email_and_role(
        pool: &SqlitePool,
        email: &str,
        role: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1 AND role = $2");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// List the public fields of every user.
    pub async fn list_public(pool: &SqlitePool) -> Result<Vec<PublicUser>, sqlx::Error> {
        sqlx::query_as::<_, PublicUser>("SELECT id, email, name, role FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// List lecturers alphabetically, for module assignment.
    pub async fn list_lecturers(pool: &SqlitePool) -> Result<Vec<LecturerSummary>, sqlx::Error> {
        sqlx::query_as::<_, LecturerSummary>(
            "SELECT id, name, email FROM users WHERE role = $1 ORDER BY name",
        )
        .bind(ROLE_LECTURER)
        .fetch_all(pool)
        .await
    }
}
