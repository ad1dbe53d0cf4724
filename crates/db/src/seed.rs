//! Reference data written at every startup.
//!
//! Every insert ignores rows that already exist, so seeding is idempotent
//! and never overwrites data changed through the API.

use luct_core::error::CoreError;
use luct_core::password::hash_password;
use luct_core::roles::{ROLE_LECTURER, ROLE_PL, ROLE_PRL, ROLE_STUDENT};
use sqlx::SqlitePool;

use crate::models::user::NewUser;
use crate::repositories::UserRepo;

/// Password given to every sample account.
pub const SAMPLE_PASSWORD: &str = "password123";

/// Email of the sample lecturer that seeded classes and modules belong to.
pub const SAMPLE_LECTURER_EMAIL: &str = "lecturer@luct.ac.ls";

/// `(email, role, name)` of the sample accounts.
pub const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("student@luct.ac.ls", ROLE_STUDENT, "Alice Wonder"),
    (SAMPLE_LECTURER_EMAIL, ROLE_LECTURER, "Dr. John Smith"),
    ("prl@luct.ac.ls", ROLE_PRL, "Prof. Mary Johnson"),
    ("pl@luct.ac.ls", ROLE_PL, "Dr. James Wilson"),
];

/// `(course_code, course_name)`.
pub const SAMPLE_COURSES: &[(&str, &str)] = &[
    ("DIWA2110", "Web Application Development"),
    ("DBS2110", "Database Systems"),
    ("NET2110", "Networking Fundamentals"),
    ("PRO2110", "Programming Fundamentals"),
];

/// `(class_name, course_code, schedule_day, schedule_time, venue)`, all
/// taught by the sample lecturer.
pub const SAMPLE_CLASSES: &[(&str, &str, &str, &str, &str)] = &[
    ("IT2A", "DIWA2110", "Monday", "14:00", "Lab 301"),
    ("IT2B", "DIWA2110", "Tuesday", "10:00", "Lab 302"),
    ("BIT1A", "DBS2110", "Wednesday", "08:00", "Room 201"),
    ("BIT1B", "NET2110", "Thursday", "16:00", "Lab 303"),
];

/// `(module_code, module_name, program, credits, semester)`, all assigned
/// to the sample lecturer.
pub const SAMPLE_MODULES: &[(&str, &str, &str, i64, i64)] = &[
    ("WD101", "Advanced Web Development", "Web Development", 3, 2),
    ("DS201", "Database Design & Implementation", "Database Systems", 3, 1),
    ("NT301", "Network Security", "Networking", 3, 2),
    ("PF401", "Advanced Programming", "Programming", 3, 1),
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed account could not be prepared: {0}")]
    Account(#[from] CoreError),
}

/// Insert the sample users, courses, classes and modules that are missing.
pub async fn seed_reference_data(pool: &SqlitePool) -> Result<(), SeedError> {
    let mut users_created = 0usize;
    for (email, role, name) in SAMPLE_USERS {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
        if exists {
            continue;
        }
        let password_hash = hash_password(SAMPLE_PASSWORD)?;
        let new_user = NewUser {
            email,
            password_hash: &password_hash,
            role,
            name,
        };
        if UserRepo::create_if_absent(pool, &new_user).await?.is_some() {
            users_created += 1;
        }
    }

    for (code, name) in SAMPLE_COURSES {
        sqlx::query("INSERT OR IGNORE INTO courses (course_code, course_name) VALUES ($1, $2)")
            .bind(code)
            .bind(name)
            .execute(pool)
            .await?;
    }

    for (class_name, course_code, day, time, venue) in SAMPLE_CLASSES {
        sqlx::query(
            "INSERT OR IGNORE INTO classes \
                 (class_name, course_code, lecturer_id, schedule_day, schedule_time, venue) \
             VALUES ($1, $2, (SELECT id FROM users WHERE email = $3), $4, $5, $6)",
        )
        .bind(class_name)
        .bind(course_code)
        .bind(SAMPLE_LECTURER_EMAIL)
        .bind(day)
        .bind(time)
        .bind(venue)
        .execute(pool)
        .await?;
    }

    for (code, name, program, credits, semester) in SAMPLE_MODULES {
        sqlx::query(
            "INSERT OR IGNORE INTO program_modules \
                 (module_code, module_name, program, credits, semester, lecturer_id) \
             VALUES ($1, $2, $3, $4, $5, (SELECT id FROM users WHERE email = $6))",
        )
        .bind(code)
        .bind(name)
        .bind(program)
        .bind(credits)
        .bind(semester)
        .bind(SAMPLE_LECTURER_EMAIL)
        .execute(pool)
        .await?;
    }

    tracing::info!(users_created, "Reference data seeded");
    Ok(())
}
