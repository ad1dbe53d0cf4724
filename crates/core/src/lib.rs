//! Domain building blocks shared by the database and API crates.

pub mod error;
pub mod password;
pub mod programs;
pub mod rating;
pub mod report;
pub mod roles;
pub mod types;
