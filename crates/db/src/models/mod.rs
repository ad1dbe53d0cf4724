//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for inserts and updates
//! - `FromRow` view structs for joined or aggregated reads

pub mod class;
pub mod course;
pub mod dashboard;
pub mod lenient;
pub mod program_module;
pub mod rating;
pub mod report;
pub mod user;
