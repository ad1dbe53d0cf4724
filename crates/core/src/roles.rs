//! Well-known role name constants.
//!
//! These must match the values stored in `users.role` and the seed rows
//! written at startup.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_LECTURER: &str = "lecturer";
/// Principal Lecturer.
pub const ROLE_PRL: &str = "prl";
/// Program Leader.
pub const ROLE_PL: &str = "pl";
