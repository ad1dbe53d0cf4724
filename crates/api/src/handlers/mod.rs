pub mod auth;
pub mod pl;
pub mod prl;
pub mod reports;
pub mod students;
pub mod system;
