//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument.

pub mod class_repo;
pub mod course_repo;
pub mod dashboard_repo;
pub mod program_module_repo;
pub mod rating_repo;
pub mod report_repo;
pub mod user_repo;

pub use class_repo::ClassRepo;
pub use course_repo::CourseRepo;
pub use dashboard_repo::DashboardRepo;
pub use program_module_repo::ProgramModuleRepo;
pub use rating_repo::RatingRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
