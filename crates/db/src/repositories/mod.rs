//! Zero-sized repository structs providing async CRUD over a `PgPool`.

pub mod account_repo;
pub mod assignment_repo;
pub mod catalog_repo;
pub mod course_repo;

pub use account_repo::AccountRepo;
pub use assignment_repo::AssignmentRepo;
pub use catalog_repo::CatalogRepo;
pub use course_repo::CourseRepo;
