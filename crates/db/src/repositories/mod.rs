//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod inspection_repo;
pub mod template_repo;

pub use inspection_repo::InspectionRepo;
pub use template_repo::TemplateRepo;
