//! Pure domain logic for the propcheck backend.
//!
//! Everything here is usable without a database or an HTTP stack: inspection
//! type and status vocabulary, template validation, and the report document
//! model with its cross-inspection seeding engine. The `db` and `api` crates
//! build on these rules; this crate has no internal dependencies.

pub mod error;
pub mod inspection_type;
pub mod report;
pub mod status;
pub mod template;
pub mod types;
