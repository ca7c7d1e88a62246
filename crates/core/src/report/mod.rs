//! Report document model and cross-inspection seeding.
//!
//! A report is stored as one JSON document per inspection (the
//! `inspections.report_data` column): sections keyed by slug, rows keyed by
//! item, `_`-prefixed keys reserved for structure. [`transform::transform_report`]
//! turns one inspection's document into the starting document for another.

pub mod condition;
pub mod document;
pub mod fields;
pub mod transform;
