//! HTTP request handlers, one module per resource.

pub mod inspections;
pub mod templates;
