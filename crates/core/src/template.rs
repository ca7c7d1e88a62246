//! Template vocabulary and validation.
//!
//! A template describes the blank layout of a report: an ordered list of
//! sections, each either a fixed page (cover page, keys, utility meters) or a
//! room, with an ordered list of inspectable items. The persistence layer owns
//! storage and ordering; this module owns the shared vocabulary and the field
//! checks applied at the write boundary.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for a template name.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 100;

/// Maximum allowed length for a section name.
pub const MAX_SECTION_NAME_LENGTH: usize = 100;

/// Maximum allowed length for a section item name.
pub const MAX_ITEM_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Section kind
// ---------------------------------------------------------------------------

/// The two structural kinds of template section.
///
/// - `Fixed` -- a well-known page that appears once (cover page, disclaimers,
///   keys, utility meters, ...).
/// - `Room`  -- a physical room walked during the inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Fixed,
    Room,
}

impl SectionKind {
    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Room => "room",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "fixed" => Ok(Self::Fixed),
            "room" => Ok(Self::Room),
            other => Err(CoreError::Validation(format!(
                "Unknown section type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a template name: must be non-empty, trimmed, and within
/// [`MAX_TEMPLATE_NAME_LENGTH`].
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "Template name", MAX_TEMPLATE_NAME_LENGTH)
}

/// Validate a section name: must be non-empty, trimmed, and within
/// [`MAX_SECTION_NAME_LENGTH`].
pub fn validate_section_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "Section name", MAX_SECTION_NAME_LENGTH)
}

/// Validate an item name: must be non-empty, trimmed, and within
/// [`MAX_ITEM_NAME_LENGTH`].
pub fn validate_item_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "Item name", MAX_ITEM_NAME_LENGTH)
}

fn validate_name(name: &str, label: &str, max: usize) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    if trimmed.len() != name.len() {
        return Err(CoreError::Validation(format!(
            "{label} must not have leading or trailing whitespace"
        )));
    }
    if name.len() > max {
        return Err(CoreError::Validation(format!(
            "{label} must not exceed {max} characters, got {}",
            name.len()
        )));
    }
    Ok(())
}
