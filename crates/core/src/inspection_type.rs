//! Well-known inspection type constants and helpers.
//!
//! The type set is open-ended: the `inspections.inspection_type` column stores
//! arbitrary strings, and the transformation engine falls back to a carry-over
//! for pairs it does not recognise. These constants cover the types the engine
//! treats specially.

use crate::error::CoreError;

/// A check-in inspection. Establishes baseline condition at tenancy start.
pub const TYPE_CHECK_IN: &str = "check_in";

/// A check-out inspection. Compares condition against a baseline at tenancy end.
pub const TYPE_CHECK_OUT: &str = "check_out";

/// An inventory inspection. Establishes baseline condition like a check-in.
pub const TYPE_INVENTORY: &str = "inventory";

/// Maximum allowed length for an inspection type string.
pub const MAX_INSPECTION_TYPE_LENGTH: usize = 50;

/// Whether a type establishes baseline condition (check-in or inventory).
pub fn is_baseline(inspection_type: &str) -> bool {
    inspection_type == TYPE_CHECK_IN || inspection_type == TYPE_INVENTORY
}

/// Validate an inspection type string: non-empty, trimmed, and within
/// [`MAX_INSPECTION_TYPE_LENGTH`]. Membership in the well-known set is
/// deliberately not required.
pub fn validate_inspection_type(inspection_type: &str) -> Result<(), CoreError> {
    let trimmed = inspection_type.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Inspection type must not be empty".to_string(),
        ));
    }
    if trimmed.len() != inspection_type.len() {
        return Err(CoreError::Validation(
            "Inspection type must not have leading or trailing whitespace".to_string(),
        ));
    }
    if inspection_type.len() > MAX_INSPECTION_TYPE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Inspection type must not exceed {MAX_INSPECTION_TYPE_LENGTH} characters, got {}",
            inspection_type.len()
        )));
    }
    Ok(())
}
