//! Inspection workflow status constants and assignment rules.
//!
//! Statuses live in the `inspections.status` column as plain strings. Writes
//! are validated for membership only; the workflow order is advisory and
//! callers may move an inspection to any status. The exception is `complete`,
//! which the report write path treats as terminal.

use crate::error::CoreError;
use crate::types::DbId;

/// Newly created, no inspector assigned yet.
pub const STATUS_CREATED: &str = "created";

/// An inspector has been assigned but work has not started.
pub const STATUS_ASSIGNED: &str = "assigned";

/// Inspection in progress on site.
pub const STATUS_ACTIVE: &str = "active";

/// Field work done; typist is transcribing dictation into the report.
pub const STATUS_PROCESSING: &str = "processing";

/// Report drafted and awaiting review.
pub const STATUS_REVIEW: &str = "review";

/// Report finalised. The report document is read-only from here.
pub const STATUS_COMPLETE: &str = "complete";

/// All statuses accepted at the write boundary, in workflow order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_CREATED,
    STATUS_ASSIGNED,
    STATUS_ACTIVE,
    STATUS_PROCESSING,
    STATUS_REVIEW,
    STATUS_COMPLETE,
];

/// Validate that a status string is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown inspection status: {status}"
        )))
    }
}

/// Whether a status permits no further report edits.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_COMPLETE
}

/// Status for a freshly created inspection, based on whether an inspector was
/// named at creation time.
pub fn initial_status(inspector_id: Option<DbId>) -> &'static str {
    if inspector_id.is_some() {
        STATUS_ASSIGNED
    } else {
        STATUS_CREATED
    }
}

/// Status after an inspector assignment change.
///
/// Assigning an inspector promotes `created` to `assigned` but leaves any
/// later status alone (re-assignment mid-workflow is routine). Clearing the
/// inspector always drops the inspection back to `created`.
pub fn status_on_assignment<'a>(current: &'a str, inspector_id: Option<DbId>) -> &'a str {
    match inspector_id {
        Some(_) if current == STATUS_CREATED => STATUS_ASSIGNED,
        Some(_) => current,
        None => STATUS_CREATED,
    }
}
