//! Inspection models and DTOs.

use propcheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inspections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inspection {
    pub id: DbId,
    pub property_id: DbId,
    pub inspection_type: String,
    pub status: String,
    pub inspector_id: Option<DbId>,
    pub typist_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub source_inspection_id: Option<DbId>,
    pub tenant_email: Option<String>,
    pub client_email_override: Option<String>,
    pub conduct_date: Option<Timestamp>,
    pub conduct_time_preference: Option<String>,
    pub scheduled_date: Option<Timestamp>,
    pub key_location: Option<String>,
    pub key_return: Option<String>,
    pub internal_notes: Option<String>,
    pub notes: Option<String>,
    pub report_data: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new inspection via `POST /api/v1/inspections`.
///
/// `source_inspection_id` selects a report document to seed the new
/// inspection from; `include_photos` (default false) gates photo copying
/// during seeding. The handler resolves the initial status, the default
/// template fallback, and the seeded document before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInspection {
    pub property_id: DbId,
    pub inspection_type: String,
    pub inspector_id: Option<DbId>,
    pub typist_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub source_inspection_id: Option<DbId>,
    pub include_photos: Option<bool>,
    pub tenant_email: Option<String>,
    pub client_email_override: Option<String>,
    pub conduct_date: Option<Timestamp>,
    pub conduct_time_preference: Option<String>,
    pub scheduled_date: Option<Timestamp>,
    pub key_location: Option<String>,
    pub key_return: Option<String>,
    pub internal_notes: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating an inspection. All fields are optional.
///
/// The inspector assignment and the report document have their own endpoints
/// and are deliberately absent here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInspection {
    pub inspection_type: Option<String>,
    pub status: Option<String>,
    pub typist_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub tenant_email: Option<String>,
    pub client_email_override: Option<String>,
    pub conduct_date: Option<Timestamp>,
    pub conduct_time_preference: Option<String>,
    pub scheduled_date: Option<Timestamp>,
    pub key_location: Option<String>,
    pub key_return: Option<String>,
    pub internal_notes: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/v1/inspections`.
#[derive(Debug, Deserialize)]
pub struct InspectionListQuery {
    pub property_id: Option<DbId>,
    pub status: Option<String>,
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One entry of a property's inspection history, newest first.
///
/// `has_report_data` tells the client whether this inspection can seed a new
/// one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyHistoryEntry {
    pub id: DbId,
    pub inspection_type: String,
    pub status: String,
    pub inspector_id: Option<DbId>,
    pub conduct_date: Option<Timestamp>,
    pub scheduled_date: Option<Timestamp>,
    pub has_report_data: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
