//! Route definitions for the `/inspections` resource.
//!
//! Covers the inspection lifecycle (creation with optional seeding, status
//! and assignment updates), whole-document report writes, the read-only
//! seed preview, and per-property history.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::inspections;
use crate::state::AppState;

/// Routes mounted at `/inspections`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
/// PUT    /{id}/inspector                     -> assign_inspector
/// PUT    /{id}/report                        -> replace_report
/// GET    /{id}/seed-preview                  -> seed_preview
/// GET    /property/{property_id}/history     -> property_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inspections::list).post(inspections::create))
        .route(
            "/{id}",
            get(inspections::get_by_id)
                .put(inspections::update)
                .delete(inspections::delete),
        )
        .route("/{id}/inspector", put(inspections::assign_inspector))
        .route("/{id}/report", put(inspections::replace_report))
        .route("/{id}/seed-preview", get(inspections::seed_preview))
        .route(
            "/property/{property_id}/history",
            get(inspections::property_history),
        )
}
