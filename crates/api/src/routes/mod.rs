pub mod health;
pub mod inspections;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                                       list, create
/// /templates/default                               default for a type (GET)
/// /templates/{id}                                  get, update, delete
/// /templates/{id}/sections                         ordered sections (GET)
/// /templates/sections/{id}/items                   ordered items (GET)
///
/// /inspections                                     list, create (with seeding)
/// /inspections/{id}                                get, update, delete
/// /inspections/{id}/inspector                      assign/clear inspector (PUT)
/// /inspections/{id}/report                         replace report document (PUT)
/// /inspections/{id}/seed-preview                   preview a seeded document (GET)
/// /inspections/property/{property_id}/history      property history (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Inspection templates and their section/item layout.
        .nest("/templates", templates::router())
        // Inspections: lifecycle, report documents, seeding.
        .nest("/inspections", inspections::router())
}
