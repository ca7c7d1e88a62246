//! Route definitions for the `/templates` resource.
//!
//! Templates are the static blueprints inspections are created from; the
//! layout (sections and items) is managed through the same resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /default               -> find_default (?inspection_type=)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/sections         -> list_sections
/// GET    /sections/{id}/items   -> list_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(templates::list).post(templates::create))
        .route("/default", get(templates::find_default))
        .route(
            "/{id}",
            get(templates::get_by_id)
                .put(templates::update)
                .delete(templates::delete),
        )
        .route("/{id}/sections", get(templates::list_sections))
        .route("/sections/{id}/items", get(templates::list_items))
}
