//! Handlers for the `/inspections` resource.
//!
//! Creation is where seeding happens: when the request names a source
//! inspection, its report document is transformed for the new inspection's
//! type and stored as the starting document. A missing or empty source is
//! never an error; the new inspection simply starts blank.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use propcheck_core::error::CoreError;
use propcheck_core::inspection_type::validate_inspection_type;
use propcheck_core::report::transform::transform_report;
use propcheck_core::status::{initial_status, is_terminal, status_on_assignment, validate_status};
use propcheck_core::types::DbId;
use propcheck_db::models::inspection::{
    CreateInspection, Inspection, InspectionListQuery, UpdateInspection,
};
use propcheck_db::repositories::{InspectionRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body for `PUT /inspections/{id}/inspector`.
///
/// `inspector_id: null` clears the assignment.
#[derive(Debug, Deserialize)]
pub struct AssignInspectorRequest {
    pub inspector_id: Option<DbId>,
}

/// Query parameters for `GET /inspections/{id}/seed-preview`.
#[derive(Debug, Deserialize)]
pub struct SeedPreviewParams {
    pub target_type: Option<String>,
    pub include_photos: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an inspection exists, returning the full row.
async fn ensure_inspection_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Inspection> {
    InspectionRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /inspections
// ---------------------------------------------------------------------------

/// List inspections, optionally filtered by property and status.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InspectionListQuery>,
) -> AppResult<impl IntoResponse> {
    let items = InspectionRepo::list(&state.pool, &params).await?;
    tracing::debug!(count = items.len(), "Listed inspections");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /inspections
// ---------------------------------------------------------------------------

/// Create a new inspection, optionally seeded from a prior one.
///
/// Resolution order:
/// 1. If `source_inspection_id` names an inspection with a stored report
///    document, that document is transformed for the new type and stored.
///    A dangling reference or a document-less source is logged and skipped.
/// 2. Without an explicit `template_id`, the type's default template is used
///    when one exists.
/// 3. The initial status is `assigned` when an inspector is named, `created`
///    otherwise.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInspection>,
) -> AppResult<impl IntoResponse> {
    validate_inspection_type(&input.inspection_type)?;

    let include_photos = input.include_photos.unwrap_or(false);
    let mut source_id = None;
    let mut seeded: Option<serde_json::Value> = None;
    if let Some(requested) = input.source_inspection_id {
        match InspectionRepo::find_by_id(&state.pool, requested).await? {
            Some(source) => {
                seeded = source.report_data.as_ref().map(|doc| {
                    transform_report(
                        &source.inspection_type,
                        &input.inspection_type,
                        Some(doc),
                        include_photos,
                    )
                });
                if seeded.is_none() {
                    tracing::warn!(
                        source_inspection_id = requested,
                        "Seeding source has no report document; starting blank"
                    );
                }
                source_id = Some(source.id);
            }
            None => {
                tracing::warn!(
                    source_inspection_id = requested,
                    "Seeding source not found; starting blank"
                );
            }
        }
    }

    let template_id = match input.template_id {
        Some(id) => Some(id),
        None => TemplateRepo::find_default(&state.pool, &input.inspection_type)
            .await?
            .map(|t| t.id),
    };

    let status = initial_status(input.inspector_id);

    let created = InspectionRepo::create(
        &state.pool,
        &input,
        status,
        template_id,
        source_id,
        seeded.as_ref(),
    )
    .await?;
    tracing::info!(
        id = created.id,
        property_id = created.property_id,
        inspection_type = %created.inspection_type,
        status = %created.status,
        seeded = created.report_data.is_some(),
        "Inspection created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /inspections/{id}
// ---------------------------------------------------------------------------

/// Get a single inspection, including its report document.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let inspection = ensure_inspection_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: inspection }))
}

// ---------------------------------------------------------------------------
// PUT /inspections/{id}
// ---------------------------------------------------------------------------

/// Partially update an inspection.
///
/// Status writes are validated for membership only; ordering between the
/// non-terminal statuses is the caller's business.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInspection>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }
    if let Some(ref inspection_type) = input.inspection_type {
        validate_inspection_type(inspection_type)?;
    }

    let updated = InspectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;
    tracing::info!(id = updated.id, status = %updated.status, "Inspection updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /inspections/{id}
// ---------------------------------------------------------------------------

/// Delete an inspection. Inspections seeded from it keep their documents;
/// only the back-reference is nulled out.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InspectionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Inspection deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// PUT /inspections/{id}/inspector
// ---------------------------------------------------------------------------

/// Assign or clear the inspector.
///
/// Assigning moves a `created` inspection to `assigned` and leaves any later
/// status alone; clearing always returns the inspection to `created`.
pub async fn assign_inspector(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignInspectorRequest>,
) -> AppResult<impl IntoResponse> {
    let current = ensure_inspection_exists(&state.pool, id).await?;
    let next_status = status_on_assignment(&current.status, input.inspector_id);

    let updated = InspectionRepo::set_inspector(&state.pool, id, input.inspector_id, next_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;
    tracing::info!(
        id = updated.id,
        inspector_id = ?updated.inspector_id,
        status = %updated.status,
        "Inspector assignment updated"
    );
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// PUT /inspections/{id}/report
// ---------------------------------------------------------------------------

/// Replace the whole report document.
///
/// The document is written as a single unit; field-level merging is the
/// client's concern. Rejected with 409 once the inspection is complete.
pub async fn replace_report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(document): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let current = ensure_inspection_exists(&state.pool, id).await?;
    if is_terminal(&current.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Inspection {id} is complete and its report can no longer be modified"
        ))));
    }

    let updated = InspectionRepo::replace_report_data(&state.pool, id, &document)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;
    tracing::info!(id = updated.id, "Report document replaced");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// GET /inspections/{id}/seed-preview
// ---------------------------------------------------------------------------

/// Preview the document a new inspection would be seeded with.
///
/// Read-only: transforms this inspection's report document for the requested
/// target type without creating anything. Safe to call repeatedly, including
/// for several candidate target types at once.
pub async fn seed_preview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<SeedPreviewParams>,
) -> AppResult<impl IntoResponse> {
    let target_type = params
        .target_type
        .ok_or_else(|| AppError::BadRequest("target_type query parameter is required".into()))?;
    validate_inspection_type(&target_type)?;

    let source = ensure_inspection_exists(&state.pool, id).await?;
    let document = transform_report(
        &source.inspection_type,
        &target_type,
        source.report_data.as_ref(),
        params.include_photos.unwrap_or(false),
    );
    Ok(Json(DataResponse { data: document }))
}

// ---------------------------------------------------------------------------
// GET /inspections/property/{property_id}/history
// ---------------------------------------------------------------------------

/// A property's inspection history, newest first.
///
/// Each entry carries `has_report_data` so clients can tell which past
/// inspections are usable as seeding sources.
pub async fn property_history(
    State(state): State<AppState>,
    Path(property_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entries = InspectionRepo::history_for_property(&state.pool, property_id).await?;
    tracing::debug!(property_id, count = entries.len(), "Listed property history");
    Ok(Json(DataResponse { data: entries }))
}
