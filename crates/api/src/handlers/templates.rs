//! Handlers for the `/templates` resource.
//!
//! Templates are blueprints only: creating an inspection copies nothing from
//! the template into the report document, so layout edits here never touch
//! existing inspections.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use propcheck_core::error::CoreError;
use propcheck_core::inspection_type::validate_inspection_type;
use propcheck_core::template::{validate_item_name, validate_section_name, validate_template_name};
use propcheck_core::types::DbId;
use propcheck_db::models::template::{CreateTemplate, CreateTemplateSection, UpdateTemplate};
use propcheck_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing templates.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub inspection_type: Option<String>,
    pub include_inactive: Option<bool>,
}

/// Query parameters for the default-template lookup.
#[derive(Debug, Deserialize)]
pub struct DefaultParams {
    pub inspection_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate every section and item name in a layout.
fn validate_layout(sections: &[CreateTemplateSection]) -> AppResult<()> {
    for section in sections {
        validate_section_name(&section.name)?;
        for item in section.items.iter().flatten() {
            validate_item_name(&item.name)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /templates
// ---------------------------------------------------------------------------

/// List templates, optionally filtered by inspection type.
///
/// Inactive templates are hidden unless `include_inactive=true`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = TemplateRepo::list(
        &state.pool,
        params.inspection_type.as_deref(),
        params.include_inactive.unwrap_or(false),
    )
    .await?;
    tracing::debug!(count = items.len(), "Listed templates");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /templates
// ---------------------------------------------------------------------------

/// Create a new template, optionally with its full section/item layout.
///
/// Creating with `is_default: true` atomically clears any previous default
/// for the same inspection type.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    validate_template_name(&input.name)?;
    validate_inspection_type(&input.inspection_type)?;
    if let Some(ref sections) = input.sections {
        validate_layout(sections)?;
    }

    let created = TemplateRepo::create(&state.pool, &input).await?;
    let detail = TemplateRepo::find_detail(&state.pool, created.id)
        .await?
        .expect("just created");
    tracing::info!(id = created.id, name = %created.name, "Template created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

// ---------------------------------------------------------------------------
// GET /templates/default
// ---------------------------------------------------------------------------

/// Look up the default template for an inspection type.
///
/// Returns `{ "data": null }` when no default is configured; clients fall
/// back to creating the inspection without a template.
pub async fn find_default(
    State(state): State<AppState>,
    Query(params): Query<DefaultParams>,
) -> AppResult<impl IntoResponse> {
    let inspection_type = params
        .inspection_type
        .ok_or_else(|| AppError::BadRequest("inspection_type query parameter is required".into()))?;

    let found = TemplateRepo::find_default(&state.pool, &inspection_type).await?;
    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// GET /templates/{id}
// ---------------------------------------------------------------------------

/// Get a template with its full ordered layout.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = TemplateRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// PUT /templates/{id}
// ---------------------------------------------------------------------------

/// Update a template. Supplying `sections` replaces the entire layout.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_template_name(name)?;
    }
    if let Some(ref inspection_type) = input.inspection_type {
        validate_inspection_type(inspection_type)?;
    }
    if let Some(ref sections) = input.sections {
        validate_layout(sections)?;
    }

    let updated = TemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;
    tracing::info!(id = updated.id, "Template updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /templates/{id}
// ---------------------------------------------------------------------------

/// Delete a template and its layout. Inspections that referenced it keep
/// their report documents; the FK is nulled out.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Template deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// GET /templates/{id}/sections
// ---------------------------------------------------------------------------

/// List a template's sections in layout order.
pub async fn list_sections(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;

    let sections = TemplateRepo::list_sections(&state.pool, id).await?;
    tracing::debug!(template_id = id, count = sections.len(), "Listed sections");
    Ok(Json(DataResponse { data: sections }))
}

// ---------------------------------------------------------------------------
// GET /templates/sections/{id}/items
// ---------------------------------------------------------------------------

/// List a section's items in layout order.
pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TemplateRepo::find_section(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template section",
            id,
        }))?;

    let items = TemplateRepo::list_items(&state.pool, id).await?;
    tracing::debug!(section_id = id, count = items.len(), "Listed items");
    Ok(Json(DataResponse { data: items }))
}
