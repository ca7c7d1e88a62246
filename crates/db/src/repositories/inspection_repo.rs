//! Repository for the `inspections` table.

use propcheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::inspection::{
    CreateInspection, Inspection, InspectionListQuery, PropertyHistoryEntry, UpdateInspection,
};

const COLUMNS: &str =
    "id, property_id, inspection_type, status, inspector_id, typist_id, template_id, \
     source_inspection_id, tenant_email, client_email_override, conduct_date, \
     conduct_time_preference, scheduled_date, key_location, key_return, internal_notes, \
     notes, report_data, created_at, updated_at";

/// Provides CRUD operations plus the assignment, report, and history queries
/// for inspections.
pub struct InspectionRepo;

impl InspectionRepo {
    /// Insert a new inspection.
    ///
    /// `status`, `template_id`, and `source_inspection_id` arrive resolved by
    /// the caller (initial-status rule, default-template fallback, dangling
    /// source dropped). `report_data` is the seeded document, or `None` when
    /// no seeding happened; unseeded inspections store NULL so the history's
    /// `has_report_data` flag stays meaningful.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInspection,
        status: &str,
        template_id: Option<DbId>,
        source_inspection_id: Option<DbId>,
        report_data: Option<&serde_json::Value>,
    ) -> Result<Inspection, sqlx::Error> {
        let query = format!(
            "INSERT INTO inspections \
                (property_id, inspection_type, status, inspector_id, typist_id, template_id, \
                 source_inspection_id, tenant_email, client_email_override, conduct_date, \
                 conduct_time_preference, scheduled_date, key_location, key_return, \
                 internal_notes, notes, report_data) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(input.property_id)
            .bind(&input.inspection_type)
            .bind(status)
            .bind(input.inspector_id)
            .bind(input.typist_id)
            .bind(template_id)
            .bind(source_inspection_id)
            .bind(&input.tenant_email)
            .bind(&input.client_email_override)
            .bind(input.conduct_date)
            .bind(&input.conduct_time_preference)
            .bind(input.scheduled_date)
            .bind(&input.key_location)
            .bind(&input.key_return)
            .bind(&input.internal_notes)
            .bind(&input.notes)
            .bind(report_data)
            .fetch_one(pool)
            .await
    }

    /// Find an inspection by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inspections WHERE id = $1");
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inspections, newest first, with optional property/status filters.
    pub async fn list(
        pool: &PgPool,
        params: &InspectionListQuery,
    ) -> Result<Vec<Inspection>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).clamp(1, 200);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM inspections \
             WHERE ($1::BIGINT IS NULL OR property_id = $1) \
               AND ($2::TEXT IS NULL OR status = $2) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(params.property_id)
            .bind(&params.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an inspection. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInspection,
    ) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!(
            "UPDATE inspections SET \
                inspection_type = COALESCE($2, inspection_type), \
                status = COALESCE($3, status), \
                typist_id = COALESCE($4, typist_id), \
                template_id = COALESCE($5, template_id), \
                tenant_email = COALESCE($6, tenant_email), \
                client_email_override = COALESCE($7, client_email_override), \
                conduct_date = COALESCE($8, conduct_date), \
                conduct_time_preference = COALESCE($9, conduct_time_preference), \
                scheduled_date = COALESCE($10, scheduled_date), \
                key_location = COALESCE($11, key_location), \
                key_return = COALESCE($12, key_return), \
                internal_notes = COALESCE($13, internal_notes), \
                notes = COALESCE($14, notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .bind(&input.inspection_type)
            .bind(&input.status)
            .bind(input.typist_id)
            .bind(input.template_id)
            .bind(&input.tenant_email)
            .bind(&input.client_email_override)
            .bind(input.conduct_date)
            .bind(&input.conduct_time_preference)
            .bind(input.scheduled_date)
            .bind(&input.key_location)
            .bind(&input.key_return)
            .bind(&input.internal_notes)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the inspector together with the status that assignment
    /// produces. A `None` inspector binds NULL and clears the column.
    pub async fn set_inspector(
        pool: &PgPool,
        id: DbId,
        inspector_id: Option<DbId>,
        status: &str,
    ) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!(
            "UPDATE inspections SET inspector_id = $2, status = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .bind(inspector_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Replace the whole report document.
    pub async fn replace_report_data(
        pool: &PgPool,
        id: DbId,
        report_data: &serde_json::Value,
    ) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!(
            "UPDATE inspections SET report_data = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .bind(report_data)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an inspection. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inspections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A property's inspection history, newest first.
    pub async fn history_for_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyHistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, PropertyHistoryEntry>(
            "SELECT id, inspection_type, status, inspector_id, conduct_date, scheduled_date, \
                    (report_data IS NOT NULL) AS has_report_data, created_at, updated_at \
             FROM inspections \
             WHERE property_id = $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(property_id)
        .fetch_all(pool)
        .await
    }
}
