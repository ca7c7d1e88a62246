//! Repository for the `templates`, `template_sections`, and
//! `template_section_items` tables.

use propcheck_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::template::{
    CreateTemplate, CreateTemplateSection, SectionWithItems, Template, TemplateDetail,
    TemplateSection, TemplateSectionItem, UpdateTemplate,
};

const TEMPLATE_COLUMNS: &str =
    "id, name, description, inspection_type, is_default, is_active, created_at, updated_at";

const SECTION_COLUMNS: &str =
    "id, template_id, name, section_type, order_index, is_required, created_at";

const ITEM_COLUMNS: &str = "id, section_id, name, description, order_index, \
     requires_photo, requires_condition, created_at";

/// Provides CRUD operations for templates and their section/item layout.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template with its layout in one transaction.
    ///
    /// When `is_default` is set, any existing default for the same inspection
    /// type is cleared first so the swap is atomic.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if input.is_default.unwrap_or(false) {
            clear_default(&mut tx, &input.inspection_type, None).await?;
        }

        let query = format!(
            "INSERT INTO templates (name, description, inspection_type, is_default) \
             VALUES ($1, $2, $3, COALESCE($4, false)) \
             RETURNING {TEMPLATE_COLUMNS}"
        );
        let template = sqlx::query_as::<_, Template>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.inspection_type)
            .bind(input.is_default)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(sections) = &input.sections {
            insert_layout(&mut tx, template.id, sections).await?;
        }

        tx.commit().await?;
        Ok(template)
    }

    /// Find a template by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List templates, optionally filtered by inspection type. Inactive
    /// templates are excluded unless `include_inactive`.
    pub async fn list(
        pool: &PgPool,
        inspection_type: Option<&str>,
        include_inactive: bool,
    ) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates \
             WHERE ($1::TEXT IS NULL OR inspection_type = $1) \
               AND ($2::BOOL OR is_active = true) \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(inspection_type)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Find the active default template for an inspection type.
    pub async fn find_default(
        pool: &PgPool,
        inspection_type: &str,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates \
             WHERE inspection_type = $1 AND is_default = true AND is_active = true"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(inspection_type)
            .fetch_optional(pool)
            .await
    }

    /// Update a template. Only non-`None` fields are applied; supplying
    /// `sections` replaces the whole layout. Promoting to default clears the
    /// previous default for the (possibly updated) inspection type in the
    /// same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = $1");
        let current = sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        if input.is_default == Some(true) {
            let target_type = input
                .inspection_type
                .as_deref()
                .unwrap_or(&current.inspection_type);
            clear_default(&mut tx, target_type, Some(id)).await?;
        }

        let query = format!(
            "UPDATE templates SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                inspection_type = COALESCE($4, inspection_type), \
                is_default = COALESCE($5, is_default), \
                is_active = COALESCE($6, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {TEMPLATE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.inspection_type)
            .bind(input.is_default)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(sections) = &input.sections {
            sqlx::query("DELETE FROM template_sections WHERE template_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_layout(&mut tx, id, sections).await?;
        }

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Hard-delete a template (the layout cascades). Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a single section by its ID.
    pub async fn find_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Option<TemplateSection>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM template_sections WHERE id = $1");
        sqlx::query_as::<_, TemplateSection>(&query)
            .bind(section_id)
            .fetch_optional(pool)
            .await
    }

    /// Ordered sections of a template.
    pub async fn list_sections(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TemplateSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM template_sections \
             WHERE template_id = $1 ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, TemplateSection>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Ordered items of a section.
    pub async fn list_items(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<TemplateSectionItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM template_section_items \
             WHERE section_id = $1 ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, TemplateSectionItem>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch a template together with its full ordered layout.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateDetail>, sqlx::Error> {
        let Some(template) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let sections = Self::list_sections(pool, id).await?;
        let mut with_items = Vec::with_capacity(sections.len());
        for section in sections {
            let items = Self::list_items(pool, section.id).await?;
            with_items.push(SectionWithItems { section, items });
        }
        Ok(Some(TemplateDetail {
            template,
            sections: with_items,
        }))
    }
}

/// Clear the default flag for an inspection type, optionally sparing one row
/// (the template currently being promoted).
async fn clear_default(
    tx: &mut Transaction<'_, Postgres>,
    inspection_type: &str,
    keep_id: Option<DbId>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE templates SET is_default = false, updated_at = NOW() \
         WHERE inspection_type = $1 AND is_default = true \
           AND ($2::BIGINT IS NULL OR id <> $2)",
    )
    .bind(inspection_type)
    .bind(keep_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Insert a section/item layout for a template, assigning `order_index` from
/// array position.
async fn insert_layout(
    tx: &mut Transaction<'_, Postgres>,
    template_id: DbId,
    sections: &[CreateTemplateSection],
) -> Result<(), sqlx::Error> {
    let section_query = format!(
        "INSERT INTO template_sections (template_id, name, section_type, order_index, is_required) \
         VALUES ($1, $2, $3, $4, COALESCE($5, true)) \
         RETURNING {SECTION_COLUMNS}"
    );
    let item_query = "INSERT INTO template_section_items \
            (section_id, name, description, order_index, requires_photo, requires_condition) \
         VALUES ($1, $2, $3, $4, COALESCE($5, false), COALESCE($6, true))";

    for (section_index, section) in sections.iter().enumerate() {
        let row = sqlx::query_as::<_, TemplateSection>(&section_query)
            .bind(template_id)
            .bind(&section.name)
            .bind(section.section_type.as_str())
            .bind(section_index as i32)
            .bind(section.is_required)
            .fetch_one(&mut **tx)
            .await?;

        if let Some(items) = &section.items {
            for (item_index, item) in items.iter().enumerate() {
                sqlx::query(item_query)
                    .bind(row.id)
                    .bind(&item.name)
                    .bind(&item.description)
                    .bind(item_index as i32)
                    .bind(item.requires_photo)
                    .bind(item.requires_condition)
                    .execute(&mut **tx)
                    .await?;
            }
        }
    }
    Ok(())
}
