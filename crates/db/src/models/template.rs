//! Template, section, and item models and DTOs.

use propcheck_core::template::SectionKind;
use propcheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub inspection_type: String,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `template_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateSection {
    pub id: DbId,
    pub template_id: DbId,
    pub name: String,
    pub section_type: String,
    pub order_index: i32,
    pub is_required: bool,
    pub created_at: Timestamp,
}

/// A row from the `template_section_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateSectionItem {
    pub id: DbId,
    pub section_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub order_index: i32,
    pub requires_photo: bool,
    pub requires_condition: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTOs
// ---------------------------------------------------------------------------

/// Input for creating a new template, optionally with its full layout.
///
/// Section and item `order_index` values are assigned from array position.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<String>,
    pub inspection_type: String,
    pub is_default: Option<bool>,
    pub sections: Option<Vec<CreateTemplateSection>>,
}

/// One section of a template layout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateSection {
    pub name: String,
    pub section_type: SectionKind,
    pub is_required: Option<bool>,
    pub items: Option<Vec<CreateTemplateItem>>,
}

/// One inspectable item within a section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateItem {
    pub name: String,
    pub description: Option<String>,
    pub requires_photo: Option<bool>,
    pub requires_condition: Option<bool>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating a template. All fields optional; supplying `sections`
/// replaces the entire layout.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub inspection_type: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
    pub sections: Option<Vec<CreateTemplateSection>>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A section enriched with its ordered items.
#[derive(Debug, Clone, Serialize)]
pub struct SectionWithItems {
    #[serde(flatten)]
    pub section: TemplateSection,
    pub items: Vec<TemplateSectionItem>,
}

/// A template enriched with its full ordered layout.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub template: Template,
    pub sections: Vec<SectionWithItems>,
}
