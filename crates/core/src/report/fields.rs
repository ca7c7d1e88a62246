//! Field-name vocabulary of the report document.
//!
//! A report document is a JSON object mapping section keys to section objects.
//! Within a section, keys starting with `_` are structural or derived and are
//! never ordinary row data; everything else is a row object whose fields are
//! named here. The names are shared with the web client verbatim, hence the
//! camelCase.

/// True for keys the document reserves for structural or derived data.
///
/// Reserved keys are either section metadata (see the `META_*` constants) or
/// per-row derived state such as sub-answers and action logs. Derived row keys
/// never survive a seeding transformation.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with('_')
}

// ---------------------------------------------------------------------------
// Section metadata keys
// ---------------------------------------------------------------------------

/// Marks the whole section as hidden in the rendered report.
pub const META_HIDDEN: &str = "_hidden";

/// Per-item hidden flags within the section.
pub const META_HIDDEN_ITEMS: &str = "_hiddenItems";

/// Explicit display ordering of the section's items.
pub const META_ITEM_ORDER: &str = "_itemOrder";

/// Ad-hoc rows added by the clerk beyond the template's items.
pub const META_EXTRA: &str = "_extra";

// ---------------------------------------------------------------------------
// Row field keys
// ---------------------------------------------------------------------------

/// Free-text description of the item.
pub const FIELD_DESCRIPTION: &str = "description";

/// Condition noted by the current inspection.
pub const FIELD_CONDITION: &str = "condition";

/// Baseline condition carried from the originating inventory or check-in.
pub const FIELD_INVENTORY_CONDITION: &str = "inventoryCondition";

/// Condition noted at check-out, alongside the baseline.
pub const FIELD_CHECK_OUT_CONDITION: &str = "checkOutCondition";

/// Attached photo references.
pub const FIELD_PHOTOS: &str = "photos";

/// Row fields carried verbatim across every directional transformation.
///
/// Anything not listed here (and not a condition, description, or photos
/// field) is dropped when seeding into or out of a check-out; the plain
/// carry-over copies all non-reserved fields regardless.
pub const CARRY_FIELDS: &[&str] = &[
    "cleanliness",
    "cleanlinessNotes",
    "locationSerial",
    "meterReading",
    "answer",
    "notes",
    "name",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_keys_are_reserved() {
        assert!(is_reserved_key(META_HIDDEN));
        assert!(is_reserved_key(META_HIDDEN_ITEMS));
        assert!(is_reserved_key(META_ITEM_ORDER));
        assert!(is_reserved_key(META_EXTRA));
    }

    #[test]
    fn derived_row_keys_are_reserved() {
        assert!(is_reserved_key("_subs"));
        assert!(is_reserved_key("_actions"));
    }

    #[test]
    fn ordinary_field_keys_are_not_reserved() {
        assert!(!is_reserved_key(FIELD_DESCRIPTION));
        assert!(!is_reserved_key(FIELD_PHOTOS));
        for field in CARRY_FIELDS {
            assert!(!is_reserved_key(field), "{field} wrongly reserved");
        }
    }

    #[test]
    fn condition_fields_are_not_carry_fields() {
        assert!(!CARRY_FIELDS.contains(&FIELD_CONDITION));
        assert!(!CARRY_FIELDS.contains(&FIELD_INVENTORY_CONDITION));
        assert!(!CARRY_FIELDS.contains(&FIELD_CHECK_OUT_CONDITION));
    }
}
