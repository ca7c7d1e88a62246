//! Cross-inspection report seeding.
//!
//! When a new inspection is created from an existing one, the stored report
//! document is transformed so the new report starts pre-filled with everything
//! still relevant. Which fields survive depends only on the (source type,
//! target type) pair: seeding a check-out from a baseline demotes the observed
//! condition to the baseline slot, seeding a baseline from a check-out folds
//! the condition history back into a single reading, and every other pair is a
//! plain carry-over.
//!
//! The engine is pure and total: no I/O, no errors. Corrupt input units are
//! dropped locally and never fail the whole transformation.

use crate::inspection_type::{is_baseline, TYPE_CHECK_OUT};
use crate::report::condition::derive_condition;
use crate::report::document::{RowEntry, SectionEntry, SectionMeta};
use crate::report::fields::{
    is_reserved_key, CARRY_FIELDS, FIELD_CHECK_OUT_CONDITION, FIELD_CONDITION, FIELD_DESCRIPTION,
    FIELD_INVENTORY_CONDITION, FIELD_PHOTOS,
};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Transition classification
// ---------------------------------------------------------------------------

/// The three seeding strategies.
///
/// - `IntoCheckOut`  -- baseline (check-in or inventory) seeds a check-out.
/// - `OutOfCheckOut` -- a check-out seeds a new baseline.
/// - `Carry`         -- any other pair, including same-type and unknown types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    IntoCheckOut,
    OutOfCheckOut,
    Carry,
}

impl TransitionKind {
    /// Pick the strategy for a (source type, target type) pair.
    pub fn classify(source_type: &str, target_type: &str) -> Self {
        if is_baseline(source_type) && target_type == TYPE_CHECK_OUT {
            Self::IntoCheckOut
        } else if source_type == TYPE_CHECK_OUT && is_baseline(target_type) {
            Self::OutOfCheckOut
        } else {
            Self::Carry
        }
    }

    /// String representation for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IntoCheckOut => "into_check_out",
            Self::OutOfCheckOut => "out_of_check_out",
            Self::Carry => "carry",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Document transformation
// ---------------------------------------------------------------------------

/// Transform a stored report document for seeding a new inspection.
///
/// `source` is the source inspection's document as stored; `None` or any
/// non-object value yields an empty document. Well-formed sections are
/// transformed in place under their original keys; corrupt (non-object)
/// sections are omitted. No sections are ever added.
///
/// `include_photos` gates photo copying for the two directional strategies.
/// The plain carry-over ignores it: a same-type copy keeps photos so that the
/// transformation stays a faithful duplicate of the source.
pub fn transform_report(
    source_type: &str,
    target_type: &str,
    source: Option<&Value>,
    include_photos: bool,
) -> Value {
    let kind = TransitionKind::classify(source_type, target_type);
    let Some(sections) = source.and_then(Value::as_object) else {
        return Value::Object(Map::new());
    };

    let mut out = Map::new();
    for (key, value) in sections {
        if let Some(entry) = SectionEntry::from_value(value) {
            let transformed = transform_section(kind, entry, include_photos);
            out.insert(key.clone(), transformed.into_value());
        }
    }
    Value::Object(out)
}

/// Transform one parsed section: metadata passes through verbatim, template
/// rows and ad-hoc `_extra` rows both run through the row strategy.
fn transform_section(kind: TransitionKind, entry: SectionEntry, include_photos: bool) -> SectionEntry {
    SectionEntry {
        meta: SectionMeta {
            hidden: entry.meta.hidden,
            hidden_items: entry.meta.hidden_items,
            item_order: entry.meta.item_order,
            extra: entry.meta.extra.map(|rows| {
                rows.iter()
                    .map(|row| transform_row(kind, row, include_photos))
                    .collect()
            }),
        },
        rows: entry
            .rows
            .into_iter()
            .map(|(key, row)| (key, transform_row(kind, &row, include_photos)))
            .collect(),
    }
}

/// Transform a single row.
///
/// The directional strategies are constructive: the output contains only the
/// fields they enumerate, so stray or future fields never leak across an
/// inspection boundary. The carry-over copies everything except derived
/// (`_`-prefixed) keys.
fn transform_row(kind: TransitionKind, row: &RowEntry, include_photos: bool) -> RowEntry {
    match kind {
        TransitionKind::Carry => row
            .iter()
            .filter(|(key, _)| !is_reserved_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        TransitionKind::IntoCheckOut => {
            let mut out = RowEntry::new();
            copy_field(row, &mut out, FIELD_DESCRIPTION);
            // The observed condition becomes the check-out's baseline; the
            // fresh check-out condition always starts blank.
            if let Some(condition) = row.get(FIELD_CONDITION) {
                out.insert(FIELD_INVENTORY_CONDITION.to_string(), condition.clone());
            }
            out.insert(
                FIELD_CHECK_OUT_CONDITION.to_string(),
                Value::String(String::new()),
            );
            for field in CARRY_FIELDS {
                copy_field(row, &mut out, field);
            }
            if include_photos {
                copy_field(row, &mut out, FIELD_PHOTOS);
            }
            out
        }
        TransitionKind::OutOfCheckOut => {
            let mut out = RowEntry::new();
            copy_field(row, &mut out, FIELD_DESCRIPTION);
            let condition = derive_condition(
                str_field(row, FIELD_CHECK_OUT_CONDITION),
                str_field(row, FIELD_INVENTORY_CONDITION),
                str_field(row, FIELD_CONDITION),
            );
            out.insert(FIELD_CONDITION.to_string(), Value::String(condition));
            for field in CARRY_FIELDS {
                copy_field(row, &mut out, field);
            }
            if include_photos {
                copy_field(row, &mut out, FIELD_PHOTOS);
            }
            out
        }
    }
}

fn copy_field(src: &RowEntry, dst: &mut RowEntry, key: &str) {
    if let Some(value) = src.get(key) {
        dst.insert(key.to_string(), value.clone());
    }
}

fn str_field<'a>(row: &'a RowEntry, key: &str) -> Option<&'a str> {
    row.get(key).and_then(Value::as_str)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
