//! Tagged in-memory form of a report section.
//!
//! At rest a section is a JSON object that mixes `_`-prefixed structural keys
//! with ordinary row objects. Rather than have every consumer re-apply the
//! underscore convention, the engine parses each section into an explicit sum
//! of metadata and rows, works on that, and serialises back at the end. The
//! stored wire format is unchanged.

use crate::report::fields::{self, META_EXTRA, META_HIDDEN, META_HIDDEN_ITEMS, META_ITEM_ORDER};
use serde_json::{Map, Value};

/// A row object: an open-ended field map.
pub type RowEntry = Map<String, Value>;

/// Structural metadata of a section.
///
/// The three display keys are held as raw values: the engine passes them
/// through untouched and does not depend on their shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMeta {
    pub hidden: Option<Value>,
    pub hidden_items: Option<Value>,
    pub item_order: Option<Value>,
    pub extra: Option<Vec<RowEntry>>,
}

/// A parsed section: metadata plus rows in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionEntry {
    pub meta: SectionMeta,
    pub rows: Vec<(String, RowEntry)>,
}

impl SectionEntry {
    /// Parse a section value.
    ///
    /// Returns `None` for a non-object section. Within an object, corrupt
    /// units are dropped locally: a non-array `_extra` is treated as absent,
    /// non-object `_extra` elements are skipped, non-object row values are
    /// skipped, and reserved keys other than the known metadata keys are
    /// discarded.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut entry = Self::default();
        for (key, val) in object {
            match key.as_str() {
                META_HIDDEN => entry.meta.hidden = Some(val.clone()),
                META_HIDDEN_ITEMS => entry.meta.hidden_items = Some(val.clone()),
                META_ITEM_ORDER => entry.meta.item_order = Some(val.clone()),
                META_EXTRA => {
                    if let Some(items) = val.as_array() {
                        entry.meta.extra =
                            Some(items.iter().filter_map(Value::as_object).cloned().collect());
                    }
                }
                _ if fields::is_reserved_key(key) => {}
                _ => {
                    if let Some(row) = val.as_object() {
                        entry.rows.push((key.clone(), row.clone()));
                    }
                }
            }
        }
        Some(entry)
    }

    /// Serialise back to the stored object form. Absent metadata keys are not
    /// fabricated.
    pub fn into_value(self) -> Value {
        let mut object = Map::new();
        if let Some(hidden) = self.meta.hidden {
            object.insert(META_HIDDEN.to_string(), hidden);
        }
        if let Some(hidden_items) = self.meta.hidden_items {
            object.insert(META_HIDDEN_ITEMS.to_string(), hidden_items);
        }
        if let Some(item_order) = self.meta.item_order {
            object.insert(META_ITEM_ORDER.to_string(), item_order);
        }
        if let Some(extra) = self.meta.extra {
            object.insert(
                META_EXTRA.to_string(),
                Value::Array(extra.into_iter().map(Value::Object).collect()),
            );
        }
        for (key, row) in self.rows {
            object.insert(key, Value::Object(row));
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_rows_and_metadata() {
        let section = json!({
            "_hidden": false,
            "_itemOrder": ["walls", "ceiling"],
            "walls": {"condition": "Good"},
            "ceiling": {"condition": "Fair"},
        });
        let entry = SectionEntry::from_value(&section).unwrap();
        assert_eq!(entry.meta.hidden, Some(json!(false)));
        assert_eq!(entry.meta.item_order, Some(json!(["walls", "ceiling"])));
        assert!(entry.meta.hidden_items.is_none());
        assert_eq!(entry.rows.len(), 2);
    }

    #[test]
    fn non_object_section_is_none() {
        assert!(SectionEntry::from_value(&json!("corrupt")).is_none());
        assert!(SectionEntry::from_value(&json!(null)).is_none());
        assert!(SectionEntry::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn non_object_rows_are_dropped() {
        let section = json!({
            "walls": {"condition": "Good"},
            "ceiling": "flaking",
        });
        let entry = SectionEntry::from_value(&section).unwrap();
        assert_eq!(entry.rows.len(), 1);
        assert_eq!(entry.rows[0].0, "walls");
    }

    #[test]
    fn extra_rows_parsed_in_order() {
        let section = json!({
            "_extra": [{"name": "Shelf"}, {"name": "Mirror"}],
        });
        let entry = SectionEntry::from_value(&section).unwrap();
        let extra = entry.meta.extra.unwrap();
        assert_eq!(extra.len(), 2);
        assert_eq!(extra[0]["name"], json!("Shelf"));
        assert_eq!(extra[1]["name"], json!("Mirror"));
    }

    #[test]
    fn non_array_extra_treated_as_absent() {
        let section = json!({"_extra": "oops", "walls": {}});
        let entry = SectionEntry::from_value(&section).unwrap();
        assert!(entry.meta.extra.is_none());
    }

    #[test]
    fn non_object_extra_elements_dropped() {
        let section = json!({"_extra": [{"name": "Shelf"}, 42, null]});
        let entry = SectionEntry::from_value(&section).unwrap();
        assert_eq!(entry.meta.extra.unwrap().len(), 1);
    }

    #[test]
    fn unknown_reserved_keys_dropped() {
        let section = json!({"_futureFlag": true, "walls": {}});
        let entry = SectionEntry::from_value(&section).unwrap();
        let value = entry.into_value();
        assert!(value.get("_futureFlag").is_none());
        assert!(value.get("walls").is_some());
    }

    #[test]
    fn roundtrip_preserves_content() {
        let section = json!({
            "_hidden": true,
            "_hiddenItems": {"walls": true},
            "_itemOrder": ["walls"],
            "_extra": [{"name": "Shelf"}],
            "walls": {"condition": "Good", "photos": ["a.jpg"]},
        });
        let entry = SectionEntry::from_value(&section).unwrap();
        assert_eq!(entry.into_value(), section);
    }

    #[test]
    fn into_value_omits_absent_metadata() {
        let entry = SectionEntry::from_value(&json!({"walls": {}})).unwrap();
        let value = entry.into_value();
        assert_eq!(value, json!({"walls": {}}));
    }
}
