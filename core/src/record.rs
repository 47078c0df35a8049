//! Record types for stored data.

use crate::{field::Timestamp, FieldName, RecordName, RecordType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A stored record: a typed mapping of field name to field value,
/// identified by name, with optional change-tracking metadata.
///
/// Fields live in a `BTreeMap` so serialization order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique name identifying this record
    pub record_name: RecordName,
    /// The record's type
    pub record_type: RecordType,
    /// Field values by field name
    pub fields: BTreeMap<FieldName, Value>,
    /// Opaque change tag assigned by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_change_tag: Option<String>,
    /// When the record was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// When the record was last modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    /// Soft delete flag
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Record {
    /// Create a new record with no fields.
    pub fn new(record_name: impl Into<RecordName>, record_type: impl Into<RecordType>) -> Self {
        Self {
            record_name: record_name.into(),
            record_type: record_type.into(),
            fields: BTreeMap::new(),
            record_change_tag: None,
            created: None,
            modified: None,
            deleted: false,
        }
    }

    /// Builder-style method to set a field value.
    pub fn with_field(mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Check if the record is active (not deleted).
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_record() {
        let record = Record::new("note-1", "Note")
            .with_field("title", "Groceries")
            .with_field("priority", 2);

        assert_eq!(record.record_name, "note-1");
        assert_eq!(record.record_type, "Note");
        assert_eq!(record.field("title"), Some(&json!("Groceries")));
        assert_eq!(record.field("priority"), Some(&json!(2)));
        assert!(record.field("missing").is_none());
        assert!(record.is_active());
    }

    #[test]
    fn with_field_overwrites() {
        let record = Record::new("note-1", "Note")
            .with_field("title", "first")
            .with_field("title", "second");

        assert_eq!(record.field("title"), Some(&json!("second")));
        assert_eq!(record.fields.len(), 1);
    }

    #[test]
    fn wire_shape_omits_unset_metadata() {
        let record = Record::new("note-1", "Note").with_field("title", "Groceries");
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"recordName\":\"note-1\""));
        assert!(json.contains("\"recordType\":\"Note\""));
        assert!(!json.contains("recordChangeTag"));
        assert!(!json.contains("created"));
        assert!(!json.contains("deleted"));
    }

    #[test]
    fn wire_shape_with_metadata() {
        let mut record = Record::new("note-1", "Note");
        record.record_change_tag = Some("tag-7".to_string());
        record.created = Some(Timestamp::new(1706745600000));
        record.deleted = true;

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["recordChangeTag"], "tag-7");
        assert_eq!(value["created"]["timestamp"], 1706745600000u64);
        assert_eq!(value["deleted"], true);
        assert!(!record.is_active());
    }

    #[test]
    fn serialization_roundtrip() {
        let record = Record::new("note-1", "Note")
            .with_field("title", "Groceries")
            .with_field("tags", json!({"strings": ["errand"]}));

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn deleted_defaults_to_false_on_parse() {
        let record: Record =
            serde_json::from_str(r#"{"recordName":"n","recordType":"Note","fields":{}}"#).unwrap();
        assert!(record.is_active());
    }
}
