//! Typed shapes for record field values.
//!
//! Field values travel as loose JSON (`serde_json::Value`), which is what
//! the store's wire format carries. The structs here give callers typed
//! construction for the non-primitive shapes; each converts into `Value`
//! so it can be passed anywhere a field value is expected.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A point in time, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub timestamp: u64,
}

impl Timestamp {
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        json!({ "timestamp": ts.timestamp })
    }
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Location> for Value {
    fn from(location: Location) -> Self {
        json!({
            "latitude": location.latitude,
            "longitude": location.longitude,
        })
    }
}

/// A file attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub file_checksum: String,
    pub size: u64,
    #[serde(rename = "downloadURL", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl From<Asset> for Value {
    fn from(asset: Asset) -> Self {
        let mut value = json!({
            "fileChecksum": asset.file_checksum,
            "size": asset.size,
        });
        if let (Some(url), Some(map)) = (asset.download_url, value.as_object_mut()) {
            map.insert("downloadURL".to_string(), Value::String(url));
        }
        value
    }
}

/// What happens to a referencing record when its target is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceAction {
    DeleteSelf,
    None,
}

/// A pointer to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub record_name: String,
    pub action: ReferenceAction,
}

impl Reference {
    pub fn new(record_name: impl Into<String>, action: ReferenceAction) -> Self {
        Self {
            record_name: record_name.into(),
            action,
        }
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        json!({
            "recordName": reference.record_name,
            "action": reference.action,
        })
    }
}

/// A list of record references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceList {
    pub references: Vec<Reference>,
}

impl From<ReferenceList> for Value {
    fn from(list: ReferenceList) -> Self {
        json!({ "references": list.references })
    }
}

/// A list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringList {
    pub strings: Vec<String>,
}

impl StringList {
    pub fn new(strings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<StringList> for Value {
    fn from(list: StringList) -> Self {
        json!({ "strings": list.strings })
    }
}

/// Raw bytes, carried as base64 text and passed through opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bytes {
    pub bytes: String,
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        json!({ "bytes": bytes.bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::FieldClass;

    #[test]
    fn location_wire_shape() {
        let location = Location::new(37.7749, -122.4194);
        let json = serde_json::to_string(&location).unwrap();
        assert!(json.contains("latitude"));
        assert!(json.contains("longitude"));

        let parsed: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, location);
    }

    #[test]
    fn location_value_classifies_as_location() {
        let value: Value = Location::new(1.0, 2.0).into();
        assert_eq!(FieldClass::of(&value), FieldClass::Location);
    }

    #[test]
    fn string_list_value_classifies_as_list() {
        let value: Value = StringList::new(["red", "green"]).into();
        assert_eq!(FieldClass::of(&value), FieldClass::List);
    }

    #[test]
    fn reference_list_value_classifies_as_list() {
        let list = ReferenceList {
            references: vec![Reference::new("rec-1", ReferenceAction::None)],
        };
        let value: Value = list.into();
        assert_eq!(FieldClass::of(&value), FieldClass::List);
    }

    #[test]
    fn reference_action_wire_names() {
        let reference = Reference::new("rec-1", ReferenceAction::DeleteSelf);
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"recordName\":\"rec-1\""));
        assert!(json.contains("\"action\":\"DELETE_SELF\""));
    }

    #[test]
    fn asset_wire_shape() {
        let asset = Asset {
            file_checksum: "abc123".to_string(),
            size: 2048,
            download_url: None,
        };
        let json = serde_json::to_string(&asset).unwrap();
        assert!(json.contains("fileChecksum"));
        assert!(!json.contains("downloadURL"));

        let with_url = Asset {
            download_url: Some("https://example.com/blob".to_string()),
            ..asset
        };
        let value: Value = with_url.into();
        assert_eq!(value["downloadURL"], "https://example.com/blob");
    }

    #[test]
    fn timestamp_value_is_unclassified() {
        // Timestamp objects carry no list or location shape.
        let value: Value = Timestamp::new(1706745600000).into();
        assert_eq!(FieldClass::of(&value), FieldClass::Unclassified);
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = Bytes {
            bytes: "aGVsbG8=".to_string(),
        };
        let json = serde_json::to_string(&bytes).unwrap();
        let parsed: Bytes = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bytes);
    }
}
