//! Request, response, and status types for the store's operation surface.
//!
//! All shapes are JSON-encoded with camelCase field names and omitted
//! optional members, matching what the native side sends and expects.

use chrono::{DateTime, Utc};
use cirrus_core::{Record, RecordName};
use serde::{Deserialize, Serialize};

/// Account authentication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthStatus {
    Available,
    Restricted,
    NoAccount,
    CouldNotDetermine,
}

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Restricted,
    Limited,
    Undetermined,
}

/// An error reported by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    /// Human-readable failure description
    pub reason: String,
    /// Stable error code
    pub server_error_code: String,
    /// Seconds to wait before retrying, when the store suggests one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Identifier for support correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Where to go instead, for redirect-style failures
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl ServerError {
    /// Create a server error with just a reason and code.
    pub fn new(reason: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            server_error_code: code.into(),
            retry_after: None,
            uuid: None,
            redirect_url: None,
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.reason, self.server_error_code)
    }
}

/// Components of a user's name, as far as they are discoverable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameComponents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Record name of the user's own record
    pub user_record_name: RecordName,
    /// Whether other users may discover this one
    pub is_discoverable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_components: Option<NameComponents>,
}

/// Result of a query operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Matched records
    pub records: Vec<Record>,
    /// Opaque cursor for fetching the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_marker: Option<String>,
    /// Whether more results exist beyond this page
    pub more_coming: bool,
}

/// A batch of records to save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub records: Vec<Record>,
    /// All-or-nothing semantics when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic: Option<bool>,
}

impl SaveRequest {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            atomic: None,
        }
    }
}

/// Result of a save operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    /// Saved records with fresh change tags
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_error: Option<ServerError>,
}

/// A batch of records to delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub record_names: Vec<RecordName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic: Option<bool>,
}

impl DeleteRequest {
    pub fn new(record_names: impl IntoIterator<Item = impl Into<RecordName>>) -> Self {
        Self {
            record_names: record_names.into_iter().map(Into::into).collect(),
            atomic: None,
        }
    }
}

/// Result of a delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Tombstoned records
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_error: Option<ServerError>,
}

/// Current sync state of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    /// Whether a sync pass is running right now
    pub is_syncing: bool,
    /// When the last successful sync finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_date: Option<DateTime<Utc>>,
    /// The last sync failure, if one is sticking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServerError>,
}
