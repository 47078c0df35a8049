//! The native collaborator seam.
//!
//! `CloudStore` abstracts over the platform's record store. The manager
//! forwards every operation here and returns whatever comes back; it never
//! reinterprets results or errors. Implementations typically bridge to a
//! platform framework; tests use plain in-process structs.

use std::sync::Arc;

use async_trait::async_trait;
use cirrus_core::Query;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::EventHub;
use crate::types::{
    AuthStatus, DeleteRequest, DeleteResult, PermissionStatus, QueryResult, SaveRequest,
    SaveResult, SyncStatus, User,
};

/// Operations the platform record store must provide.
#[async_trait]
pub trait CloudStore: Send + Sync {
    /// Attach to the configured container.
    ///
    /// The hub is where the store pushes events from here on.
    async fn initialize(&self, config: &Config, events: Arc<EventHub>) -> Result<()>;

    /// Current account authentication status.
    async fn auth_status(&self) -> Result<AuthStatus>;

    /// The signed-in user, if discoverable.
    async fn current_user(&self) -> Result<Option<User>>;

    /// Ask the user for record-access permissions.
    async fn request_permissions(&self) -> Result<PermissionStatus>;

    /// Run a query and return matching records.
    async fn query(&self, query: &Query) -> Result<QueryResult>;

    /// Save a batch of records.
    async fn save(&self, request: &SaveRequest) -> Result<SaveResult>;

    /// Delete a batch of records by name.
    async fn delete(&self, request: &DeleteRequest) -> Result<DeleteResult>;

    /// Current sync state.
    async fn sync_status(&self) -> Result<SyncStatus>;

    /// Kick off a sync pass and wait for it to finish.
    async fn sync(&self) -> Result<()>;

    /// Whether the store can be used at all on this device.
    async fn is_available(&self) -> Result<bool>;
}

/// A store for platforms without a cloud record store.
///
/// Every operation fails with [`Error::UnsupportedPlatform`] and
/// availability is always `false`, so application code can run unchanged
/// on platforms the real store does not cover.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

#[async_trait]
impl CloudStore for UnavailableStore {
    async fn initialize(&self, _config: &Config, _events: Arc<EventHub>) -> Result<()> {
        Err(Error::UnsupportedPlatform)
    }

    async fn auth_status(&self) -> Result<AuthStatus> {
        Err(Error::UnsupportedPlatform)
    }

    async fn current_user(&self) -> Result<Option<User>> {
        Err(Error::UnsupportedPlatform)
    }

    async fn request_permissions(&self) -> Result<PermissionStatus> {
        Err(Error::UnsupportedPlatform)
    }

    async fn query(&self, _query: &Query) -> Result<QueryResult> {
        Err(Error::UnsupportedPlatform)
    }

    async fn save(&self, _request: &SaveRequest) -> Result<SaveResult> {
        Err(Error::UnsupportedPlatform)
    }

    async fn delete(&self, _request: &DeleteRequest) -> Result<DeleteResult> {
        Err(Error::UnsupportedPlatform)
    }

    async fn sync_status(&self) -> Result<SyncStatus> {
        Err(Error::UnsupportedPlatform)
    }

    async fn sync(&self) -> Result<()> {
        Err(Error::UnsupportedPlatform)
    }

    async fn is_available(&self) -> Result<bool> {
        Ok(false)
    }
}
