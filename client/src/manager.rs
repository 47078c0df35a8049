//! The manager façade over the platform record store.
//!
//! `CloudManager` owns the store seam, the event hub, and the applied
//! configuration. It guards every operation behind the initialized flag
//! and otherwise forwards verbatim: descriptors go to the store untouched,
//! results and errors come back untouched. Calls are not serialized
//! against each other; any number may be in flight and they complete in
//! whatever order the store finishes them.
//!
//! Construct one at the application's composition root and pass it where
//! it is needed; there is no process-wide instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cirrus_core::Query;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{Event, EventHub, EventKind, Subscription};
use crate::store::CloudStore;
use crate::types::{
    AuthStatus, DeleteRequest, DeleteResult, PermissionStatus, QueryResult, SaveRequest,
    SaveResult, SyncStatus, User,
};

/// Async façade over a [`CloudStore`].
#[derive(Debug)]
pub struct CloudManager<S: CloudStore> {
    store: S,
    events: Arc<EventHub>,
    config: Mutex<Option<Config>>,
}

impl<S: CloudStore> CloudManager<S> {
    /// Create a manager over the given store. No store calls happen until
    /// [`CloudManager::initialize`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            events: EventHub::new_shared(),
            config: Mutex::new(None),
        }
    }

    /// Initialize the store with the given configuration.
    ///
    /// Must succeed before any other operation. When
    /// `enable_notifications` is set, auth, sync, and error events are
    /// logged as they arrive.
    pub async fn initialize(&self, config: Config) -> Result<()> {
        config.validate()?;

        self.store
            .initialize(&config, Arc::clone(&self.events))
            .await?;

        let enable_notifications = config.enable_notifications;
        *self.config_slot() = Some(config);
        tracing::info!("cloud store initialized");

        if enable_notifications {
            self.spawn_event_logging();
        }
        Ok(())
    }

    /// Whether [`CloudManager::initialize`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.config_slot().is_some()
    }

    /// Current account authentication status.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        self.ensure_initialized()?;
        self.store.auth_status().await
    }

    /// The signed-in user, if discoverable.
    pub async fn current_user(&self) -> Result<Option<User>> {
        self.ensure_initialized()?;
        self.store.current_user().await
    }

    /// Ask the user for record-access permissions.
    pub async fn request_permissions(&self) -> Result<PermissionStatus> {
        self.ensure_initialized()?;
        self.store.request_permissions().await
    }

    /// Run a query.
    pub async fn query(&self, query: &Query) -> Result<QueryResult> {
        self.ensure_initialized()?;
        tracing::debug!(record_type = %query.record_type, filters = query.filter_by.len(), "querying records");
        self.store.query(query).await
    }

    /// Save a batch of records.
    pub async fn save(&self, request: &SaveRequest) -> Result<SaveResult> {
        self.ensure_initialized()?;
        tracing::debug!(records = request.records.len(), "saving records");
        self.store.save(request).await
    }

    /// Delete a batch of records by name.
    pub async fn delete(&self, request: &DeleteRequest) -> Result<DeleteResult> {
        self.ensure_initialized()?;
        tracing::debug!(records = request.record_names.len(), "deleting records");
        self.store.delete(request).await
    }

    /// Current sync state.
    pub async fn sync_status(&self) -> Result<SyncStatus> {
        self.ensure_initialized()?;
        self.store.sync_status().await
    }

    /// Kick off a sync pass and wait for it to finish.
    pub async fn sync(&self) -> Result<()> {
        self.ensure_initialized()?;
        tracing::debug!("sync requested");
        self.store.sync().await
    }

    /// Whether the store can be used on this device.
    ///
    /// Never fails: a store that errors while answering counts as
    /// unavailable. Usable before `initialize`.
    pub async fn is_available(&self) -> bool {
        self.store.is_available().await.unwrap_or(false)
    }

    /// Subscribe to one kind of store event.
    ///
    /// The subscription detaches when dropped.
    pub fn subscribe(&self, kind: EventKind) -> Subscription {
        Subscription::new(Arc::clone(&self.events), kind)
    }

    /// Remove every event subscription.
    ///
    /// Outstanding [`Subscription`]s drain buffered events and then end.
    pub fn cleanup(&self) {
        self.events.clear();
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn config_slot(&self) -> MutexGuard<'_, Option<Config>> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_event_logging(&self) {
        for kind in [
            EventKind::AuthStatusChanged,
            EventKind::SyncStatusChanged,
            EventKind::Error,
        ] {
            let mut subscription = self.subscribe(kind);
            tokio::spawn(async move {
                while let Some(event) = subscription.recv().await {
                    match event {
                        Event::AuthStatusChanged(status) => {
                            tracing::info!(?status, "auth status changed")
                        }
                        Event::SyncStatusChanged(status) => {
                            tracing::info!(is_syncing = status.is_syncing, "sync status changed")
                        }
                        Event::Error(error) => tracing::warn!(%error, "cloud store error"),
                        Event::RecordsChanged(records) => {
                            tracing::info!(records = records.len(), "records changed")
                        }
                    }
                }
            });
        }
    }
}
