//! # Cirrus Client
//!
//! Async manager façade over a platform cloud record store.
//!
//! This crate carries query descriptors built with `cirrus-core` to a
//! platform record store and returns its answers untouched. The store is
//! an injected [`CloudStore`] implementation; the manager adds the
//! initialized-flag guard, configuration validation, and a typed event
//! stream, and nothing else. There is no retry logic, no caching, and no
//! conflict resolution here; the platform owns all of that.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cirrus_client::{CloudManager, Config, Environment, EventKind, UnavailableStore};
//! use cirrus_core::create_query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cirrus_client::Error> {
//!     // Swap in your platform's store implementation.
//!     let manager = CloudManager::new(UnavailableStore);
//!
//!     let config = Config::new("iCloud.com.example.notes", Environment::Development);
//!     manager.initialize(config).await?;
//!
//!     let query = create_query("Note")
//!         .equals("archived", false)
//!         .sort_descending("modifiedAt")
//!         .limit(25)
//!         .build();
//!     let result = manager.query(&query).await?;
//!     println!("{} records", result.records.len());
//!
//!     // React to remote changes.
//!     let mut changes = manager.subscribe(EventKind::RecordsChanged);
//!     while let Some(event) = changes.recv().await {
//!         println!("{event:?}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod manager;
pub mod store;
pub mod types;

// Re-export main types at crate root
pub use config::{Config, ConfigError, Environment};
pub use error::{Error, Result};
pub use events::{Event, EventHub, EventKind, Subscription, SubscriptionId};
pub use manager::CloudManager;
pub use store::{CloudStore, UnavailableStore};
pub use types::{
    AuthStatus, DeleteRequest, DeleteResult, NameComponents, PermissionStatus, QueryResult,
    SaveRequest, SaveResult, ServerError, SyncStatus, User,
};
