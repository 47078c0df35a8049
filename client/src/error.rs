//! Unified error handling for the client.

use crate::config::ConfigError;
use crate::types::ServerError;

/// All possible errors from the cloud store client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation ran before `initialize()` succeeded.
    #[error("cloud store not initialized: call initialize() first")]
    NotInitialized,

    /// The platform has no cloud record store.
    #[error("cloud storage is not available on this platform")]
    UnsupportedPlatform,

    /// The platform should have a store, but the native module is absent.
    #[error("native cloud store module not available")]
    BackendMissing,

    /// The supplied configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The store reported an error; carried through unchanged.
    #[error("server error: {0}")]
    Server(ServerError),
}

impl From<ServerError> for Error {
    fn from(err: ServerError) -> Self {
        Error::Server(err)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
