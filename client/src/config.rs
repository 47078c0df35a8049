//! Configuration for the cloud store manager.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Which store environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

/// Manager configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Identifier of the store container to attach to
    pub container_identifier: String,
    /// API token for web-service access, if the platform needs one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Target environment
    pub environment: Environment,
    /// Log store events as they arrive
    #[serde(default)]
    pub enable_notifications: bool,
    /// Background sync interval in milliseconds, if the platform honors one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_interval: Option<u64>,
}

impl Config {
    /// Create a configuration for the given container and environment.
    pub fn new(container_identifier: impl Into<String>, environment: Environment) -> Self {
        Self {
            container_identifier: container_identifier.into(),
            api_token: None,
            environment,
            enable_notifications: false,
            sync_interval: None,
        }
    }

    /// Builder-style method to set the API token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Builder-style method to enable event logging.
    pub fn with_notifications(mut self) -> Self {
        self.enable_notifications = true;
        self
    }

    /// Builder-style method to set the sync interval.
    pub fn with_sync_interval(mut self, millis: u64) -> Self {
        self.sync_interval = Some(millis);
        self
    }

    /// Check the configuration before handing it to the store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_identifier.is_empty() {
            return Err(ConfigError::MissingContainerIdentifier);
        }
        Ok(())
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let container_identifier =
            env::var("CIRRUS_CONTAINER_ID").map_err(|_| ConfigError::MissingContainerIdentifier)?;

        let environment = match env::var("CIRRUS_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };

        let api_token = env::var("CIRRUS_API_TOKEN").ok();

        let sync_interval = match env::var("CIRRUS_SYNC_INTERVAL_MS") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::InvalidSyncInterval)?),
            Err(_) => None,
        };

        let config = Self {
            container_identifier,
            api_token,
            environment,
            enable_notifications: false,
            sync_interval,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("containerIdentifier is required")]
    MissingContainerIdentifier,

    #[error("environment must be \"development\" or \"production\", got {0:?}")]
    InvalidEnvironment(String),

    #[error("invalid sync interval value")]
    InvalidSyncInterval,
}
