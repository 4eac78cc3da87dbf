//! Application settings loaded via OrthoConfig.
//!
//! Values come from `USERS_API_*` environment variables or the matching
//! command-line flags. The connection string also honours a bare `MONGOURI`
//! variable when `USERS_API_MONGO_URI` is unset.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_OPERATION_TIMEOUT;
use crate::outbound::persistence::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_DATABASE, DEFAULT_USER_COLLECTION,
};

/// Fallback environment variable for the connection string.
pub const LEGACY_MONGO_URI_ENV: &str = "MONGOURI";
/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:6000";

/// Settings problems that prevent startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Neither `USERS_API_MONGO_URI` nor `MONGOURI` is set.
    #[error("no MongoDB connection string: set USERS_API_MONGO_URI or {LEGACY_MONGO_URI_ENV}")]
    MissingMongoUri,
    /// The listen address is not `host:port` with a numeric host.
    #[error("invalid bind address {value:?}: {reason}")]
    InvalidBindAddr {
        /// Configured text.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// A timeout was configured as zero seconds.
    #[error("{setting} must be at least one second")]
    ZeroTimeout {
        /// Name of the offending setting.
        setting: &'static str,
    },
}

/// Configuration for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// MongoDB connection string.
    pub mongo_uri: Option<String>,
    /// Database holding the users collection.
    #[ortho_config(default = DEFAULT_DATABASE.to_owned())]
    pub database: String,
    /// Collection storing user documents.
    #[ortho_config(default = DEFAULT_USER_COLLECTION.to_owned())]
    pub collection: String,
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Upper bound on each database call, in seconds.
    #[ortho_config(default = DEFAULT_OPERATION_TIMEOUT.as_secs())]
    pub operation_timeout_secs: u64,
    /// Upper bound on the startup connection check, in seconds.
    #[ortho_config(default = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout_secs: u64,
}

impl AppSettings {
    /// Connection string, falling back to `MONGOURI`.
    pub fn mongo_uri(&self) -> Result<String, SettingsError> {
        self.mongo_uri
            .clone()
            .or_else(|| std::env::var(LEGACY_MONGO_URI_ENV).ok())
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(SettingsError::MissingMongoUri)
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                reason: err.to_string(),
            })
    }

    /// Per-call database timeout.
    pub fn operation_timeout(&self) -> Result<Duration, SettingsError> {
        seconds(self.operation_timeout_secs, "operation_timeout_secs")
    }

    /// Startup connection timeout.
    pub fn connect_timeout(&self) -> Result<Duration, SettingsError> {
        seconds(self.connect_timeout_secs, "connect_timeout_secs")
    }
}

fn seconds(value: u64, setting: &'static str) -> Result<Duration, SettingsError> {
    match value {
        0 => Err(SettingsError::ZeroTimeout { setting }),
        secs => Ok(Duration::from_secs(secs)),
    }
}
