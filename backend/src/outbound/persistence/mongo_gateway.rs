//! Process-wide handle on the MongoDB deployment.
//!
//! The gateway owns the single driver client for the process lifetime. The
//! client pools connections internally and is safe to share across Actix
//! workers, so collection handles are cheap clones taken from it.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

/// Default bound on connecting to and pinging the deployment.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default database name.
pub const DEFAULT_DATABASE: &str = "user_directory";

/// Errors raised while establishing the store connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The connection string could not be parsed or the client not built.
    #[error("invalid document store configuration: {message}")]
    Configuration { message: String },

    /// The deployment did not answer the liveness check.
    #[error("document store unreachable: {message}")]
    Unreachable { message: String },
}

impl GatewayError {
    /// Create a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unreachable error with the given message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }
}

/// Connection settings for [`MongoGateway::connect`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use users_api::outbound::persistence::GatewayConfig;
///
/// let config = GatewayConfig::new("mongodb://localhost:27017")
///     .with_database("people")
///     .with_connect_timeout(Duration::from_secs(3));
/// assert_eq!(config.database(), "people");
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    uri: String,
    database: String,
    connect_timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration for `uri` with default database and timeout.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Select the database holding the user collection.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the bound on connecting and the startup ping.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The connect and ping bound.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

/// Shared MongoDB client plus the selected database.
#[derive(Clone, Debug)]
pub struct MongoGateway {
    client: Client,
    database: Database,
}

impl MongoGateway {
    /// Connect to the deployment and verify it answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] for an unusable URI and
    /// [`GatewayError::Unreachable`] when the ping fails or does not answer
    /// within the configured timeout.
    pub async fn connect(config: GatewayConfig) -> Result<Self, GatewayError> {
        let GatewayConfig {
            uri,
            database,
            connect_timeout,
        } = config;

        let mut options = ClientOptions::parse(uri.as_str())
            .await
            .map_err(|err| GatewayError::configuration(err.to_string()))?;
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);

        let client =
            Client::with_options(options).map_err(|err| GatewayError::configuration(err.to_string()))?;
        let handle = client.database(&database);

        let ping = async { handle.run_command(doc! { "ping": 1 }).await };
        tokio::time::timeout(connect_timeout, ping)
            .await
            .map_err(|_| {
                GatewayError::unreachable(format!(
                    "ping not answered within {}ms",
                    connect_timeout.as_millis()
                ))
            })?
            .map_err(|err| GatewayError::unreachable(err.to_string()))?;

        info!(database = %database, "connected to document store");
        Ok(Self {
            client,
            database: handle,
        })
    }

    /// Typed handle on a named collection. Performs no I/O.
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.database.collection(name)
    }

    /// Close pooled connections once the server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("document store connection closed");
    }
}
