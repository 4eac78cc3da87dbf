//! User CRUD service implementing the [`UserDirectory`] driving port.
//!
//! Every repository call is bounded by the operation timeout. An elapsed
//! timeout drops the pending store call and surfaces an internal error.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UpdateOutcome, UserDirectory, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDetails, UserId};

/// Default bound applied to each repository call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Message reported when a lookup finds no record.
pub const NO_DOCUMENTS_MESSAGE: &str = "no documents in result";

/// Message reported when a delete matches no record.
pub const USER_NOT_FOUND_MESSAGE: &str = "User with specified ID not found!";

/// User service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
    operation_timeout: Duration,
}

impl<R> UserDirectoryService<R> {
    /// Create a service using [`DEFAULT_OPERATION_TIMEOUT`].
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// The per-call timeout in effect.
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn bounded<T, Fut>(&self, operation: &'static str, call: Fut) -> Result<T, Error>
    where
        Fut: Future<Output = Result<T, UserPersistenceError>>,
    {
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(result) => result.map_err(Self::map_persistence_error),
            Err(_) => {
                debug!(operation, timeout = ?self.operation_timeout, "user repository call timed out");
                Err(Error::internal(format!(
                    "{operation} timed out after {}ms",
                    self.operation_timeout.as_millis()
                )))
            }
        }
    }

    fn map_persistence_error(error: UserPersistenceError) -> Error {
        Error::internal(error.to_string())
    }

    async fn fetch_existing(&self, id: &UserId) -> Result<User, Error> {
        self.bounded("find user", self.repository.find_by_id(id))
            .await?
            .ok_or_else(|| Error::internal(NO_DOCUMENTS_MESSAGE))
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create(&self, details: UserDetails) -> Result<UserId, Error> {
        // Insert failures are answered as client errors on this endpoint.
        self.bounded("insert user", self.repository.insert(&details))
            .await
            .map_err(|error| Error::invalid_request(error.message()))
    }

    async fn get(&self, id: &UserId) -> Result<User, Error> {
        self.fetch_existing(id).await
    }

    async fn update(&self, id: &UserId, details: UserDetails) -> Result<UpdateOutcome, Error> {
        let matched = self
            .bounded("update user", self.repository.update(id, &details))
            .await?;
        if matched == 0 {
            return Ok(UpdateOutcome::NoMatch);
        }
        self.fetch_existing(id).await.map(UpdateOutcome::Updated)
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        let deleted = self
            .bounded("delete user", self.repository.delete(id))
            .await?;
        if deleted == 0 {
            return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        self.bounded("list users", self.repository.list()).await
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
