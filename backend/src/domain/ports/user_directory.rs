//! Driving port for the user CRUD use cases.
//!
//! HTTP handlers depend on this trait only, so they can be exercised with a
//! mock and never see persistence types.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDetails, UserId};

/// Result of an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record matched and was re-read after the write.
    Updated(User),
    /// No record carries the identifier; nothing was written.
    NoMatch,
}

/// Use-case port for creating, reading, updating, deleting and listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Persist a new user and return its store-assigned identifier.
    async fn create(&self, details: UserDetails) -> Result<UserId, Error>;

    /// Fetch exactly one user.
    async fn get(&self, id: &UserId) -> Result<User, Error>;

    /// Overwrite the text fields of an existing user.
    async fn update(&self, id: &UserId, details: UserDetails) -> Result<UpdateOutcome, Error>;

    /// Remove a user.
    async fn delete(&self, id: &UserId) -> Result<(), Error>;

    /// Every stored user.
    async fn list(&self) -> Result<Vec<User>, Error>;
}
