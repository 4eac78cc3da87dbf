//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDetails, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A stored document could not be turned into a [`User`].
        Decode { message: String } => "user document could not be decoded: {message}",
    }
}

/// Storage contract for user records.
///
/// Adapters perform exactly one store round trip per call. Identifiers are
/// assigned by the store on insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record and return the store-assigned identifier.
    async fn insert(&self, details: &UserDetails) -> Result<UserId, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite all three text fields of the identified record.
    ///
    /// Returns the number of records the filter matched (0 or 1).
    async fn update(&self, id: &UserId, details: &UserDetails)
    -> Result<u64, UserPersistenceError>;

    /// Remove the identified record, returning how many records were removed.
    async fn delete(&self, id: &UserId) -> Result<u64, UserPersistenceError>;

    /// Every record in store iteration order.
    ///
    /// Stops at the first record that fails to decode.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
