//! Test utilities for the users crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`), which
//! reach it through the `test-support` feature.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{USER_ID_LEN, User, UserDetails, UserId};

/// Leading bytes shared by every identifier the in-memory store assigns.
const ID_PREFIX: [u8; 4] = *b"mem0";

/// [`UserRepository`] backed by a vector, preserving insertion order.
///
/// # Examples
/// ```
/// use users_api::domain::UserDetails;
/// use users_api::domain::ports::UserRepository;
/// use users_api::test_support::InMemoryUserRepository;
///
/// # tokio_test_block(async {
/// let repository = InMemoryUserRepository::default();
/// let details = UserDetails::try_from_parts("Ann", "NYC", "Eng").expect("valid");
/// let id = repository.insert(&details).await.expect("insert");
/// assert!(repository.find_by_id(&id).await.expect("query").is_some());
/// # });
/// # fn tokio_test_block(fut: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread()
/// #         .build()
/// #         .expect("runtime")
/// #         .block_on(fut);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    /// Seed the store with existing records.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users().is_empty()
    }

    fn users(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate_id(&self) -> UserId {
        let counter = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0_u8; USER_ID_LEN];
        let (prefix, suffix) = bytes.split_at_mut(ID_PREFIX.len());
        prefix.copy_from_slice(&ID_PREFIX);
        suffix.copy_from_slice(&counter.to_be_bytes());
        UserId::from_bytes(bytes)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, details: &UserDetails) -> Result<UserId, UserPersistenceError> {
        let id = self.allocate_id();
        self.users().push(User::new(id, details.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users().iter().find(|user| user.id() == *id).cloned())
    }

    async fn update(
        &self,
        id: &UserId,
        details: &UserDetails,
    ) -> Result<u64, UserPersistenceError> {
        let mut users = self.users();
        match users.iter_mut().find(|user| user.id() == *id) {
            Some(user) => {
                *user = User::new(*id, details.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let mut users = self.users();
        let before = users.len();
        users.retain(|user| user.id() != *id);
        Ok(u64::try_from(before - users.len()).unwrap_or(u64::MAX))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users().clone())
    }
}
