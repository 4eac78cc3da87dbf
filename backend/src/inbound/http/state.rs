//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User CRUD use cases.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state around a user directory implementation.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
