//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use users_api::domain::ports::UserDirectory;

/// Everything the HTTP server needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserDirectory>,
}

impl ServerConfig {
    /// Construct a server configuration around the user use cases.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UserDirectory>) -> Self {
        Self { bind_addr, users }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
