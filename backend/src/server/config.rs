//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use user_directory::domain::ports::UserRepository;

/// Everything [`super::create_server`] needs to build and bind the server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Bind to `bind_addr` and serve users from `repository`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn UserRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
