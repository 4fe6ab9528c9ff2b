//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use user_service::domain::ports::UserRepository;

/// Everything `create_server` needs besides the health flags.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` and serving `users`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UserRepository>) -> Self {
        Self { bind_addr, users }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by server tests when asserting the bound address")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
