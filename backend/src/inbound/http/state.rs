//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the domain
//! port, never a concrete adapter.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User storage shared by every worker.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Bundle the repository for handler injection.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_service::inbound::http::state::HttpState;
    /// use user_service::outbound::persistence::InMemoryUserRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryUserRepository::new()));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
