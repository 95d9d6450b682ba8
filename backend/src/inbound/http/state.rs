//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::UserDirectoryService;
use crate::domain::ports::{UserRegistration, UserRepository, UsersQuery};

/// Dependency bundle for the user handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Listing use-case.
    pub users: Arc<dyn UsersQuery>,
    /// Registration use-case.
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, registration: Arc<dyn UserRegistration>) -> Self {
        Self {
            users,
            registration,
        }
    }

    /// Wire both ports to a [`UserDirectoryService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_directory::domain::ports::UserRepository;
    /// use user_directory::inbound::http::state::HttpState;
    ///
    /// fn wire(repository: Arc<dyn UserRepository>) -> HttpState {
    ///     HttpState::from_repository(repository)
    /// }
    /// ```
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        let service = Arc::new(UserDirectoryService::new(repository));
        Self::new(service.clone(), service)
    }
}
