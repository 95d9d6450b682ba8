//! User directory use-case backing the list and create endpoints.
//!
//! The service forwards calls to the [`UserRepository`] port unchanged and
//! only translates persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{UserPersistenceError, UserRegistration, UserRepository, UsersQuery};
use crate::domain::{Error, NewUser, User};

/// Domain service implementing [`UsersQuery`] and [`UserRegistration`].
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(operation: &'static str, error: UserPersistenceError) -> Error {
    error!(%error, operation, "user repository call failed");
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(|err| map_persistence_error("list_all", err))
    }
}

#[async_trait]
impl UserRegistration for UserDirectoryService {
    async fn register(&self, user: NewUser) -> Result<(), Error> {
        self.repository
            .create(&user)
            .await
            .map_err(|err| map_persistence_error("create", err))?;
        info!("user registered");
        Ok(())
    }
}
