//! Driven port for user persistence adapters and their errors.
//!
//! The repository is a thin call-through: it neither checks for duplicates
//! nor retries. Constraint enforcement belongs to the backing store.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user record under a freshly generated identifier.
    async fn create(&self, user: &NewUser) -> Result<(), UserPersistenceError>;
}
