//! Test utilities for the user directory crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct InMemoryState {
    users: Vec<User>,
    failure: Option<UserPersistenceError>,
}

/// `UserRepository` double holding users in insertion order.
///
/// Emulates the database unique constraint on `email`, and can be told to
/// fail every call to exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryUserRepository {
    /// Seed the repository with existing users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repository = Self::default();
        repository.lock().users.extend(users);
        repository
    }

    /// Make every subsequent call fail with `failure`.
    pub fn fail_with(&self, failure: UserPersistenceError) {
        self.lock().failure = Some(failure);
    }

    /// Copy of the stored users in insertion order.
    pub fn snapshot(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        Ok(state.users.clone())
    }

    async fn create(&self, user: &NewUser) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        if state.users.iter().any(|existing| existing.email() == user.email()) {
            return Err(UserPersistenceError::query("unique constraint violation"));
        }
        state.users.push(user.clone().into_user(UserId::random()));
        Ok(())
    }
}
