//! Driving port for creating users.

use async_trait::async_trait;

use crate::domain::{Error, NewUser};

/// Domain use-case port for registering a validated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Persist `user`. Nothing is returned on success.
    async fn register(&self, user: NewUser) -> Result<(), Error>;
}
