//! Driving port for user listing.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user records
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every known user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
