//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models`) and the table definition (`schema`) stay private
//! to this module; only domain types cross the port boundary. Connections
//! come from a `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use user_directory::domain::ports::UserRepository;
//! use user_directory::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repository: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool));
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
