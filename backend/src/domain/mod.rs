//! Domain primitives, ports, and use-cases.
//!
//! Purpose: define strongly typed user entities and the use-case service used
//! by the HTTP and persistence adapters. Types are immutable and document
//! their invariants and serde contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload and category.
//! - User, NewUser, UserId, UserName, EmailAddress: the user aggregate.
//! - TraceId: request correlation identifier.
//! - UserDirectoryService: list and register use-cases over the repository.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};
pub use self::user_directory::UserDirectoryService;
