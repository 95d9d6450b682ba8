//! Outbound adapters implementing domain ports against infrastructure.
//!
//! Only PostgreSQL persistence is provided. Adapters translate between
//! domain types and storage representations and hold no business logic.

pub mod persistence;
