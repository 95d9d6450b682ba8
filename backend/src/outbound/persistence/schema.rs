//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after a migration changes the table.

diesel::table! {
    /// Registered users.
    ///
    /// `email` carries the `users_email_key` unique constraint.
    users (id) {
        /// Primary key: UUID v4 generated by the service.
        id -> Uuid,
        /// Name exactly as submitted.
        name -> Text,
        /// Email address exactly as submitted.
        email -> Text,
        /// Insert timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
