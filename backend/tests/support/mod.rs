//! Shared helpers for integration tests.
//!
//! Database-backed suites run only when `TEST_DATABASE_URL` points at a
//! disposable PostgreSQL database. Without it they print a
//! `SKIP-TEST-DATABASE` marker and return early so local runs stay green.

use std::sync::OnceLock;

use user_directory::outbound::persistence::run_pending_migrations;

/// Environment variable naming the database used by integration tests.
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

static MIGRATED: OnceLock<Result<String, String>> = OnceLock::new();

/// Return a migrated database URL, or `None` when the suite should be skipped.
///
/// Migrations run once per test binary. A configured database that cannot be
/// migrated fails the test instead of skipping it, so CI breakage is not
/// masked.
pub fn migrated_database_url() -> Option<String> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL_ENV) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_ENV} is not set");
        return None;
    };
    if url.trim().is_empty() {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_ENV} is empty");
        return None;
    }

    let outcome = MIGRATED.get_or_init(|| {
        run_pending_migrations(&url)
            .map(|_| url.clone())
            .map_err(|err| err.to_string())
    });
    match outcome {
        Ok(url) => Some(url.clone()),
        Err(reason) => panic!("test database migration failed: {reason}"),
    }
}

/// An email address no other test run will have used.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}+{}@example.com", uuid::Uuid::new_v4().simple())
}
