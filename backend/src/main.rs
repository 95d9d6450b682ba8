//! User directory entry-point: resolves configuration, prepares the
//! database, and serves the HTTP interface until terminated.

mod server;

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, SettingsError, create_server};
use user_directory::inbound::http::health::HealthState;
use user_directory::outbound::persistence::{
    DbPool, DieselUserRepository, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};

/// Failures that abort startup. Every variant exits the process with 1.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] SettingsError),
    #[error("database pool unavailable: {0}")]
    Pool(#[from] PoolError),
    #[error("database migrations failed: {0}")]
    Migration(#[from] MigrationError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server terminated with an error: {0}")]
    Serve(std::io::Error),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn apply_migrations(database_url: &str) -> Result<(), StartupError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| MigrationError::Apply {
            message: format!("migration task failed: {err}"),
        })??;
    info!(applied, "database schema up to date");
    Ok(())
}

async fn run(settings: ServerSettings) -> Result<(), StartupError> {
    apply_migrations(settings.database_url()).await?;
    let pool = DbPool::new(PoolConfig::new(settings.database_url())).await?;

    let config = ServerConfig::new(
        settings.bind_addr(),
        Arc::new(DieselUserRepository::new(pool)),
    );
    let addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let (server, bound) = create_server(health_state.clone(), config)
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(port = bound.port(), "server listening");

    let outcome = server.await.map_err(StartupError::Serve);
    health_state.mark_unhealthy();
    info!("server stopped");
    outcome
}

#[actix_web::main]
async fn main() -> ExitCode {
    init_tracing();

    let settings = match ServerSettings::load() {
        Ok(settings) => settings,
        Err(SettingsError::Args(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            error!(error = %err, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
