//! `solution-hub-server` - serves the solution directory over HTTP.
//!
//! Usage:
//!   solution-hub-server [-c config.yaml] [--bind <addr>] [--migrate-only]

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use solution_directory::SolutionDirectoryModule;
use tokio_util::sync::CancellationToken;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{AppConfig, LoggingConfig};

/// Solution Hub server.
#[derive(Parser, Debug)]
#[command(name = "solution-hub-server", about = "Solution Hub directory server")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides `server.bind`).
    #[arg(long = "bind")]
    bind: Option<String>,

    /// Apply database migrations and exit.
    #[arg(long = "migrate-only")]
    migrate_only: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Cancel `token` on Ctrl-C or SIGTERM
async fn shutdown_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
    token.cancel();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("invalid configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    init_tracing(&config.logging);
    if let Some(path) = &cli.config {
        info!("Loaded configuration from {}", path.display());
    }

    // Connect to the database.
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("failed to connect to the database")?;

    if config.database.auto_migrate || cli.migrate_only {
        SolutionDirectoryModule::migrate(&db).await?;
    }
    if cli.migrate_only {
        return Ok(());
    }

    // Initialize the directory module.
    let module = SolutionDirectoryModule::default();
    module.init(config.directory.clone(), Arc::new(db))?;

    let app = module
        .register_rest(Router::new())?
        .route("/health", get(|| async { "ok" }))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(TraceLayer::new_for_http());

    // Start server.
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;
    info!("Solution Hub server listening on {}", config.server.bind);

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Solution Hub server stopped");
    Ok(())
}
