//! # alarmhubd: alarm clock settings daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`alarmhub.toml`, environment overrides)
//! - Initialize logging
//! - Open the `SQLite` database and run migrations
//! - Construct repositories, the event bus and the application services
//! - Build the axum router and serve it
//! - Shut down gracefully on SIGINT/SIGTERM, or when stored credentials
//!   change and the device must come back up with the new network settings
//!
//! No domain logic belongs here.

mod config;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use alarmhub_adapter_http_axum::router;
use alarmhub_adapter_http_axum::state::AppState;
use alarmhub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteAlarmRepository, SqliteCredentialsRepository,
};
use alarmhub_app::event_bus::InProcessEventBus;
use alarmhub_app::restart::wait_for_restart;
use alarmhub_app::services::alarm_service::AlarmService;
use alarmhub_app::services::credentials_service::CredentialsService;
use alarmhub_domain::event::Event;

use crate::config::Config;

const EVENT_BUS_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to open settings database")?;
    let pool = db.pool().clone();

    // Repositories
    let alarm_repo = SqliteAlarmRepository::new(pool.clone());
    let credentials_repo = SqliteCredentialsRepository::new(pool);

    // Event bus, subscribed before any request can publish
    let event_bus = Arc::new(InProcessEventBus::new(EVENT_BUS_CAPACITY));
    let restart = wait_for_restart(event_bus.subscribe(), config.restart_delay());

    // Services
    let state = AppState::new(
        AlarmService::new(alarm_repo, Arc::clone(&event_bus)),
        CredentialsService::new(credentials_repo, event_bus),
    );
    let app = router::build(state);

    // HTTP
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "alarmhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(restart))
        .await
        .context("http server failed")?;

    tracing::info!("alarmhubd stopped");
    Ok(())
}

/// Resolve on SIGINT, SIGTERM, or once a credentials change asks for a restart.
async fn shutdown_signal(restart: impl Future<Output = Option<Event>>) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("interrupt received, shutting down"),
        () = terminate => tracing::info!("terminate received, shutting down"),
        Some(event) = restart => {
            tracing::info!(kind = ?event.kind, "restarting to apply new network settings");
        }
    }
}
