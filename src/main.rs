// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::store::TimeSeriesStore;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_source::source_from_config;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config().context("Failed to load config/dashboard")?;
    let settings = app_config
        .dashboard_settings()
        .context("Invalid dashboard configuration")?;

    // Load every dataset before exposing the dashboard
    let source = source_from_config(&app_config);
    let state = match TimeSeriesStore::load_all(source.as_ref()).await {
        Ok(store) => AppState::Ready {
            dashboard_service: DashboardService::new(Arc::new(store), settings),
        },
        Err(e) => {
            tracing::error!("{}", e);
            AppState::load_failed()
        }
    };

    let router = presentation::router(Arc::new(state));

    let addr: SocketAddr = app_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", app_config.server.bind))?;
    tracing::info!("Starting indicator-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
