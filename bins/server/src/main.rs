//! Valora API Server
//!
//! Main entry point for the purchasing-power conversion service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valora_api::{AppState, create_router};
use valora_core::InflationAdjuster;
use valora_data::DatasetLoader;
use valora_shared::{AppConfig, AppResult, DatasetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valora=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load the price-index dataset once; it is read-only from here on
    let adjuster = load_adjuster(&config.dataset).context("Failed to load price-index dataset")?;

    // Create application state
    let state = AppState::new(adjuster);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the conversion engine over the configured dataset.
fn load_adjuster(dataset: &DatasetConfig) -> AppResult<InflationAdjuster> {
    let (series, report) = DatasetLoader::from_config(dataset).load_path(&dataset.path)?;
    info!(
        path = %dataset.path,
        rows_read = report.rows_read,
        rows_skipped = report.rows_skipped,
        today = %report.last_period,
        "Inflation series ready"
    );

    Ok(InflationAdjuster::argentine(series))
}
