//! Flight delay prediction service
//!
//! Serves delay predictions over HTTP, backed by a balanced-class logistic
//! classifier trained on historical flight data.

use anyhow::Result;
use delay_api::{api, config::ServiceConfig};
use delay_model::{DelayModel, ServiceMetrics};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting delay-api");

    let config = ServiceConfig::load()?;
    info!(
        model_path = %config.model_path.display(),
        dataset_path = %config.dataset_path.display(),
        bootstrap_training = config.bootstrap_training,
        "Service configured"
    );

    let model = Arc::new(DelayModel::new(config.model_config()));
    let metrics = ServiceMetrics::new();
    metrics.set_model_readiness(model.readiness());
    info!(readiness = ?model.readiness(), "Model initialized");

    let state = Arc::new(api::AppState::new(model, metrics));

    let api_handle = tokio::spawn(api::serve(config.api_port, state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
