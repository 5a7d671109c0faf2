//! Tanu Videography Studio API server

use anyhow::Context;
use tanu_config::StudioConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tanu_api=debug,tower_http=debug".parse().expect("valid filter")),
        )
        .with(fmt::layer())
        .init();

    let config = StudioConfig::load().context("failed to load configuration")?;

    tracing::info!(environment = %config.api.environment, "Starting Tanu API server");

    tanu_api::run(&config.api).await?;
    Ok(())
}
