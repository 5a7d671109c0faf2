//! Tanu Videography Studio Website
//!
//! Cinematic wedding and event films, served as a three-page site.

use anyhow::Context;
use tanu_config::StudioConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tanu_site=debug,tower_http=debug".parse().expect("valid filter")),
        )
        .with(fmt::layer())
        .init();

    let config = StudioConfig::load().context("failed to load configuration")?;

    tracing::info!("Starting Tanu Videography Studio website");

    tanu_site::run(&config.site).await?;
    Ok(())
}
