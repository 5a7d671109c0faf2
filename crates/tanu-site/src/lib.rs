//! Tanu Videography Studio Website
//!
//! Marketing site for a wedding and event videography studio: three pages
//! (home, portfolio, contact) rendered through a small page router.

pub mod animation;
pub mod catalog;
pub mod content;
#[cfg(debug_assertions)]
pub mod dev_tools;
pub mod error;
pub mod handlers;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod router;
pub mod state;
pub mod templates;

use std::net::SocketAddr;
use std::path::Path;

use tanu_config::SiteConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use crate::{
    catalog::{Catalog, VideoEntry},
    error::SiteError,
    modal::{ClickOrigin, VideoModal, embed_url},
    navigation::PageRouter,
    page::PageId,
};
use crate::{router::create_router, state::AppState};

/// Build version for cache busting static assets.
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Stylesheet under `/public/css` linked by every page.
pub const STYLESHEET: &str = env!("SITE_STYLESHEET");

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(config: &SiteConfig) -> Result<(), SiteError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::BindFailed { addr, source })?;

    let state = AppState::new();
    if state.catalog().is_empty() {
        warn!("portfolio catalog is empty");
    } else {
        info!(videos = state.catalog().len(), "portfolio catalog loaded");
    }

    #[cfg(debug_assertions)]
    let state = {
        let state = state.with_reloader();
        let templates_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        dev_tools::spawn_file_watcher(state.clone(), vec![templates_dir, config.public_dir.clone()]);
        state
    };

    serve(listener, state, &config.public_dir, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    public_dir: &Path,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), SiteError> {
    let addr: SocketAddr = listener.local_addr()?;
    let app = create_router(state, public_dir);

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
