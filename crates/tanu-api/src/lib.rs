//! Tanu Videography Studio API
//!
//! A small JSON server answering fixed GET routes with a constant sample
//! document and a health status.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::net::SocketAddr;

use axum::{ServiceExt, extract::Request};
use tanu_config::ApiConfig;
use tokio::net::TcpListener;
use tracing::info;

pub use crate::error::{ApiError, ServeError};
use crate::{router::create_router, state::AppState};

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(config: &ApiConfig) -> Result<(), ServeError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::BindFailed { addr, source })?;

    serve(listener, AppState::new(config.environment.clone()), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServeError> {
    let addr: SocketAddr = listener.local_addr()?;
    let app = create_router(state);

    info!("Backend server running at http://{addr}");
    info!("API Data endpoint: http://{addr}/api/data");
    info!("Health check: http://{addr}/api/health");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
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
