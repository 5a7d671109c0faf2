//! Site error types.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised while rendering or serving the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// Slug does not name a page.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] tanu_config::ConfigError),

    /// Bind failed.
    #[error("failed to bind to {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownPage(slug) => {
                (StatusCode::NOT_FOUND, format!("unknown page: {slug}")).into_response()
            }
            other => {
                tracing::error!("request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
