//! API error types.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients as JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matched the request.
    #[error("The endpoint {method} {path} does not exist")]
    NotFound { method: String, path: String },

    /// A handler failed. The message is passed through unsanitized.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Not Found",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.label(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Errors that stop the server itself.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Bind failed.
    #[error("failed to bind to {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] tanu_config::ConfigError),

    /// I/O error while serving.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
