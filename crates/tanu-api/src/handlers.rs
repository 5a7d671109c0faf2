//! Route Handlers

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::Method,
};
use serde::Serialize;

use crate::{
    error::ApiError,
    state::{AppState, SampleDocument, iso_timestamp},
};

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub data: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// Handler for / - lists the available endpoints.
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Backend API",
        endpoints: Endpoints {
            data: "GET /api/data",
            health: "GET /api/health",
        },
    })
}

/// Handler for /api/data.
pub async fn data(State(state): State<AppState>) -> Json<SampleDocument> {
    Json(state.sample().clone())
}

/// Handler for /api/health. Always healthy while the process is up.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: iso_timestamp(),
    })
}

/// Fallback for unmatched paths and methods.
///
/// Reports the path as the client sent it, before normalization.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(%method, path = uri.path(), "no route");
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
