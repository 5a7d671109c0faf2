//! Router Configuration
//!
//! Routes plus the middleware stack shared by every route: request tracing,
//! permissive CORS, and a panic catcher that turns handler failures into
//! 500 responses without taking the server down.
//!
//! Paths are matched loosely: a trailing slash is ignored and letter case
//! does not matter, so `/API/health/` reaches `/api/health`.

use std::any::Any;

use axum::{
    Router,
    extract::{OriginalUri, Request},
    http::{Uri, uri::PathAndQuery},
    response::{IntoResponse, Response},
    routing::get,
};
use tower::{Layer, ServiceBuilder, util::MapRequest};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{error::ApiError, handlers, state::AppState};

/// The router behind path normalization.
pub type ApiService = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

/// Create the main service with all routes.
pub fn create_router(state: AppState) -> ApiService {
    normalize(with_middleware(routes(state)))
}

/// Routes without middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/data", get(handlers::data))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
}

/// Wrap a router in the global middleware stack.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Rewrite the request path before routing. Runs outside the router, since
/// layers added with `Router::layer` only see already-routed requests.
pub fn normalize(router: Router) -> ApiService {
    ServiceBuilder::new()
        .map_request(fold_case as fn(Request) -> Request)
        .service(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Lowercase the path, keeping the query untouched. The URI as sent is kept
/// in [`OriginalUri`] for error messages.
fn fold_case(mut request: Request) -> Request {
    let original = request.uri().clone();
    request
        .extensions_mut()
        .insert(OriginalUri(original.clone()));

    let path = original.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let lowered = match original.query() {
        Some(query) => format!("{}?{query}", path.to_ascii_lowercase()),
        None => path.to_ascii_lowercase(),
    };
    let mut parts = original.into_parts();
    let Ok(path_and_query) = PathAndQuery::try_from(lowered) else {
        return request;
    };
    parts.path_and_query = Some(path_and_query);
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(%message, "handler panicked");
    ApiError::Internal(message).into_response()
}
