//! Router Configuration
//!
//! Route configuration for the website.

use std::path::Path;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::get,
};
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::{handlers, state::AppState};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     img-src 'self' https://images.unsplash.com data:; \
     frame-src https://www.youtube.com; \
     style-src 'self' 'unsafe-inline'; \
     script-src 'self'; \
     object-src 'none'; \
     base-uri 'self'";

/// Create the main router with all routes.
pub fn create_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let router = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/portfolio", get(handlers::pages::portfolio))
        .route("/portfolio/watch/{id}", get(handlers::pages::watch))
        .route("/contact", get(handlers::pages::contact))
        .route("/fragments/{page}", get(handlers::fragments::fragment))
        .nest_service("/public", ServeDir::new(public_dir.as_ref()))
        .fallback(handlers::pages::not_found);

    #[cfg(debug_assertions)]
    let router = router.route("/__livereload", get(crate::dev_tools::livereload_handler));

    with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn with_security_headers(router: Router<AppState>) -> Router<AppState> {
    let headers: [(HeaderName, &'static str); 5] = [
        (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
        (
            header::STRICT_TRANSPORT_SECURITY,
            "max-age=31536000; includeSubDomains",
        ),
        (header::X_FRAME_OPTIONS, "DENY"),
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
    ];

    headers.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(), "public")
    }

    async fn fetch(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let resp = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_pages_load_with_matching_nav() {
        for (path, button) in [
            ("/", "home-btn"),
            ("/portfolio", "portfolio-btn"),
            ("/contact", "contact-btn"),
        ] {
            let (status, _, body) = fetch(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body.matches("nav-button-glow").count(), 1, "{path}");
            assert!(
                body.contains(&format!("id=\"{button}\" href=\"{path}\" class=\"nav-button bg-gradient")),
                "{path} should highlight {button}"
            );
        }
    }

    #[tokio::test]
    async fn test_fragment_endpoint() {
        let (status, _, body) = fetch("/fragments/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"contact-section\""));
        assert!(!body.contains("<nav"));
    }

    #[tokio::test]
    async fn test_unknown_fragment_is_404() {
        let (status, _, body) = fetch("/fragments/frontend?swap=1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/fragments/frontend"));
        assert!(!body.contains("swap=1"));
    }

    #[tokio::test]
    async fn test_watch_opens_modal() {
        let (status, _, body) = fetch("/portfolio/watch/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("video-modal active"));
        assert!(body.contains("https://www.youtube.com/embed/J-JcxmSP3fM?autoplay=1"));
    }

    #[tokio::test]
    async fn test_watch_unknown_video_shows_plain_portfolio() {
        for path in ["/portfolio/watch/77", "/portfolio/watch/abc"] {
            let (status, _, body) = fetch(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains("id=\"portfolio-section\""));
            assert!(!body.contains("video-modal active"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_profile_image_is_served() {
        let (_, _, home) = fetch("/").await;
        assert!(home.contains("src=\"/public/images/profile.svg\""));

        let (status, headers, _) = fetch("/public/images/profile.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/svg+xml");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, headers, body) = fetch("/nonexistent-page-12345").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/nonexistent-page-12345"));
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let (_, headers, _) = fetch("/").await;
        for name in [
            header::CONTENT_SECURITY_POLICY,
            header::STRICT_TRANSPORT_SECURITY,
            header::X_FRAME_OPTIONS,
            header::X_CONTENT_TYPE_OPTIONS,
            header::REFERRER_POLICY,
        ] {
            assert!(headers.contains_key(&name), "missing {name}");
        }
    }
}
