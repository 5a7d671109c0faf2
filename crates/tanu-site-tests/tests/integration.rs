//! End-to-end tests for both servers.
//!
//! Each test boots the server it needs on an ephemeral localhost port and
//! talks to it over real HTTP.

use std::net::SocketAddr;
use std::path::Path;

use serde_json::Value;
use tokio::net::TcpListener;

async fn bind() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

async fn start_api() -> String {
    let (listener, addr) = bind().await;
    tokio::spawn(tanu_api::serve(
        listener,
        tanu_api::state::AppState::default(),
        std::future::pending(),
    ));
    format!("http://{addr}")
}

async fn start_site() -> String {
    let (listener, addr) = bind().await;
    let public_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tanu-site/public");
    tokio::spawn(async move {
        tanu_site::serve(
            listener,
            tanu_site::state::AppState::new(),
            &public_dir,
            std::future::pending(),
        )
        .await
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_api_health() {
    let base = start_api().await;
    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), 200, "health should return 200");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_api_unknown_endpoint() {
    let base = start_api().await;
    let resp = reqwest::get(format!("{base}/api/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_api_allows_cross_origin() {
    let base = start_api().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/data"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(
        resp.headers().contains_key("access-control-allow-origin"),
        "API should answer cross-origin requests"
    );
}

#[tokio::test]
async fn test_site_pages_load() {
    let base = start_site().await;
    let client = reqwest::Client::new();
    for page in ["/", "/portfolio", "/contact", "/portfolio/watch/2"] {
        let resp = client.get(format!("{base}{page}")).send().await.unwrap();
        assert_eq!(resp.status(), 200, "page {page} should load");
        let body = resp.text().await.unwrap();
        assert_eq!(
            body.matches("nav-button-glow").count(),
            1,
            "page {page} should highlight exactly one nav button"
        );
    }
}

#[tokio::test]
async fn test_site_serves_stylesheet() {
    let base = start_site().await;
    let resp = reqwest::get(format!("{base}/public/css/site.css"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "site.css should be served");
    let body = resp.text().await.unwrap();
    assert!(body.contains("@keyframes slide-in"));
}

#[tokio::test]
async fn test_site_x_frame_options_is_deny() {
    let base = start_site().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    let xfo = resp
        .headers()
        .get("x-frame-options")
        .expect("X-Frame-Options header must be present")
        .to_str()
        .unwrap();
    assert_eq!(xfo, "DENY", "X-Frame-Options should be DENY");
}

#[tokio::test]
async fn test_site_404_is_graceful() {
    let base = start_site().await;
    let resp = reqwest::get(format!("{base}/nonexistent-page-12345"))
        .await
        .unwrap();
    // Should return 404, not 500
    assert_eq!(resp.status(), 404, "Unknown pages should return 404");
}
