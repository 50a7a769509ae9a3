//! HTML pages, static files and ops endpoints.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::StatusCode;

use statview_server::config::ServiceConfig;
use statview_server::pages::{Page, PageRenderer};

#[tokio::test]
async fn pages_render_as_html() {
    let app = common::app();
    for (uri, marker) in [
        ("/", "<h1>statview</h1>"),
        ("/statistics", "data-endpoint=\"/statistics/linear-regression\""),
        ("/ai-basics", "Iterative deepening search"),
    ] {
        let (status, content_type, body) = common::get(&app.router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(content_type.unwrap().starts_with("text/html"), "{uri}");
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains(marker), "{uri} missing {marker}");
        assert!(html.contains(env!("CARGO_PKG_VERSION")), "{uri} missing footer");
    }
}

#[tokio::test]
async fn pages_render_without_cache() {
    let mut cfg = ServiceConfig::default();
    cfg.app.use_cache = false;
    let app = common::app_with(cfg);
    let (status, _, body) = common::get(&app.router, "/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Covariance and correlation"));
}

#[test]
fn cache_holds_every_page_only_when_enabled() {
    let cached = PageRenderer::new(true).unwrap();
    assert_eq!(cached.cached(), Page::ALL.len());
    let uncached = PageRenderer::new(false).unwrap();
    assert_eq!(uncached.cached(), 0);
    assert_eq!(cached.render(Page::Home).unwrap(), uncached.render(Page::Home).unwrap());
}

#[tokio::test]
async fn static_files_are_served_and_missing_ones_are_404() {
    let app = common::app();
    let (status, _, body) = common::get(&app.router, "/static/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body { margin: 0; }");

    let (status, _, _) = common::get(&app.router, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = common::app();
    let (status, _, body) = common::get(&app.router, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
