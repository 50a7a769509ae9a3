//! Shared harness: build the router over a temp static dir and drive it
//! with `oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use std::sync::Arc;

use statview_server::{
    app_state::AppState, config::ServiceConfig, dispatch::StatEndpoint, router,
};

pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
}

pub fn app_with(cfg: ServiceConfig) -> TestApp {
    app_with_endpoints(cfg, Vec::new())
}

/// Like `app_with`, with extra endpoints registered next to the built-ins.
pub fn app_with_endpoints(mut cfg: ServiceConfig, extra: Vec<Arc<dyn StatEndpoint>>) -> TestApp {
    let static_dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(static_dir.path().join("css")).expect("mkdir");
    std::fs::write(static_dir.path().join("css/style.css"), "body { margin: 0; }").expect("write");
    cfg.server.static_dir = static_dir.path().to_path_buf();

    let state = AppState::new(cfg).expect("state");
    let dispatcher = state.dispatcher();
    for endpoint in extra {
        dispatcher.register(endpoint);
    }
    TestApp { router: router::build_router(state), static_dir }
}

pub fn app() -> TestApp {
    let mut cfg = ServiceConfig::default();
    cfg.app.in_production = false;
    app_with(cfg)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let res = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    let status = res.status();
    let content_type = res
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = res.into_body().collect().await.expect("body").to_bytes().to_vec();
    (status, content_type, body)
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, content_type, body) = get(router, uri).await;
    assert_eq!(content_type.as_deref(), Some("application/json"), "{uri}");
    (status, serde_json::from_slice(&body).expect("json body"))
}
