//! Axum router wiring.
//!
//! Pages at `/`, `/statistics` and `/ai-basics`; statistics JSON at
//! `/statistics/:name`; static files under `/static`; everything else 404.

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::{app_state::AppState, error::AppError, ops, transport::http};

fn panic_response(_payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    AppError::Internal("handler panicked".into()).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.cfg().server.static_dir);

    Router::new()
        .route("/", get(http::home))
        .route("/statistics", get(http::statistics_page))
        .route("/statistics/:name", get(http::statistic))
        .route("/ai-basics", get(http::ai_basics))
        .route("/healthz", get(ops::healthz))
        .nest_service("/static", static_files)
        .fallback(http::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
