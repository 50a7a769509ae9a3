//! HTTP handlers: statistics JSON, HTML pages, fallback.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::dispatch::SampleOverrides;
use crate::error::AppError;
use crate::pages::Page;

/// `GET /statistics/{name}`
pub async fn statistic(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let result = match SampleOverrides::from_query(&query) {
        Ok(overrides) => state.dispatcher().dispatch(&name, overrides).await,
        Err(e) => Err(e.into()),
    };
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => e.into_response_for(state.in_production()),
    }
}

fn page(state: &AppState, page: Page) -> Response {
    match state.pages().render(page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_response_for(state.in_production()),
    }
}

pub async fn home(State(state): State<AppState>) -> Response {
    page(&state, Page::Home)
}

pub async fn statistics_page(State(state): State<AppState>) -> Response {
    page(&state, Page::Statistics)
}

pub async fn ai_basics(State(state): State<AppState>) -> Response {
    page(&state, Page::AiBasics)
}

pub async fn not_found(uri: axum::http::Uri) -> Response {
    AppError::NotFound(format!("no route for {}", uri.path())).into_response()
}
