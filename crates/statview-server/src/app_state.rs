//! Shared application state for the statview server.
//!
//! Built once at startup and handed to the router; read-only afterwards.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::pages::PageRenderer;
use crate::services;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    pages: PageRenderer,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        cfg.validate()?;

        let pages = PageRenderer::new(cfg.app.use_cache)?;

        let dispatcher = Dispatcher::new();
        for endpoint in services::builtin(&cfg) {
            dispatcher.register(endpoint);
        }

        tracing::info!(
            endpoints = ?dispatcher.registered(),
            cached_pages = pages.cached(),
            in_production = cfg.app.in_production,
            "application state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, pages }),
            dispatcher: Arc::new(dispatcher),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn in_production(&self) -> bool {
        self.inner.cfg.app.in_production
    }

    pub fn pages(&self) -> &PageRenderer {
        &self.inner.pages
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
