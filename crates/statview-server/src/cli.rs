//! Command-line flags. Flags override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, ServiceConfig};
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "statview-server", version, about = "Serve sampled statistics and their charts over HTTP")]
pub struct Cli {
    /// YAML config file; built-in defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Application is in production (redacts internal error details).
    #[arg(long, value_name = "BOOL")]
    pub production: Option<bool>,

    /// Serve pages from the startup template cache.
    #[arg(long, value_name = "BOOL")]
    pub cache: Option<bool>,

    /// Listen address, e.g. 127.0.0.1:8080.
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<String>,
}

impl Cli {
    /// Resolve the effective, validated config.
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ServiceConfig::default(),
        };
        if let Some(production) = self.production {
            cfg.app.in_production = production;
        }
        if let Some(cache) = self.cache {
            cfg.app.use_cache = cache;
        }
        if let Some(listen) = &self.listen {
            cfg.server.listen = listen.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
