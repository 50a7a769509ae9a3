//! HTML pages (askama templates) and the startup page cache.

use std::collections::HashMap;

use askama::Template;
use bytes::Bytes;

use crate::error::{AppError, Result};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Statistics,
    AiBasics,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Statistics, Page::AiBasics];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Statistics => "statistics",
            Page::AiBasics => "ai-basics",
        }
    }

    fn render(self) -> Result<Bytes> {
        let html = match self {
            Page::Home => HomeTemplate { version: VERSION }.render(),
            Page::Statistics => StatisticsTemplate { version: VERSION, sections: SECTIONS }.render(),
            Page::AiBasics => AiBasicsTemplate { version: VERSION }.render(),
        }
        .map_err(|e| AppError::Template(format!("{}: {e}", self.name())))?;
        Ok(Bytes::from(html))
    }
}

pub struct Section {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

const SECTIONS: &[Section] = &[
    Section { name: "mean", title: "Mean", summary: "Average of 10,000 incomes drawn from N(27000, 15000)." },
    Section { name: "median", title: "Median", summary: "Middle value of the same income sample." },
    Section {
        name: "std-deviation-variance",
        title: "Standard deviation and variance",
        summary: "Spread of a sample drawn from N(100, 100).",
    },
    Section { name: "pdf", title: "Probability density", summary: "The standard normal density over [-3, 3]." },
    Section { name: "binomial", title: "Binomial PMF", summary: "Ten fair coin flips." },
    Section { name: "poisson", title: "Poisson PMF", summary: "Event counts around a mean of 500." },
    Section {
        name: "covcor",
        title: "Covariance and correlation",
        summary: "Page speed against purchase amount, without and with a dependency.",
    },
    Section {
        name: "linear-regression",
        title: "Linear regression",
        summary: "Least-squares fit of purchase amount on page speed.",
    },
];

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    version: &'a str,
}

#[derive(Template)]
#[template(path = "statistics.html")]
struct StatisticsTemplate<'a> {
    version: &'a str,
    sections: &'a [Section],
}

#[derive(Template)]
#[template(path = "ai_basics.html")]
struct AiBasicsTemplate<'a> {
    version: &'a str,
}

/// Serves pages from a cache filled at startup, or renders them per
/// request when caching is off. Every page is rendered once at startup
/// either way, so template errors fail the boot.
pub struct PageRenderer {
    cache: HashMap<Page, Bytes>,
}

impl PageRenderer {
    pub fn new(use_cache: bool) -> Result<Self> {
        let mut cache = HashMap::new();
        for page in Page::ALL {
            let html = page.render()?;
            if use_cache {
                cache.insert(page, html);
            }
        }
        Ok(Self { cache })
    }

    pub fn render(&self, page: Page) -> Result<Bytes> {
        match self.cache.get(&page) {
            Some(html) => Ok(html.clone()),
            None => page.render(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
