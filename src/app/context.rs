use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::preview::extractor::MetadataExtractor;
use crate::preview::{self, PreviewCard};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub extractor: MetadataExtractor,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(&config.api_base)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Build a context around a caller-supplied fetcher. Used by tests to
    /// swap in a canned implementation.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            config,
            fetcher,
            extractor: MetadataExtractor::new(),
        }
    }

    /// Run the full link-preview pipeline for `url`: fetch the markup
    /// through the og endpoint, extract its metadata, render the card.
    /// Transport failures propagate unchanged.
    pub async fn preview(&self, url: &str) -> Result<PreviewCard> {
        let markup = self.fetcher.fetch_link_markup(url).await?;
        let page = self.extractor.extract(&markup);
        Ok(preview::render(url, page.title.as_deref(), &page.items))
    }
}
