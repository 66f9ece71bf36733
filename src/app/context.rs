use std::sync::Arc;

use crate::app::error::Result;
use crate::cache::{CacheLayout, ContentCache};
use crate::config::Config;
use crate::converter::Converter;
use crate::domain::PuzzleKey;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::puzzle::Puzzle;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub cache: ContentCache,
    pub layout: CacheLayout,
    pub converter: Converter,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let cache = ContentCache::new(fetcher.clone());
        let layout = CacheLayout::new(&config);

        Self {
            config,
            fetcher,
            cache,
            layout,
            converter: Converter::new(),
        }
    }

    pub fn puzzle(&self, key: PuzzleKey) -> Puzzle<'_> {
        Puzzle::new(self, key)
    }
}
