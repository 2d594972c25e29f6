use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::config::ScraperConfig;
use crate::crawler::Crawler;
use crate::discovery::UrlDiscoverer;
use crate::exporter::CsvExporter;
use crate::extractors::PageExtractor;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::pacing::{DelayRange, Pacer, RandomPacer};
use crate::ScrapeError;

/// Builder for configuring a [`Crawler`]
///
/// Anything left unset falls back to [`ScraperConfig::default`].
#[derive(Default)]
pub struct CrawlerBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    recipe_path_pattern: Option<String>,
    search_page_limit: Option<u32>,
    discovery_delay: Option<DelayRange>,
    fetch_delay: Option<DelayRange>,
    fetcher: Option<Arc<dyn Fetcher>>,
    pacer: Option<Arc<dyn Pacer>>,
    extractor: Option<PageExtractor>,
}

impl CrawlerBuilder {
    /// Take every crawl setting from a loaded configuration
    pub fn config(self, config: &ScraperConfig) -> Self {
        self.base_url(config.base_url.clone())
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .recipe_path_pattern(config.recipe_path_pattern.clone())
            .search_page_limit(config.search_page_limit)
            .discovery_delay(config.discovery_delay)
            .fetch_delay(config.fetch_delay)
    }

    /// Set the site root
    ///
    /// # Example
    /// ```
    /// use icook_scrape::Crawler;
    ///
    /// let builder = Crawler::builder().base_url("https://icook.tw");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Regex a link target has to match to be treated as a recipe page
    pub fn recipe_path_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.recipe_path_pattern = Some(pattern.into());
        self
    }

    pub fn search_page_limit(mut self, pages: u32) -> Self {
        self.search_page_limit = Some(pages);
        self
    }

    pub fn discovery_delay(mut self, delay: DelayRange) -> Self {
        self.discovery_delay = Some(delay);
        self
    }

    pub fn fetch_delay(mut self, delay: DelayRange) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Replace the HTTP fetcher. `user_agent` and `timeout` are ignored when set.
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Replace the pacing strategy, e.g. with [`crate::NoDelay`] in tests
    ///
    /// # Example
    /// ```
    /// use icook_scrape::{Crawler, NoDelay};
    ///
    /// let crawler = Crawler::builder().pacer(NoDelay).build();
    /// assert!(crawler.is_ok());
    /// ```
    pub fn pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Some(Arc::new(pacer));
        self
    }

    pub fn page_extractor(mut self, extractor: PageExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn build(self) -> Result<Crawler, ScrapeError> {
        let defaults = ScraperConfig::default();

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(&defaults.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(ScrapeError::BuilderError(format!(
                "{base_url} cannot be used as a site root"
            )));
        }

        let search_page_limit = self
            .search_page_limit
            .unwrap_or(defaults.search_page_limit);
        if search_page_limit == 0 {
            return Err(ScrapeError::BuilderError(
                "search page limit must be at least 1".to_string(),
            ));
        }

        let recipe_path = Regex::new(
            self.recipe_path_pattern
                .as_deref()
                .unwrap_or(&defaults.recipe_path_pattern),
        )?;

        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(RequestFetcher::new(
                self.user_agent.as_deref().unwrap_or(&defaults.user_agent),
                Some(self.timeout.unwrap_or(defaults.timeout())),
            )?),
        };
        let pacer: Arc<dyn Pacer> = self.pacer.unwrap_or_else(|| Arc::new(RandomPacer));
        let discovery_delay = self.discovery_delay.unwrap_or(defaults.discovery_delay);

        Ok(Crawler {
            discoverer: UrlDiscoverer::new(
                fetcher.clone(),
                pacer.clone(),
                base_url,
                recipe_path,
                discovery_delay,
            ),
            fetcher,
            pacer,
            extractor: self.extractor.unwrap_or_default(),
            exporter: CsvExporter,
            search_page_limit,
            discovery_delay,
            fetch_delay: self.fetch_delay.unwrap_or(defaults.fetch_delay),
        })
    }
}
