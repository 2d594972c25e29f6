use crate::builder::CrawlerBuilder;
use crate::config::ScraperConfig;
use crate::discovery::UrlDiscoverer;
use crate::exporter::CsvExporter;
use crate::extractors::{Extraction, PageExtractor};
use crate::fetchers::Fetcher;
use crate::model::{RecipeRecord, UrlSet};
use crate::pacing::{DelayRange, Pacer};
use crate::ScrapeError;
use log::{error, info};
use std::path::Path;
use std::sync::Arc;

/// Drives discovery, extraction and export for a list of keywords.
///
/// Requests are issued one at a time with a pause after each of them.
pub struct Crawler {
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) pacer: Arc<dyn Pacer>,
    pub(crate) discoverer: UrlDiscoverer,
    pub(crate) extractor: PageExtractor,
    pub(crate) exporter: CsvExporter,
    pub(crate) search_page_limit: u32,
    pub(crate) discovery_delay: DelayRange,
    pub(crate) fetch_delay: DelayRange,
}

impl Crawler {
    pub fn builder() -> CrawlerBuilder {
        CrawlerBuilder::default()
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::builder().config(config).build()
    }

    /// Candidate recipe URLs for all keywords, deduplicated in discovery order
    /// and capped at `max_recipes`
    pub async fn collect_urls<S: AsRef<str>>(
        &self,
        keywords: &[S],
        max_recipes: usize,
    ) -> UrlSet {
        let mut urls = UrlSet::new();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            info!("Searching keyword: \"{}\"", keyword);
            urls.extend(self.discoverer.discover(keyword, self.search_page_limit).await);
            self.pacer.pause(self.discovery_delay).await;
        }

        urls.truncate(max_recipes);
        urls
    }

    /// Fetches and extracts one recipe page
    pub async fn scrape_recipe(&self, url: &str) -> Extraction<RecipeRecord> {
        info!("Scraping: {}", url);
        match self.fetcher.fetch(url).await {
            Ok(body) => Extraction::Found(self.extractor.extract_html(&body, url)),
            Err(e) => {
                error!("Error scraping recipe {}: {}", url, e);
                Extraction::Failed(e.to_string())
            }
        }
    }

    /// Discovers and scrapes recipes without writing anything
    pub async fn crawl<S: AsRef<str>>(
        &self,
        keywords: &[S],
        max_recipes: usize,
    ) -> Vec<RecipeRecord> {
        let urls = self.collect_urls(keywords, max_recipes).await;
        let total = urls.len();
        info!("Scraping {} recipes", total);

        let mut records = Vec::new();
        for (index, url) in urls.iter().enumerate() {
            info!("Progress: {}/{}", index + 1, total);
            if let Extraction::Found(record) = self.scrape_recipe(url).await {
                if record.has_data() {
                    records.push(record);
                }
            }
            self.pacer.pause(self.fetch_delay).await;
        }

        records
    }

    /// Crawls and writes the export file. Write failures are logged, the
    /// scraped records are returned either way.
    pub async fn run<S: AsRef<str>>(
        &self,
        keywords: &[S],
        max_recipes: usize,
        output: &Path,
    ) -> Vec<RecipeRecord> {
        let records = self.crawl(keywords, max_recipes).await;

        if let Err(e) = self.exporter.write(&records, output).await {
            error!("Error saving {}: {}", output.display(), e);
        }

        info!(
            "Crawl finished: {} recipes scraped (limit {})",
            records.len(),
            max_recipes
        );
        records
    }
}
