pub mod builder;
pub mod config;
pub mod crawler;
pub mod discovery;
pub mod error;
pub mod exporter;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pacing;

use std::path::Path;

pub use builder::CrawlerBuilder;
pub use config::ScraperConfig;
pub use crawler::Crawler;
pub use discovery::UrlDiscoverer;
pub use error::ScrapeError;
pub use exporter::CsvExporter;
pub use extractors::{Extraction, IngredientExtractor, PageExtractor};
pub use fetchers::{Fetcher, RequestFetcher};
pub use model::{Ingredient, RecipeRecord, UrlSet};
pub use pacing::{DelayRange, NoDelay, Pacer, RandomPacer};

/// Crawl icook.tw for `keywords` with the default settings and write the export to `output`.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), icook_scrape::ScrapeError> {
/// let recipes = icook_scrape::scrape_keywords(&["雞肉"], 10, "recipes.csv").await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn scrape_keywords<S: AsRef<str>>(
    keywords: &[S],
    max_recipes: usize,
    output: impl AsRef<Path>,
) -> Result<Vec<RecipeRecord>, ScrapeError> {
    let crawler = Crawler::builder().build()?;
    Ok(crawler.run(keywords, max_recipes, output.as_ref()).await)
}
