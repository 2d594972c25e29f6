use icook_scrape::{Crawler, ScraperConfig};
use log::info;
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ScraperConfig::load()?;

    // Keywords given on the command line replace the configured ones
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        config.keywords = args;
    }

    info!(
        "Crawling {} for {:?}, up to {} recipes",
        config.base_url, config.keywords, config.max_recipes
    );

    let crawler = Crawler::from_config(&config)?;
    crawler
        .run(
            &config.keywords,
            config.max_recipes,
            Path::new(&config.output_file),
        )
        .await;

    Ok(())
}
