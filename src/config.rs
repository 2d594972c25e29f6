use crate::fetchers::DEFAULT_USER_AGENT;
use crate::pacing::DelayRange;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Crawl configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Site root every search and recipe URL is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Search keywords. An empty keyword crawls the generic recipe listing
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Maximum number of recipe pages fetched
    #[serde(default = "default_max_recipes")]
    pub max_recipes: usize,
    /// Export file path
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Search result pages read per keyword
    #[serde(default = "default_search_page_limit")]
    pub search_page_limit: u32,
    /// Regex a link target must match to count as a recipe page
    #[serde(default = "default_recipe_path_pattern")]
    pub recipe_path_pattern: String,
    /// Pause after each search page and between keywords
    #[serde(default = "default_discovery_delay")]
    pub discovery_delay: DelayRange,
    /// Pause between recipe page fetches
    #[serde(default = "default_fetch_delay")]
    pub fetch_delay: DelayRange,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            keywords: default_keywords(),
            max_recipes: default_max_recipes(),
            output_file: default_output_file(),
            search_page_limit: default_search_page_limit(),
            recipe_path_pattern: default_recipe_path_pattern(),
            discovery_delay: default_discovery_delay(),
            fetch_delay: default_fetch_delay(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://icook.tw".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_keywords() -> Vec<String> {
    vec!["雞肉".to_string(), "豬肉".to_string(), "湯品".to_string()]
}

fn default_max_recipes() -> usize {
    40
}

fn default_output_file() -> String {
    "愛料理食譜資料.csv".to_string()
}

fn default_search_page_limit() -> u32 {
    1
}

fn default_recipe_path_pattern() -> String {
    r"/recipes/\d+".to_string()
}

fn default_discovery_delay() -> DelayRange {
    DelayRange::discovery()
}

fn default_fetch_delay() -> DelayRange {
    DelayRange::fetch()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ICOOK__ prefix
    /// 2. icook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ICOOK__MAX_RECIPES, ICOOK__FETCH_DELAY__MAX_MS.
    /// Keywords are comma separated: ICOOK__KEYWORDS=雞肉,湯品
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables, see [`ScraperConfig::load`]
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("icook").required(false))
        .add_source(
            Environment::with_prefix("ICOOK")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("keywords")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
