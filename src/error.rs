use thiserror::Error;

/// Errors that can occur while crawling recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch a page (connection error, timeout or non-2xx status)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// A URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The recipe link pattern is not a valid regular expression
    #[error("Invalid recipe path pattern: {0}")]
    PatternError(#[from] regex::Error),

    /// Failed to write the export file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}
