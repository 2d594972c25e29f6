use crate::ScrapeError;
use async_trait::async_trait;

mod request;

pub use request::{RequestFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Retrieves the HTML body of a page.
///
/// Implementations must fail on connection errors, timeouts and non-2xx responses.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}
