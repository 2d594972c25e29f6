use async_trait::async_trait;
use log::debug;
use rand::Rng;
use serde::Deserialize;
use std::time::Duration;

/// Inclusive range of milliseconds to wait between two requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Pause used after each search page and between keywords
    pub const fn discovery() -> Self {
        Self::new(1000, 2000)
    }

    /// Pause used between two recipe page fetches
    pub const fn fetch() -> Self {
        Self::new(1000, 3000)
    }

    fn bounds(&self) -> (u64, u64) {
        if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        }
    }
}

/// Decides how long the crawler waits between requests.
///
/// Pacing only keeps the crawler polite towards the site. Nothing depends on
/// it for ordering, so tests plug in [`NoDelay`].
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, range: DelayRange);
}

/// Sleeps for a uniformly random duration within the range
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPacer;

#[async_trait]
impl Pacer for RandomPacer {
    async fn pause(&self, range: DelayRange) {
        let (min, max) = range.bounds();
        let millis = rand::thread_rng().gen_range(min..=max);
        debug!("Sleeping {}ms", millis);
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self, _range: DelayRange) {}
}
