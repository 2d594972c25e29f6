use crate::fetchers::Fetcher;
use crate::model::UrlSet;
use crate::pacing::{DelayRange, Pacer};
use crate::ScrapeError;
use log::{info, warn};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::Arc;
use url::Url;

/// Collects recipe page URLs from the site's search (or listing) pages
pub struct UrlDiscoverer {
    fetcher: Arc<dyn Fetcher>,
    pacer: Arc<dyn Pacer>,
    base_url: Url,
    recipe_path: Regex,
    delay: DelayRange,
}

impl UrlDiscoverer {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        pacer: Arc<dyn Pacer>,
        base_url: Url,
        recipe_path: Regex,
        delay: DelayRange,
    ) -> Self {
        Self {
            fetcher,
            pacer,
            base_url,
            recipe_path,
            delay,
        }
    }

    /// URL of one result page: `/search/{keyword}`, or `/recipes` for an empty keyword.
    /// Pages after the first carry a `page` query parameter.
    pub fn page_url(&self, keyword: &str, page: u32) -> Result<Url, ScrapeError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ScrapeError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty();
            if keyword.is_empty() {
                segments.push("recipes");
            } else {
                segments.push("search").push(keyword);
            }
        }
        url.set_query(None);
        if page > 1 {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    /// Absolute URLs of every recipe link on a result page, in document order
    pub fn collect_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let Ok(anchors) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&anchors)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| self.recipe_path.is_match(href))
            .filter_map(|href| self.base_url.join(href).ok())
            .map(String::from)
            .collect()
    }

    /// Reads result pages `1..=page_limit` for `keyword`.
    ///
    /// A page that cannot be fetched is logged and skipped. Every page attempt is
    /// followed by a pause.
    pub async fn discover(&self, keyword: &str, page_limit: u32) -> UrlSet {
        let mut urls = UrlSet::new();

        for page in 1..=page_limit {
            let page_url = match self.page_url(keyword, page) {
                Ok(page_url) => page_url,
                Err(e) => {
                    warn!("Cannot build search URL for \"{}\": {}", keyword, e);
                    break;
                }
            };
            info!("Searching page: {}", page_url);

            match self.fetcher.fetch(page_url.as_str()).await {
                Ok(body) => {
                    let links = self.collect_links(&body);
                    info!("Found {} recipe links on page {}", links.len(), page);
                    urls.extend(links);
                }
                Err(e) => warn!("Error searching page {}: {}", page, e),
            }

            self.pacer.pause(self.delay).await;
        }

        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::NoDelay;
    use async_trait::async_trait;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
            Ok(self.0.to_string())
        }
    }

    fn discoverer(base: &str, body: &'static str) -> UrlDiscoverer {
        UrlDiscoverer::new(
            Arc::new(StaticFetcher(body)),
            Arc::new(NoDelay),
            Url::parse(base).unwrap(),
            Regex::new(r"/recipes/\d+").unwrap(),
            DelayRange::discovery(),
        )
    }

    #[test]
    fn test_page_urls() {
        let discoverer = discoverer("https://icook.tw", "");

        assert_eq!(
            discoverer.page_url("chicken", 1).unwrap().as_str(),
            "https://icook.tw/search/chicken"
        );
        assert_eq!(
            discoverer.page_url("chicken", 3).unwrap().as_str(),
            "https://icook.tw/search/chicken?page=3"
        );
        assert_eq!(
            discoverer.page_url("", 1).unwrap().as_str(),
            "https://icook.tw/recipes"
        );
        assert_eq!(
            discoverer.page_url("", 2).unwrap().as_str(),
            "https://icook.tw/recipes?page=2"
        );
    }

    #[test]
    fn test_keyword_is_percent_encoded() {
        let discoverer = discoverer("https://icook.tw/", "");

        assert_eq!(
            discoverer.page_url("雞肉", 1).unwrap().as_str(),
            "https://icook.tw/search/%E9%9B%9E%E8%82%89"
        );
        assert_eq!(
            discoverer.page_url("a/b", 1).unwrap().as_str(),
            "https://icook.tw/search/a%2Fb"
        );
    }

    #[test]
    fn test_collect_links_filters_and_resolves() {
        let discoverer = discoverer("https://icook.tw", "");
        let html = r#"
            <a href="/recipes/470233">蘋果蜜汁豬柳</a>
            <a href="https://icook.tw/recipes/12?ref=search">三杯雞</a>
            <a href="/recipes/popular">熱門</a>
            <a href="/users/99">小明</a>
            <a>no target</a>
        "#;

        assert_eq!(
            discoverer.collect_links(html),
            vec![
                "https://icook.tw/recipes/470233",
                "https://icook.tw/recipes/12?ref=search",
            ]
        );
    }

    #[tokio::test]
    async fn test_discover_dedups_across_pages() {
        let body = r#"<a href="/recipes/1">A</a><a href="/recipes/2">B</a><a href="/recipes/1">A</a>"#;
        let discoverer = discoverer("https://icook.tw", body);

        let urls = discoverer.discover("chicken", 2).await;

        assert_eq!(
            urls.into_vec(),
            vec!["https://icook.tw/recipes/1", "https://icook.tw/recipes/2"]
        );
    }
}
