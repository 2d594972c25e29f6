use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// One recipe component. Two ingredients are the same ingredient when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.amount)
    }
}

/// Data extracted from a single recipe page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    pub name: String,
    pub url: String,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeRecord {
    /// Single export line: `name,url,ing1, ing2, ...`
    ///
    /// Fields are not quoted, so commas inside a name or amount end up as extra columns.
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Whether the record produces any export text at all
    pub fn has_data(&self) -> bool {
        !self.to_line().is_empty()
    }
}

impl fmt::Display for RecipeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ingredients = self
            .ingredients
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{},{},{}", self.name, self.url, ingredients)
    }
}

/// URL collection that drops duplicates and keeps first-insertion order,
/// so truncating it to a maximum size is deterministic.
#[derive(Debug, Clone, Default)]
pub struct UrlSet {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the URL was already present
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Keeps the first `max` URLs in insertion order
    pub fn truncate(&mut self, max: usize) {
        for url in self.urls.drain(max.min(self.urls.len())..) {
            self.seen.remove(&url);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl<S: Into<String>> Extend<S> for UrlSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for url in iter {
            self.insert(url);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for UrlSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for UrlSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}
