use crate::model::Ingredient;
use log::debug;
use scraper::Html;

mod data_targeting;
mod page;
mod section_list;
mod text;

pub use data_targeting::DataTargetingStrategy;
pub use page::PageExtractor;
pub use section_list::SectionListStrategy;
pub use text::{dedup_by_name, is_ingredient_row, split_name_amount, strip_attribution};

/// Outcome of a single extraction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The step produced a value
    Found(T),
    /// The page does not carry what the step looks for
    Empty,
    /// The step could not run (unreachable page, broken selector, ...)
    Failed(String),
}

impl<T> Extraction<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Extraction::Found(value) => Some(value),
            Extraction::Empty | Extraction::Failed(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }
}

impl<T> Extraction<Vec<T>> {
    /// `Found` for a non-empty list, `Empty` otherwise
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Extraction::Empty
        } else {
            Extraction::Found(items)
        }
    }
}

/// One way of reading the ingredient list out of a recipe page
pub trait IngredientStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, document: &Html) -> Extraction<Vec<Ingredient>>;
}

/// Runs strategies in priority order. The first one to find anything wins,
/// and its result is deduplicated by ingredient name.
pub struct IngredientExtractor {
    strategies: Vec<Box<dyn IngredientStrategy>>,
}

impl Default for IngredientExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(SectionListStrategy),
            Box::new(DataTargetingStrategy),
        ])
    }
}

impl IngredientExtractor {
    pub fn new(strategies: Vec<Box<dyn IngredientStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, document: &Html) -> Extraction<Vec<Ingredient>> {
        for strategy in &self.strategies {
            match strategy.extract(document) {
                Extraction::Found(items) => {
                    debug!("Found {} ingredients using {}", items.len(), strategy.name());
                    return Extraction::Found(dedup_by_name(items));
                }
                Extraction::Empty => debug!("{} found no ingredients", strategy.name()),
                Extraction::Failed(reason) => debug!("{} failed: {}", strategy.name(), reason),
            }
        }
        Extraction::Empty
    }
}
