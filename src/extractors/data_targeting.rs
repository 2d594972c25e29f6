use super::{Extraction, IngredientStrategy};
use crate::model::Ingredient;
use scraper::{Html, Selector};
use serde_json::Value;

/// Reads the ingredient names embedded in the ad-targeting JSON of a page.
///
/// The payload only lists names, so every ingredient comes back without an amount.
/// Payloads that fail to decode are skipped. Only `&quot;` is unescaped before parsing,
/// other entities stay inside the JSON strings untouched.
pub struct DataTargetingStrategy;

impl DataTargetingStrategy {
    fn decode(raw: &str) -> Option<Vec<String>> {
        let payload: Value = serde_json::from_str(&raw.replace("&quot;", "\"")).ok()?;
        let names = payload
            .get("ingredients")?
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Some(names)
    }
}

impl IngredientStrategy for DataTargetingStrategy {
    fn name(&self) -> &'static str {
        "data_targeting"
    }

    fn extract(&self, document: &Html) -> Extraction<Vec<Ingredient>> {
        let Ok(selector) = Selector::parse("div[data-targeting]") else {
            return Extraction::Failed("invalid data-targeting selector".to_string());
        };

        let ingredients = document
            .select(&selector)
            .filter_map(|element| element.value().attr("data-targeting"))
            .filter(|raw| raw.contains("ingredients"))
            .filter_map(Self::decode)
            .flatten()
            .map(|name| Ingredient::new(name, ""))
            .collect();

        Extraction::from_items(ingredients)
    }
}
