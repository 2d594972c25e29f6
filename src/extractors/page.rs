use super::text::{element_text, strip_attribution};
use super::{Extraction, IngredientExtractor};
use crate::model::RecipeRecord;
use log::{debug, info};
use scraper::{Html, Selector};

/// Turns a recipe page into a [`RecipeRecord`].
///
/// Missing pieces are not errors: a page without a title gets an empty name
/// and a page without ingredients gets an empty list.
#[derive(Default)]
pub struct PageExtractor {
    ingredients: IngredientExtractor,
}

impl PageExtractor {
    pub fn new(ingredients: IngredientExtractor) -> Self {
        Self { ingredients }
    }

    /// Title of the first `<h1>`, without its `by <author>` suffix
    pub fn extract_name(document: &Html) -> Extraction<String> {
        let Ok(selector) = Selector::parse("h1") else {
            return Extraction::Failed("invalid title selector".to_string());
        };

        match document.select(&selector).next() {
            Some(heading) => {
                let name = strip_attribution(&element_text(heading));
                if name.is_empty() {
                    Extraction::Empty
                } else {
                    Extraction::Found(name)
                }
            }
            None => Extraction::Empty,
        }
    }

    pub fn extract(&self, document: &Html, url: &str) -> RecipeRecord {
        let name = match Self::extract_name(document) {
            Extraction::Found(name) => name,
            Extraction::Empty => {
                debug!("No recipe title on {}", url);
                String::new()
            }
            Extraction::Failed(reason) => {
                debug!("Title extraction failed on {}: {}", url, reason);
                String::new()
            }
        };

        let ingredients = self.ingredients.extract(document).found().unwrap_or_default();
        info!(
            "Extracted \"{}\" with {} ingredients from {}",
            name,
            ingredients.len(),
            url
        );

        RecipeRecord {
            name,
            url: url.to_string(),
            ingredients,
        }
    }

    /// Parses `html` and extracts the record from it
    pub fn extract_html(&self, html: &str, url: &str) -> RecipeRecord {
        let document = Html::parse_document(html);
        self.extract(&document, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    const URL: &str = "https://icook.tw/recipes/470233";

    #[test]
    fn test_full_page() {
        let html = r#"
            <html>
            <body>
                <h1 class="title">
                    蘋果蜜汁豬柳 by 小明
                </h1>
                <div class="ingredients">
                    <h3>食材</h3>
                    <ul>
                        <li><a href="/ingredients/1">蜂蜜</a>1大匙</li>
                        <li>蠔油1/2大匙</li>
                        <li>米酒1/2大匙</li>
                    </ul>
                </div>
            </body>
            </html>
        "#;

        let record = PageExtractor::default().extract_html(html, URL);

        assert_eq!(record.name, "蘋果蜜汁豬柳");
        assert_eq!(record.url, URL);
        assert_eq!(
            record.ingredients,
            vec![
                Ingredient::new("蜂蜜", "1大匙"),
                Ingredient::new("蠔油", "1/2大匙"),
                Ingredient::new("米酒", "1/2大匙"),
            ]
        );
        assert_eq!(
            record.to_line(),
            "蘋果蜜汁豬柳,https://icook.tw/recipes/470233,蜂蜜1大匙, 蠔油1/2大匙, 米酒1/2大匙"
        );
    }

    #[test]
    fn test_name_uses_first_heading() {
        let document = Html::parse_document("<h1>三杯雞 by 阿華</h1><h1>其他</h1>");
        assert_eq!(
            PageExtractor::extract_name(&document),
            Extraction::Found("三杯雞".to_string())
        );
    }

    #[test]
    fn test_heading_text_spans_children() {
        let document = Html::parse_document("<h1><span>番茄</span>炒蛋</h1>");
        assert_eq!(
            PageExtractor::extract_name(&document),
            Extraction::Found("番茄炒蛋".to_string())
        );
    }

    #[test]
    fn test_missing_heading_gives_empty_name() {
        let record = PageExtractor::default().extract_html(
            r#"<div data-targeting='{"ingredients": ["雞腿"]}'></div>"#,
            URL,
        );

        assert_eq!(record.name, "");
        assert_eq!(record.ingredients, vec![Ingredient::new("雞腿", "")]);
        assert_eq!(record.to_line(), ",https://icook.tw/recipes/470233,雞腿");
    }

    #[test]
    fn test_page_without_anything() {
        let record = PageExtractor::default().extract_html("<p>404</p>", URL);
        assert!(record.ingredients.is_empty());
        assert_eq!(record.to_line(), ",https://icook.tw/recipes/470233,");
    }
}
