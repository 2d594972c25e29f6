use super::text::{element_text, is_ingredient_row, sole_text, split_name_amount};
use super::{Extraction, IngredientStrategy};
use crate::model::Ingredient;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Labels of the ingredient section heading ("ingredients" / "materials")
const SECTION_LABELS: [&str; 2] = ["食材", "材料"];

/// Reads the `<ul>` that follows an ingredient section heading.
///
/// Headings are `h2`, `h3` or `div` elements whose sole text mentions one of the
/// section labels. Only the first heading whose list yields ingredients is used.
pub struct SectionListStrategy;

impl SectionListStrategy {
    fn is_section_label(element: ElementRef<'_>) -> bool {
        sole_text(element)
            .is_some_and(|text| SECTION_LABELS.iter().any(|label| text.contains(label)))
    }

    /// First list in the heading's container, else the first list among its next siblings
    fn find_list<'a>(heading: ElementRef<'a>, list: &Selector) -> Option<ElementRef<'a>> {
        heading
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|container| container.select(list).next())
            // Only reachable for a heading without an element parent
            .or_else(|| {
                heading
                    .next_siblings()
                    .filter_map(ElementRef::wrap)
                    .find(|sibling| sibling.value().name() == "ul")
            })
    }

    fn parse_item(item: ElementRef<'_>, link: &Selector) -> Option<Ingredient> {
        let text = element_text(item);
        let text = text.trim();
        if !is_ingredient_row(text) {
            return None;
        }

        let (name, amount) = match item.select(link).next() {
            Some(anchor) => {
                let name = element_text(anchor).trim().to_string();
                let amount = text.replace(&name, "").trim().to_string();
                (name, amount)
            }
            None => split_name_amount(text),
        };

        if name.is_empty() {
            None
        } else {
            Some(Ingredient { name, amount })
        }
    }
}

impl IngredientStrategy for SectionListStrategy {
    fn name(&self) -> &'static str {
        "section_list"
    }

    fn extract(&self, document: &Html) -> Extraction<Vec<Ingredient>> {
        let (Ok(headings), Ok(list), Ok(item), Ok(link)) = (
            Selector::parse("h2, h3, div"),
            Selector::parse("ul"),
            Selector::parse("li"),
            Selector::parse("a"),
        ) else {
            return Extraction::Failed("invalid section list selectors".to_string());
        };

        for heading in document
            .select(&headings)
            .filter(|element| Self::is_section_label(*element))
        {
            let Some(found) = Self::find_list(heading, &list) else {
                debug!("Ingredient heading <{}> has no list", heading.value().name());
                continue;
            };

            let ingredients: Vec<Ingredient> = found
                .select(&item)
                .filter_map(|li| Self::parse_item(li, &link))
                .collect();

            if !ingredients.is_empty() {
                return Extraction::Found(ingredients);
            }
        }

        Extraction::Empty
    }
}
