//! Pure text rules used by the extractors. Nothing here touches the network or the DOM tree
//! beyond reading text out of an element.

use crate::model::Ingredient;
use scraper::{ElementRef, Node};
use std::collections::HashSet;

/// List items this long (in characters) are descriptions, not ingredients
pub const MAX_ITEM_CHARS: usize = 50;

/// Leading characters marking step headers and group titles inside ingredient lists
const REJECT_MARKERS: [char; 2] = ['#', '●'];

/// Splits `"蜂蜜1大匙"` into `("蜂蜜", "1大匙")` at the first ASCII digit.
///
/// The text must start with at least one non-digit and the digit run must not span a
/// line break. Otherwise the whole text becomes the name and the amount is empty.
pub fn split_name_amount(text: &str) -> (String, String) {
    match text.find(|c: char| c.is_ascii_digit()) {
        Some(idx) if idx > 0 && !text[idx..].contains('\n') => (
            text[..idx].trim().to_string(),
            text[idx..].trim().to_string(),
        ),
        _ => (text.to_string(), String::new()),
    }
}

/// Drops the `by <author>` suffix recipe titles carry.
///
/// Truncation happens at the first `"by"` anywhere in the title.
pub fn strip_attribution(heading: &str) -> String {
    let heading = heading.trim();
    match heading.find("by") {
        Some(idx) => heading[..idx].trim().to_string(),
        None => heading.to_string(),
    }
}

/// Whether a trimmed list item can be an ingredient row
pub fn is_ingredient_row(text: &str) -> bool {
    text.chars().count() < MAX_ITEM_CHARS && !text.starts_with(&REJECT_MARKERS[..])
}

/// Keeps the first ingredient for every name, in first-seen order
pub fn dedup_by_name(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .filter(|ingredient| seen.insert(ingredient.name.clone()))
        .collect()
}

/// Concatenated text of all descendants
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of an element that holds nothing but a single chain of one child down to a text node.
/// Elements with mixed or multiple children have no sole text.
pub(crate) fn sole_text(element: ElementRef<'_>) -> Option<String> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }

    match only.value() {
        Node::Text(text) => Some(String::from(&**text)),
        Node::Element(_) => ElementRef::wrap(only).and_then(sole_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_split_at_digit_boundary() {
        assert_eq!(
            split_name_amount("蜂蜜1大匙"),
            ("蜂蜜".to_string(), "1大匙".to_string())
        );
        assert_eq!(
            split_name_amount("蠔油 1/2大匙"),
            ("蠔油".to_string(), "1/2大匙".to_string())
        );
    }

    #[test]
    fn test_split_without_digit_keeps_whole_text() {
        assert_eq!(
            split_name_amount("鹽少許"),
            ("鹽少許".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_leading_digit_keeps_whole_text() {
        assert_eq!(
            split_name_amount("2顆蛋"),
            ("2顆蛋".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_amount_across_lines_keeps_whole_text() {
        assert_eq!(
            split_name_amount("雞胸肉1\n片"),
            ("雞胸肉1\n片".to_string(), String::new())
        );
        assert_eq!(
            split_name_amount("雞胸肉\n1片"),
            ("雞胸肉".to_string(), "1片".to_string())
        );
    }

    #[test]
    fn test_split_full_width_digits_are_not_amounts() {
        assert_eq!(
            split_name_amount("糖１匙"),
            ("糖１匙".to_string(), String::new())
        );
    }

    #[test]
    fn test_strip_attribution() {
        assert_eq!(strip_attribution("蘋果蜜汁豬柳 by 小明"), "蘋果蜜汁豬柳");
        assert_eq!(strip_attribution("  三杯雞  "), "三杯雞");
        assert_eq!(strip_attribution("by 小明"), "");
    }

    #[test]
    fn test_strip_attribution_cuts_inside_words() {
        assert_eq!(strip_attribution("Baby back ribs"), "Ba");
    }

    #[test]
    fn test_row_length_boundary() {
        let forty_nine = "鹽".repeat(49);
        let fifty = "鹽".repeat(50);
        assert!(is_ingredient_row(&forty_nine));
        assert!(!is_ingredient_row(&fifty));
    }

    #[test]
    fn test_row_markers() {
        assert!(!is_ingredient_row("#醬汁"));
        assert!(!is_ingredient_row("●醃料"));
        assert!(is_ingredient_row("醬油1大匙"));
    }

    #[test]
    fn test_dedup_keeps_first_amount() {
        let deduped = dedup_by_name(vec![
            Ingredient::new("蜂蜜", "1大匙"),
            Ingredient::new("米酒", ""),
            Ingredient::new("蜂蜜", "3大匙"),
        ]);
        assert_eq!(
            deduped,
            vec![Ingredient::new("蜂蜜", "1大匙"), Ingredient::new("米酒", "")]
        );
    }

    #[test]
    fn test_sole_text() {
        let document = Html::parse_fragment(
            r#"<h2>食材</h2><h3><span>材料</span></h3><div><span>食材</span> 清單</div>"#,
        );
        let selector = Selector::parse("h2, h3, div").unwrap();
        let texts: Vec<_> = document.select(&selector).map(sole_text).collect();

        assert_eq!(
            texts,
            vec![Some("食材".to_string()), Some("材料".to_string()), None]
        );
    }
}
