use regex_lite::Regex;
use static_init::dynamic;

use crate::constants::DISH_SEPARATOR;

/// Splits a `DDISH_NM` value into display names, dropping allergen codes (`5.6.9.`).
///
/// A piece that only consisted of codes stays in the list as an empty string.
pub fn parse_menu_items(dish_names: &str) -> Vec<String> {
    #[dynamic]
    static ALLERGEN_RE: Regex = Regex::new(r"\d+\.").unwrap();

    dish_names
        .split(DISH_SEPARATOR)
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| ALLERGEN_RE.replace_all(item, "").trim().to_string())
        .collect()
}
