use crate::model::{Drink, MatchMode};

/// Case-insensitive substring containment: "lime" is contained in "Lime Wedge".
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any ingredient of the drink contains the given selection.
pub fn drink_has_ingredient(drink: &Drink, selected: &str) -> bool {
    drink
        .ingredients
        .iter()
        .any(|ingredient| contains_ignore_case(ingredient, selected))
}

/// Whether a single drink qualifies under the given selection and mode.
///
/// An empty selection always matches.
pub fn matches(drink: &Drink, selected: &[String], mode: MatchMode) -> bool {
    if selected.is_empty() {
        return true;
    }

    match mode {
        MatchMode::Any => selected.iter().any(|s| drink_has_ingredient(drink, s)),
        MatchMode::All => selected.iter().all(|s| drink_has_ingredient(drink, s)),
        MatchMode::Only => drink.ingredients.iter().all(|ingredient| {
            selected
                .iter()
                .any(|s| contains_ignore_case(ingredient, s))
        }),
    }
}

/// Drinks from `drinks` that qualify, in their original order.
pub fn compute_matches<'a>(
    drinks: &'a [Drink],
    selected: &[String],
    mode: MatchMode,
) -> Vec<&'a Drink> {
    drinks
        .iter()
        .filter(|drink| matches(drink, selected, mode))
        .collect()
}

/// Lower-case and strip everything outside `[a-z0-9]`.
///
/// Used to look up drinks from identifiers that went through markup.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Find a drink by name, ignoring case and punctuation.
pub fn find_drink<'a>(drinks: &'a [Drink], name: &str) -> Option<&'a Drink> {
    let wanted = normalize_name(name);
    drinks.iter().find(|d| normalize_name(&d.name) == wanted)
}

/// Picker options: vocabulary minus what is already selected, sorted.
pub fn available_ingredients(vocabulary: &[String], selected: &[String]) -> Vec<String> {
    let mut available: Vec<String> = vocabulary
        .iter()
        .filter(|ingredient| !selected.contains(ingredient))
        .cloned()
        .collect();
    available.sort();
    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Videos;

    fn drink(name: &str, ingredients: &[&str]) -> Drink {
        Drink {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec![],
            videos: Videos {
                instructional_video: String::new(),
                variation_video: String::new(),
            },
        }
    }

    fn selection(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn names(drinks: Vec<&Drink>) -> Vec<&str> {
        drinks.into_iter().map(|d| d.name.as_str()).collect()
    }

    fn americano() -> Drink {
        drink(
            "Americano",
            &["Campari", "Sweet Vermouth", "Club Soda", "Orange Slice"],
        )
    }

    #[test]
    fn test_any_mode_single_hit() {
        let drinks = vec![americano()];
        let result = compute_matches(&drinks, &selection(&["Campari"]), MatchMode::Any);
        assert_eq!(names(result), vec!["Americano"]);
    }

    #[test]
    fn test_any_mode_no_hit_is_empty() {
        let drinks = vec![americano()];
        let result = compute_matches(&drinks, &selection(&["Vodka"]), MatchMode::Any);
        assert!(result.is_empty());
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let drinks = vec![drink("Virgin Mojito", &["Mint Leaves", "Lime Wedge"])];
        assert_eq!(
            compute_matches(&drinks, &selection(&["Lime"]), MatchMode::Any).len(),
            1
        );
        assert_eq!(
            compute_matches(&drinks, &selection(&["lIME"]), MatchMode::Any).len(),
            1
        );
    }

    #[test]
    fn test_empty_selection_returns_everything_in_every_mode() {
        let drinks = vec![americano(), drink("Negroni", &["Gin", "Campari"])];
        for mode in [MatchMode::Any, MatchMode::All, MatchMode::Only] {
            assert_eq!(
                names(compute_matches(&drinks, &[], mode)),
                vec!["Americano", "Negroni"]
            );
        }
    }

    #[test]
    fn test_all_mode_requires_every_selected() {
        let drinks = vec![americano(), drink("Negroni", &["Gin", "Campari", "Sweet Vermouth"])];
        let selected = selection(&["Campari", "Gin"]);

        assert_eq!(
            names(compute_matches(&drinks, &selected, MatchMode::All)),
            vec!["Negroni"]
        );
        assert_eq!(
            names(compute_matches(&drinks, &selected, MatchMode::Any)),
            vec!["Americano", "Negroni"]
        );
    }

    #[test]
    fn test_only_mode_requires_drink_fully_covered() {
        let drinks = vec![
            drink("Gin and Tonic", &["Gin", "Tonic Water", "Lime Wedge"]),
            drink("Gin Fizz", &["Gin", "Lemon Juice", "Sugar Syrup", "Soda Water"]),
        ];
        let selected = selection(&["gin", "tonic", "lime", "Vodka"]);

        assert_eq!(
            names(compute_matches(&drinks, &selected, MatchMode::Only)),
            vec!["Gin and Tonic"]
        );
        // Vodka is not in either drink, so "all" finds nothing
        assert!(compute_matches(&drinks, &selected, MatchMode::All).is_empty());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Virgin Mojito"), "virginmojito");
        assert_eq!(normalize_name("virgin-mojito!!"), "virginmojito");
        assert_eq!(normalize_name("Piña Colada #2"), "piacolada2");
    }

    #[test]
    fn test_find_drink_by_normalized_name() {
        let drinks = vec![americano(), drink("Virgin Mojito", &["Mint Leaves"])];
        let a = find_drink(&drinks, "Virgin Mojito").unwrap();
        let b = find_drink(&drinks, "virgin-mojito!!").unwrap();
        assert_eq!(a, b);
        assert!(find_drink(&drinks, "Mai Tai").is_none());
    }

    #[test]
    fn test_available_ingredients_sorted_and_excluding_selected() {
        let vocabulary = selection(&["Rum", "Gin", "Vodka", "Campari"]);
        let available = available_ingredients(&vocabulary, &selection(&["Gin"]));
        assert_eq!(available, vec!["Campari", "Rum", "Vodka"]);
    }
}
