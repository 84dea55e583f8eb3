//! Embedded dataset used when the drink files cannot be loaded.

use crate::model::{Catalog, Drink, Videos};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn fallback_catalog() -> Catalog {
    let americano = Drink {
        name: "Americano".to_string(),
        ingredients: strings(&["Campari", "Sweet Vermouth", "Club Soda", "Orange Slice"]),
        instructions: strings(&[
            "Fill a highball glass with ice.",
            "Add 1 oz Campari.",
            "Add 1 oz Sweet Vermouth.",
            "Top with club soda.",
            "Stir gently.",
            "Garnish with an orange slice.",
        ]),
        videos: Videos {
            instructional_video: "https://www.youtube.com/embed/Rr96B2UkXfY".to_string(),
            variation_video: "https://www.youtube.com/embed/HFTLcG3Y9J8".to_string(),
        },
    };

    let virgin_mojito = Drink {
        name: "Virgin Mojito".to_string(),
        ingredients: strings(&[
            "Mint Leaves",
            "Lime Juice",
            "Sugar Syrup",
            "Soda Water",
            "Lime Wedge",
        ]),
        instructions: strings(&[
            "Muddle fresh mint leaves with 1 oz lime juice and 0.5 oz sugar syrup in a glass.",
            "Fill glass with ice.",
            "Top with soda water.",
            "Stir gently.",
            "Garnish with a lime wedge and mint sprig.",
        ]),
        videos: Videos {
            instructional_video: "https://www.youtube.com/embed/ABcL3PiVqgo".to_string(),
            variation_video: "https://www.youtube.com/embed/sy4aH4Nk7A8".to_string(),
        },
    };

    Catalog {
        cocktail_drinks: vec![americano],
        mocktail_drinks: vec![virgin_mojito],
        cocktail_ingredients: strings(&["Gin", "Vodka", "Rum", "Whiskey", "Tequila"]),
        mocktail_ingredients: strings(&["Soda Water", "Fruit Juice", "Sugar Syrup", "Mint"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_fallback_has_one_drink_per_category() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.drinks(Category::Cocktails)[0].name, "Americano");
        assert_eq!(catalog.drinks(Category::Mocktails)[0].name, "Virgin Mojito");
        assert_eq!(catalog.ingredients(Category::Cocktails).len(), 5);
        assert_eq!(catalog.ingredients(Category::Mocktails).len(), 4);
    }
}
