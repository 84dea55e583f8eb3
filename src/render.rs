//! HTML and plain-text views of the finder state.
//!
//! Everything here is a pure function of [`Finder`]; nothing is cached
//! between renders.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::engine::{Finder, Phase};
use crate::model::{Category, Drink, MatchMode};
use crate::pairings::capitalize;

pub const LOADING_PLACEHOLDER: &str =
    "<div class=\"loading\" id=\"drinksGrid\">Loading drinks...</div>";

pub const NO_RESULTS: &str = "<div class=\"no-results\" id=\"noResults\">\
     No drinks match the selected ingredients. Try removing some filters.</div>";

/// Category tabs with the active one marked.
pub fn render_tabs(active: Category) -> String {
    [Category::Cocktails, Category::Mocktails]
        .iter()
        .map(|category| {
            let class = if *category == active { "tab active" } else { "tab" };
            format!(
                "<button class=\"{}\" data-category=\"{}\">{}</button>",
                class,
                category,
                capitalize(category.as_str())
            )
        })
        .collect()
}

/// The ingredient picker, without already selected entries.
pub fn render_ingredient_select(available: &[String]) -> String {
    let mut html =
        String::from("<select id=\"ingredientSelect\"><option value=\"\">Choose an ingredient...</option>");
    for ingredient in available {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            encode_double_quoted_attribute(ingredient),
            encode_text(ingredient)
        ));
    }
    html.push_str("</select>");
    html
}

pub fn render_match_mode(mode: MatchMode) -> String {
    [MatchMode::Any, MatchMode::All, MatchMode::Only]
        .iter()
        .map(|m| {
            let checked = if *m == mode { " checked" } else { "" };
            format!(
                "<label><input type=\"radio\" name=\"filterMode\" value=\"{}\"{}> {}</label>",
                m, checked, m
            )
        })
        .collect()
}

/// Tags for the selected ingredients, in selection order.
pub fn render_selected_ingredients(selected: &[String]) -> String {
    let tags: String = selected
        .iter()
        .map(|ingredient| {
            format!(
                "<div class=\"ingredient-tag\">{}<button class=\"remove-ingredient\" \
                 data-ingredient=\"{}\" aria-label=\"Remove {}\">×</button></div>",
                encode_text(ingredient),
                encode_double_quoted_attribute(ingredient),
                encode_double_quoted_attribute(ingredient)
            )
        })
        .collect();
    format!("<div id=\"selectedIngredients\">{}</div>", tags)
}

pub fn render_drink_card(drink: &Drink) -> String {
    format!(
        "<div class=\"drink-card\" data-drink=\"{}\"><div class=\"drink-name\">{}</div>\
         <div class=\"drink-ingredients\"><strong>Ingredients:</strong> {}</div></div>",
        encode_double_quoted_attribute(&drink.name),
        encode_text(&drink.name),
        encode_text(&drink.ingredients.join(", "))
    )
}

/// The card grid, or the "no results" block when nothing matches.
pub fn render_drink_grid(drinks: &[&Drink]) -> String {
    if drinks.is_empty() {
        return NO_RESULTS.to_string();
    }

    let cards: String = drinks.iter().map(|d| render_drink_card(d)).collect();
    format!("<div class=\"drinks-grid\" id=\"drinksGrid\">{}</div>", cards)
}

/// The detail view for one drink.
pub fn render_drink_detail(drink: &Drink) -> String {
    let name = encode_text(&drink.name);
    let ingredients: String = drink
        .ingredients
        .iter()
        .map(|i| format!("<span class=\"ingredient-item\">{}</span>", encode_text(i)))
        .collect();
    let instructions: String = drink
        .instructions
        .iter()
        .map(|i| format!("<li>{}</li>", encode_text(i)))
        .collect();

    format!(
        "<div class=\"modal-scroll-content\">\
         <div class=\"modal-drink-name\">{name}</div>\
         <div class=\"modal-section\"><h3>Ingredients</h3><div class=\"ingredients-list\">{ingredients}</div></div>\
         <div class=\"modal-section\"><h3>Instructions</h3><ol class=\"instructions-list\">{instructions}</ol></div>\
         <div class=\"modal-section\"><h3>Videos</h3><div class=\"video-section\">\
         <div class=\"video-container\"><h4>How to Make</h4>\
         <iframe src=\"{instructional}\" title=\"How to make {title}\" allowfullscreen></iframe></div>\
         <div class=\"video-container\"><h4>Variations</h4>\
         <iframe src=\"{variation}\" title=\"{title} variations\" allowfullscreen></iframe></div>\
         </div></div></div>",
        name = name,
        ingredients = ingredients,
        instructions = instructions,
        instructional = encode_double_quoted_attribute(&drink.videos.instructional_video),
        variation = encode_double_quoted_attribute(&drink.videos.variation_video),
        title = encode_double_quoted_attribute(&drink.name),
    )
}

/// Full finder section for the current state.
pub fn render_page(finder: &Finder) -> String {
    let mut html = String::from("<section id=\"cocktailFinder\">");
    html.push_str(&format!(
        "<div class=\"tabs\">{}</div>",
        render_tabs(finder.category())
    ));

    if finder.phase() == Phase::Loading {
        html.push_str(LOADING_PLACEHOLDER);
        html.push_str("</section>");
        return html;
    }

    html.push_str(&render_ingredient_select(&finder.available_ingredients()));
    html.push_str(&format!(
        "<div class=\"filter-mode\">{}</div>",
        render_match_mode(finder.match_mode())
    ));
    html.push_str(&render_selected_ingredients(finder.selected()));
    html.push_str(&render_drink_grid(&finder.matches()));

    if let Some(drink) = finder.detail() {
        html.push_str(&format!(
            "<div class=\"modal\" id=\"drinkModal\"><div class=\"modal-content\" id=\"modalContent\">{}</div></div>",
            render_drink_detail(drink)
        ));
    }

    html.push_str("</section>");
    html
}

/// Plain-text listing of the current state, for terminals.
pub fn render_text(finder: &Finder) -> String {
    if finder.phase() == Phase::Loading {
        return "Loading drinks...\n".to_string();
    }

    let mut out = format!("Category: {}\n", finder.category());
    if !finder.selected().is_empty() {
        out.push_str(&format!(
            "Ingredients ({}): {}\n",
            finder.match_mode(),
            finder.selected().join(", ")
        ));
    }

    let matches = finder.matches();
    if matches.is_empty() {
        out.push_str("No drinks match the selected ingredients.\n");
    }
    for drink in matches {
        out.push_str(&format!("- {}: {}\n", drink.name, drink.ingredients.join(", ")));
    }

    if let Some(drink) = finder.detail() {
        out.push_str(&format!("\n{}\n", drink.name));
        for (i, step) in drink.instructions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        out.push_str(&format!("How to make: {}\n", drink.videos.instructional_video));
        out.push_str(&format!("Variations: {}\n", drink.videos.variation_video));
    }

    out
}
