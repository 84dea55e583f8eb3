//! Beer and wine pairing data and its rendering.
//!
//! Independent of the drink filter: a list of beverages, each with food
//! pairings grouped by category or season.

use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};
use reqwest::Url;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A named list of pairing items, e.g. "summer" or "cheese"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Pairing groups in the order they appear in the source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingGroups(pub Vec<PairingGroup>);

impl PairingGroups {
    pub fn iter(&self) -> impl Iterator<Item = &PairingGroup> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PairingGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = PairingGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of group name to a list of pairings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<String>>()? {
                    groups.push(PairingGroup { name, items });
                }
                Ok(PairingGroups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Beer {
    pub name: String,
    #[serde(default)]
    pub pairings: Vec<String>,
    #[serde(default)]
    pub seasonal_pairings: Option<PairingGroups>,
}

/// Contents of `beers.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BeerData {
    #[serde(default)]
    pub lagers: Vec<Beer>,
    #[serde(default)]
    pub ales: Vec<Beer>,
}

impl BeerData {
    pub fn find(&self, name: &str) -> Option<&Beer> {
        self.lagers
            .iter()
            .chain(self.ales.iter())
            .find(|beer| beer.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Wine {
    pub name: String,
    #[serde(default)]
    pub pairings: PairingGroups,
}

/// Contents of `wines.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WineData {
    #[serde(default)]
    pub red_wines: Vec<Wine>,
    #[serde(default)]
    pub white_wines: Vec<Wine>,
}

impl WineData {
    pub fn find(&self, name: &str) -> Option<&Wine> {
        self.red_wines
            .iter()
            .chain(self.white_wines.iter())
            .find(|wine| wine.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The wine shown before anything is clicked: the first red.
    pub fn initial_selection(&self) -> Option<&Wine> {
        self.red_wines.first()
    }
}

/// Upper-case the first character: "summer" -> "Summer".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Web search link for "<item> recipes".
pub fn recipe_search_url(item: &str) -> String {
    let query = format!("{} recipes", item.trim());
    match Url::parse_with_params("https://www.google.com/search", &[("q", query.as_str())]) {
        Ok(url) => url.to_string(),
        // The base URL is constant and valid
        Err(_) => "https://www.google.com/search".to_string(),
    }
}

fn render_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="{}" title="Click to search for {} recipes" target="_blank">{}</a></li>"#,
                encode_double_quoted_attribute(&recipe_search_url(item)),
                encode_double_quoted_attribute(item),
                encode_text(item)
            )
        })
        .collect()
}

fn render_group(title: &str, items: &[String]) -> String {
    format!(
        "<div class=\"pairing-category\"><h4>{}</h4><ul>{}</ul></div>",
        encode_text(title),
        render_items(items)
    )
}

/// Clickable list of beverage names.
///
/// `marker` is the class put on the selected entry.
pub fn render_name_list<'a>(
    class: &str,
    marker: &str,
    names: impl IntoIterator<Item = &'a str>,
    selected: Option<&str>,
) -> String {
    let items: String = names
        .into_iter()
        .map(|name| {
            let active = if Some(name) == selected {
                format!(" class=\"{}\"", marker)
            } else {
                String::new()
            };
            format!(
                "<li{} data-name=\"{}\">{}</li>",
                active,
                encode_double_quoted_attribute(name),
                encode_text(name)
            )
        })
        .collect();

    format!("<div class=\"{}\"><ul>{}</ul></div>", class, items)
}

/// Pairing panel for one beer: classic pairings, then seasonal ones if present.
pub fn render_beer_pairings(beer: &Beer) -> String {
    let mut html = format!("<h2>{}</h2>", encode_text(&beer.name));
    html.push_str(&render_group("Classic Pairings:", &beer.pairings));

    if let Some(seasonal) = &beer.seasonal_pairings {
        html.push_str("<div class=\"pairing-category\"><h4>Seasonal Pairings:</h4>");
        for group in seasonal.iter() {
            html.push_str(&render_group(
                &format!("{}:", capitalize(&group.name)),
                &group.items,
            ));
        }
        html.push_str("</div>");
    }

    html
}

/// Pairing panel for one wine: one section per pairing category.
pub fn render_wine_pairings(wine: &Wine) -> String {
    let mut html = format!("<h3>{}</h3>", encode_text(&wine.name));
    for group in wine.pairings.iter() {
        html.push_str(&render_group(&capitalize(&group.name), &group.items));
    }
    html
}

/// Lager and ale lists for the beer page.
pub fn render_beer_lists(data: &BeerData, selected: Option<&str>) -> String {
    let lagers = render_name_list(
        "beer-label-list",
        "active",
        data.lagers.iter().map(|b| b.name.as_str()),
        selected,
    );
    let ales = render_name_list(
        "beer-label-list",
        "active",
        data.ales.iter().map(|b| b.name.as_str()),
        selected,
    );
    format!(
        "<div id=\"lagerList\"><div class=\"beer-bottle-container\">{}</div></div>\
         <div id=\"aleList\"><div class=\"beer-bottle-container\">{}</div></div>",
        lagers, ales
    )
}

/// Red and white lists for the wine page.
pub fn render_wine_lists(data: &WineData, selected: Option<&str>) -> String {
    let reds = render_name_list(
        "wine-list",
        "selected",
        data.red_wines.iter().map(|w| w.name.as_str()),
        selected,
    );
    let whites = render_name_list(
        "wine-list",
        "selected",
        data.white_wines.iter().map(|w| w.name.as_str()),
        selected,
    );
    format!(
        "<div id=\"redWineList\">{}</div><div id=\"whiteWineList\">{}</div>",
        reds, whites
    )
}
