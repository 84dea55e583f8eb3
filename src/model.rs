use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Reference videos attached to a drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Videos {
    pub instructional_video: String,
    pub variation_video: String,
}

/// A single recipe as it appears in the drink list files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "drinkName")]
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub videos: Videos,
}

/// Which drink list and ingredient vocabulary is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[serde(alias = "cocktail")]
    Cocktails,
    #[serde(alias = "mocktail")]
    Mocktails,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cocktails => "cocktails",
            Category::Mocktails => "mocktails",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cocktail" | "cocktails" => Ok(Category::Cocktails),
            "mocktail" | "mocktails" => Ok(Category::Mocktails),
            _ => Err(FinderError::UnknownCategory(s.to_string())),
        }
    }
}

/// How several selected ingredients combine when filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// At least one selected ingredient appears in the drink
    #[default]
    Any,
    /// Every selected ingredient appears in the drink
    All,
    /// Every ingredient of the drink is covered by the selection
    Only,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Any => "any",
            MatchMode::All => "all",
            MatchMode::Only => "only",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(MatchMode::Any),
            "all" => Ok(MatchMode::All),
            "only" => Ok(MatchMode::Only),
            _ => Err(FinderError::UnknownMatchMode(s.to_string())),
        }
    }
}

/// Drinks and ingredient vocabulary for both categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub cocktail_drinks: Vec<Drink>,
    pub mocktail_drinks: Vec<Drink>,
    pub cocktail_ingredients: Vec<String>,
    pub mocktail_ingredients: Vec<String>,
}

impl Catalog {
    pub fn drinks(&self, category: Category) -> &[Drink] {
        match category {
            Category::Cocktails => &self.cocktail_drinks,
            Category::Mocktails => &self.mocktail_drinks,
        }
    }

    pub fn ingredients(&self, category: Category) -> &[String] {
        match category {
            Category::Cocktails => &self.cocktail_ingredients,
            Category::Mocktails => &self.mocktail_ingredients,
        }
    }
}
