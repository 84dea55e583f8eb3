use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::model::{Category, MatchMode};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Where the data files live
    #[serde(default)]
    pub data: DataConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Category shown after startup
    #[serde(default)]
    pub default_category: Category,
    /// Match mode used at startup
    #[serde(default)]
    pub default_match_mode: MatchMode,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            timeout: default_timeout(),
            default_category: Category::default(),
            default_match_mode: MatchMode::default(),
        }
    }
}

/// Data source and file names
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Base URL (http/https) or local directory
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub files: DataFiles,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            files: DataFiles::default(),
        }
    }
}

/// File names relative to the data source
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DataFiles {
    #[serde(default = "default_cocktail_drinks")]
    pub cocktail_drinks: String,
    #[serde(default = "default_mocktail_drinks")]
    pub mocktail_drinks: String,
    #[serde(default = "default_cocktail_ingredients")]
    pub cocktail_ingredients: String,
    #[serde(default = "default_mocktail_ingredients")]
    pub mocktail_ingredients: String,
    #[serde(default = "default_beers")]
    pub beers: String,
    #[serde(default = "default_wines")]
    pub wines: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            cocktail_drinks: default_cocktail_drinks(),
            mocktail_drinks: default_mocktail_drinks(),
            cocktail_ingredients: default_cocktail_ingredients(),
            mocktail_ingredients: default_mocktail_ingredients(),
            beers: default_beers(),
            wines: default_wines(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_source() -> String {
    ".".to_string()
}

fn default_cocktail_drinks() -> String {
    "cocktail-drinks.json".to_string()
}

fn default_mocktail_drinks() -> String {
    "mocktail-drinks.json".to_string()
}

fn default_cocktail_ingredients() -> String {
    "cocktail-ingredients.json".to_string()
}

fn default_mocktail_ingredients() -> String {
    "mocktail-ingredients.json".to_string()
}

fn default_beers() -> String {
    "beers.json".to_string()
}

fn default_wines() -> String {
    "wines.json".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COCKTAIL_FINDER__ prefix
    /// 2. cocktail-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COCKTAIL_FINDER__DATA__SOURCE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the source priority.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cocktail-finder").required(false))
        // Use double underscore for nested: COCKTAIL_FINDER__DATA__FILES__BEERS
        .add_source(
            Environment::with_prefix("COCKTAIL_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_source(), ".");
        assert_eq!(default_beers(), "beers.json");
    }

    #[test]
    fn test_data_files_default() {
        let files = DataFiles::default();
        assert_eq!(files.cocktail_drinks, "cocktail-drinks.json");
        assert_eq!(files.mocktail_drinks, "mocktail-drinks.json");
        assert_eq!(files.cocktail_ingredients, "cocktail-ingredients.json");
        assert_eq!(files.mocktail_ingredients, "mocktail-ingredients.json");
        assert_eq!(files.wines, "wines.json");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                default_category = "mocktails"

                [data]
                source = "https://drinks.example.com/data"

                [data.files]
                beers = "beer-list.json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.default_category, Category::Mocktails);
        assert_eq!(config.default_match_mode, MatchMode::Any);
        assert_eq!(config.data.source, "https://drinks.example.com/data");
        assert_eq!(config.data.files.beers, "beer-list.json");
        assert_eq!(config.data.files.wines, "wines.json");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("COCKTAIL_FINDER__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // Every key has a default, so an empty environment still loads
        let config = load_config().unwrap();
        assert_eq!(config.timeout, 30);
        assert_eq!(config.data.files, DataFiles::default());
    }
}
