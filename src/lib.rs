pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod fetchers;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pairings;
pub mod render;

use log::error;

use crate::config::DataConfig;

pub use crate::config::FinderConfig;
pub use crate::engine::{Command, Finder, Phase};
pub use crate::error::FinderError;
pub use crate::fetchers::DataSource;
pub use crate::loader::DataLoader;
pub use crate::model::{Catalog, Category, Drink, MatchMode, Videos};
pub use crate::pairings::{BeerData, WineData};

/// Load the catalog described by `config` into a ready finder.
///
/// Loading never fails once the data source itself is valid: unreadable
/// files are replaced by the embedded fallback dataset.
pub async fn load_finder(config: &FinderConfig) -> Result<Finder, FinderError> {
    let loader = DataLoader::from_config(config)?;
    let catalog = loader.load_catalog_or_fallback().await;

    let mut finder = Finder::new(config.default_category, config.default_match_mode);
    finder.install_catalog(catalog);
    Ok(finder)
}

/// Load a ready finder from a base URL or directory with default file names.
pub async fn load_finder_from(source: &str) -> Result<Finder, FinderError> {
    let config = FinderConfig {
        data: DataConfig {
            source: source.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    load_finder(&config).await
}

/// Load beer pairings, logging and returning `None` on failure.
pub async fn load_beers_or_log(loader: &DataLoader) -> Option<BeerData> {
    match loader.load_beers().await {
        Ok(data) => Some(data),
        Err(e) => {
            error!("Error loading beer data: {}", e);
            None
        }
    }
}

/// Load wine pairings, logging and returning `None` on failure.
pub async fn load_wines_or_log(loader: &DataLoader) -> Option<WineData> {
    match loader.load_wines().await {
        Ok(data) => Some(data),
        Err(e) => {
            error!("Error loading wine data: {}", e);
            None
        }
    }
}
