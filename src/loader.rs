use log::{error, info, warn};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{DataFiles, FinderConfig};
use crate::error::FinderError;
use crate::fallback::fallback_catalog;
use crate::fetchers::{DataSource, Fetcher};
use crate::model::{Catalog, Drink};
use crate::pairings::{BeerData, WineData};

/// Loads the static data files from one data source
pub struct DataLoader {
    source: DataSource,
    fetcher: Fetcher,
    files: DataFiles,
}

impl DataLoader {
    pub fn new(
        source: DataSource,
        files: DataFiles,
        timeout: Option<Duration>,
    ) -> Result<Self, FinderError> {
        let fetcher = Fetcher::new(&source, timeout)?;
        Ok(Self {
            source,
            fetcher,
            files,
        })
    }

    /// Build a loader from `data.source`, `data.files` and `timeout`.
    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        let source = DataSource::parse(&config.data.source)?;
        Self::new(
            source,
            config.data.files.clone(),
            Some(Duration::from_secs(config.timeout)),
        )
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    async fn fetch_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, FinderError> {
        let body = self.fetcher.fetch(file).await?;
        parse_json(file, &body)
    }

    /// Fetch all four catalog files. Any failure fails the whole load.
    pub async fn load_catalog(&self) -> Result<Catalog, FinderError> {
        info!("Loading drink catalog from {}", self.source);

        let (cocktail_drinks, mocktail_drinks, cocktail_ingredients, mocktail_ingredients) = tokio::try_join!(
            self.fetch_json::<Vec<Drink>>(&self.files.cocktail_drinks),
            self.fetch_json::<Vec<Drink>>(&self.files.mocktail_drinks),
            self.fetch_json::<Vec<String>>(&self.files.cocktail_ingredients),
            self.fetch_json::<Vec<String>>(&self.files.mocktail_ingredients),
        )?;

        info!(
            "Loaded {} cocktails and {} mocktails",
            cocktail_drinks.len(),
            mocktail_drinks.len()
        );

        Ok(Catalog {
            cocktail_drinks,
            mocktail_drinks,
            cocktail_ingredients,
            mocktail_ingredients,
        })
    }

    /// Load the catalog, substituting the embedded dataset on any failure.
    pub async fn load_catalog_or_fallback(&self) -> Catalog {
        match self.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Error loading data: {}", e);
                warn!("Using embedded fallback data");
                fallback_catalog()
            }
        }
    }

    pub async fn load_beers(&self) -> Result<BeerData, FinderError> {
        self.fetch_json(&self.files.beers).await
    }

    pub async fn load_wines(&self) -> Result<WineData, FinderError> {
        self.fetch_json(&self.files.wines).await
    }
}

/// Parse a data file body, keeping the file name in the error.
pub fn parse_json<T: DeserializeOwned>(file: &str, body: &str) -> Result<T, FinderError> {
    serde_json::from_str(body).map_err(|source| FinderError::ParseError {
        file: file.to_string(),
        source,
    })
}
