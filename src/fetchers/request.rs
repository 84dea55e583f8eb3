use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::error::FinderError;

/// Fetches data files relative to a base URL
pub struct RequestFetcher {
    client: Client,
    base: Url,
}

impl RequestFetcher {
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, FinderError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; CocktailFinder/0.1)")
            .build()?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    /// Fetch `file` relative to the base URL and return the body.
    ///
    /// Non-success status codes are errors.
    pub async fn fetch(&self, file: &str) -> Result<String, FinderError> {
        let url = self
            .base
            .join(file)
            .map_err(|e| FinderError::InvalidSource(format!("{}{}: {}", self.base, file, e)))?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// `join` replaces the last path segment unless the base ends in a slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
