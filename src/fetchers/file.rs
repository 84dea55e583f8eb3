use log::debug;
use std::path::PathBuf;

use crate::error::FinderError;

/// Reads data files from a local directory
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn fetch(&self, file: &str) -> Result<String, FinderError> {
        let path = self.root.join(file);
        debug!("Reading {}", path.display());
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
