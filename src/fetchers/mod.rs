mod file;
mod request;

pub use self::file::FileFetcher;
pub use self::request::RequestFetcher;

use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FinderError;

/// Where the static data files are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Base URL, files are fetched over HTTP
    Url(Url),
    /// Local directory
    Directory(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` strings are URLs, anything else is a directory.
    pub fn parse(source: &str) -> Result<Self, FinderError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(FinderError::InvalidSource("empty data source".to_string()));
        }

        if source.starts_with("http://") || source.starts_with("https://") {
            let url = Url::parse(source)
                .map_err(|e| FinderError::InvalidSource(format!("{}: {}", source, e)))?;
            Ok(DataSource::Url(url))
        } else {
            Ok(DataSource::Directory(PathBuf::from(source)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetcher for either kind of data source
pub enum Fetcher {
    Request(RequestFetcher),
    File(FileFetcher),
}

impl Fetcher {
    pub fn new(source: &DataSource, timeout: Option<Duration>) -> Result<Self, FinderError> {
        Ok(match source {
            DataSource::Url(url) => Fetcher::Request(RequestFetcher::new(url.clone(), timeout)?),
            DataSource::Directory(path) => Fetcher::File(FileFetcher::new(path.clone())),
        })
    }

    pub async fn fetch(&self, file: &str) -> Result<String, FinderError> {
        match self {
            Fetcher::Request(fetcher) => fetcher.fetch(file).await,
            Fetcher::File(fetcher) => fetcher.fetch(file).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_source() {
        let source = DataSource::parse("https://drinks.example.com/data").unwrap();
        assert!(matches!(source, DataSource::Url(_)));
    }

    #[test]
    fn test_parse_directory_source() {
        let source = DataSource::parse("./data").unwrap();
        assert_eq!(source, DataSource::Directory(PathBuf::from("./data")));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(matches!(
            DataSource::parse("  "),
            Err(FinderError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_parse_bad_url() {
        assert!(DataSource::parse("http://").is_err());
    }
}
