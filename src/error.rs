use thiserror::Error;

/// Errors that can occur while loading or browsing drink data
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to fetch a data file from a URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request for {url} returned status {status}")]
    StatusError { url: String, status: u16 },

    /// Failed to read a data file from disk
    #[error("Failed to read data file: {0}")]
    IoError(#[from] std::io::Error),

    /// A data file was not valid JSON for its expected shape
    #[error("Failed to parse {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data source string could not be interpreted
    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    /// Unknown category name
    #[error("Unknown category '{0}', expected 'cocktails' or 'mocktails'")]
    UnknownCategory(String),

    /// Unknown match mode name
    #[error("Unknown match mode '{0}', expected 'any', 'all' or 'only'")]
    UnknownMatchMode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
