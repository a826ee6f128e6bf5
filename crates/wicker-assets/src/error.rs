//! Error types for the asset pipeline.

use std::path::PathBuf;

/// Result type alias for asset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while storing or fetching assets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The asset URL could not be parsed.
    #[error("invalid asset url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("failed to construct asset fetcher: {message}")]
    Client { message: String },

    /// The request failed before a response arrived.
    #[error("failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// Cache store I/O error.
    #[error("asset store i/o at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No platform cache directory is available to root the store.
    #[error("no cache directory available for asset store '{name}'")]
    NoCacheDir { name: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a fetch error.
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }
}
