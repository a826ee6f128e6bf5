//! HTTP asset fetching.

use std::time::Duration;

use bytes::Bytes;
use url::Url;

use crate::error::{Error, Result};

/// Configuration for the asset fetcher.
#[derive(Clone, Debug)]
pub struct AssetFetcherConfig {
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Connect timeout.
    pub connect_timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
}

impl Default for AssetFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: Some(format!("Wicker/{} (Rust)", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// A thin async HTTP client for retrieving raw asset bytes.
///
/// The fetcher makes no retry or caching decisions of its own; callers
/// combine it with an [`AssetStore`](crate::AssetStore) through the
/// [`IconResolver`](crate::IconResolver).
#[derive(Clone, Debug)]
pub struct AssetFetcher {
    client: reqwest::Client,
}

impl AssetFetcher {
    /// Create a fetcher with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(AssetFetcherConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(config: AssetFetcherConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(|e| Error::Client {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }

    /// Fetch the raw bytes at `url`.
    ///
    /// A non-success status is an error; the body is not inspected.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        tracing::trace!(
            target: "wicker_assets::fetcher",
            url = %url,
            len = bytes.len(),
            "fetched asset"
        );
        Ok(bytes)
    }
}
