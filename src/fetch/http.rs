//! HTTP fetcher.
//!
//! Resolves site-relative paths against a base URL and issues GET requests
//! with `reqwest`. Each request carries a `v=<unix millis>` query parameter
//! unless cache busting is switched off.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use tracing::debug;

use super::{Fetcher, RawResponse, Result};
use crate::config::HttpOptions;
use crate::error::{ConfigError, LoadError};

/// Name of the cache-busting query parameter.
pub const CACHE_BUST_PARAM: &str = "v";

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
    cache_bust: bool,
}

impl HttpFetcher {
    /// Creates a fetcher for the site at `options.base_url`.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `http://host/docs` and `http://host/docs/` resolve paths alike.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or
    /// cannot serve as a base.
    /// Returns `ConfigError::HttpClient` if the client cannot be built.
    pub fn new(options: &HttpOptions) -> std::result::Result<Self, ConfigError> {
        let base = parse_base_url(&options.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base,
            cache_bust: options.cache_bust,
        })
    }

    /// The normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds the request URL for `path`, including the cache-busting
    /// parameter when enabled.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Network` if `path` cannot be joined onto the base.
    pub fn request_url(&self, path: &str) -> Result<Url> {
        let mut url = self.base.join(path).map_err(|e| LoadError::Network {
            path: path.to_string(),
            message: format!("invalid request URL: {e}"),
        })?;

        if self.cache_bust {
            url.query_pairs_mut()
                .append_pair(CACHE_BUST_PARAM, &Utc::now().timestamp_millis().to_string());
        }

        Ok(url)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.request_url(path)?;
        debug!(%url, "fetching");

        let network = |e: reqwest::Error| LoadError::Network {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        debug!(path, status = status.as_u16(), bytes = body.len(), "fetched");

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

fn parse_base_url(raw: &str) -> std::result::Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
