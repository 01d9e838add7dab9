//! Fetch abstraction.
//!
//! Provides the [`Fetcher`] trait for retrieving site files by their
//! site-relative path. Implementations report every HTTP status as a
//! [`RawResponse`]; deciding what counts as a failure is the loader's job.

pub mod http;

pub use http::HttpFetcher;

use crate::error::LoadError;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// A response as received, before status checks or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase for `status` (empty when unknown).
    pub status_text: String,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Async retrieval of site files.
///
/// Only transport failures are errors here; any HTTP status, including
/// 4xx and 5xx, comes back as `Ok`.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues a GET for the site-relative `path`.
    async fn get(&self, path: &str) -> Result<RawResponse>;
}
