//! Loader options: where to find the site files and how to treat them.

use std::time::Duration;

use super::schema::MissingMarker;

/// Default site-relative path of the chrome configuration.
pub const DEFAULT_CONFIG_PATH: &str = "assets/conf.json";

/// Default site-relative path of the Markdown document.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Literal token separating the preamble from the renderable body.
pub const BODY_MARKER: &str = "<!-- BODY -->";

/// Options for the page loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Site-relative path of the JSON configuration.
    pub config_path: String,

    /// Site-relative path of the Markdown document.
    pub readme_path: String,

    /// Marker token splitting preamble from body.
    pub marker: String,

    /// What to do when the marker is absent.
    pub missing_marker: MissingMarker,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            readme_path: DEFAULT_README_PATH.to_string(),
            marker: BODY_MARKER.to_string(),
            missing_marker: MissingMarker::default(),
        }
    }
}

/// Options for the HTTP fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    /// Base URL every site-relative path is resolved against.
    pub base_url: String,

    /// Append `v=<timestamp>` to every request.
    pub cache_bust: bool,

    /// Per-request timeout. `None` leaves the client default in place.
    pub timeout: Option<Duration>,
}

impl HttpOptions {
    /// Options for `base_url` with cache busting on and no timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache_bust: true,
            timeout: None,
        }
    }
}
