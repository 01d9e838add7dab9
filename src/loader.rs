//! Page loader.
//!
//! Runs the load-and-render sequence once:
//! 1. Fetch the chrome configuration and the Markdown document (concurrently)
//! 2. Render the Markdown body to HTML
//! 3. Inject the HTML, reveal content and header
//! 4. Apply chrome from the configuration
//!
//! Any failure stops the sequence and replaces the content with the
//! troubleshooting panel. Chrome is only touched after every step before it
//! succeeded.

use tracing::{debug, error, info};

use crate::chrome::{ChromeSink, apply_chrome, error_panel};
use crate::config::{LoaderOptions, PageConfig};
use crate::error::LoadError;
use crate::fetch::{Fetcher, RawResponse};
use crate::markdown::{extract_body, render_html};

/// Drives the load sequence against a [`Fetcher`].
#[derive(Debug)]
pub struct PageLoader<F> {
    fetcher: F,
    options: LoaderOptions,
}

impl<F: Fetcher> PageLoader<F> {
    /// Creates a loader with the given fetcher and options.
    pub const fn new(fetcher: F, options: LoaderOptions) -> Self {
        Self { fetcher, options }
    }

    /// The loader's options.
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Fetches and parses the JSON chrome configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fetch` on a non-2xx status, `LoadError::Parse`
    /// if the body is not a valid configuration object, and
    /// `LoadError::Network` if no response arrives.
    pub async fn fetch_config(&self, path: &str) -> Result<PageConfig, LoadError> {
        let response = self.fetch_ok(path).await?;
        serde_json::from_slice(&response.body).map_err(|e| LoadError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetches the Markdown document at `path` and renders its body.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fetch`/`LoadError::Network` like
    /// [`fetch_config`](Self::fetch_config), `LoadError::Parse` if the body
    /// is not UTF-8, and `LoadError::UndefinedContent` if the marker is
    /// missing under [`MissingMarker::Fail`](crate::config::MissingMarker::Fail).
    pub async fn fetch_markdown_as_html(&self, path: &str) -> Result<String, LoadError> {
        let response = self.fetch_ok(path).await?;
        let text = String::from_utf8(response.body).map_err(|e| LoadError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let body = extract_body(&text, &self.options.marker, self.options.missing_marker)
            .ok_or_else(|| LoadError::UndefinedContent {
                path: path.to_string(),
                marker: self.options.marker.clone(),
            })?;

        Ok(render_html(body))
    }

    /// Runs the full load sequence into `sink`.
    ///
    /// On failure the error is logged, the troubleshooting panel is shown,
    /// and the error is returned so the host can report it. By then the
    /// sink is already in its final state.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] raised by either fetch.
    pub async fn load_readme<S>(&self, sink: &mut S) -> Result<(), LoadError>
    where
        S: ChromeSink + Send + ?Sized,
    {
        match self.load(&mut *sink).await {
            Ok(()) => {
                info!(readme = %self.options.readme_path, "page rendered");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "page load failed");
                sink.show_error(&error_panel(&e.to_string()));
                Err(e)
            }
        }
    }

    async fn load<S>(&self, sink: &mut S) -> Result<(), LoadError>
    where
        S: ChromeSink + Send + ?Sized,
    {
        let (conf, html) = tokio::try_join!(
            self.fetch_config(&self.options.config_path),
            self.fetch_markdown_as_html(&self.options.readme_path),
        )?;

        sink.reveal_content(&html);
        sink.reveal_header();
        apply_chrome(sink, &conf);
        Ok(())
    }

    async fn fetch_ok(&self, path: &str) -> Result<RawResponse, LoadError> {
        let response = self.fetcher.get(path).await?;
        if !response.is_success() {
            debug!(path, status = response.status, "non-success status");
            return Err(LoadError::Fetch {
                path: path.to_string(),
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(response)
    }
}
