//! `render` command
//!
//! Runs the page loader once against a site and writes the resulting
//! document. The page is written even when loading fails, since the
//! troubleshooting panel is part of the output.

use std::io::Write;
use std::path::Path;

use crate::chrome::PageState;
use crate::cli::args::RenderArgs;
use crate::config::{HttpOptions, LoaderOptions};
use crate::error::MdPageError;
use crate::fetch::HttpFetcher;
use crate::loader::PageLoader;
use crate::page::render_page;

/// Fetch, render, and write the page.
///
/// # Errors
///
/// Returns `MdPageError::Config` if the base URL or HTTP client is invalid,
/// `MdPageError::Io` if the page cannot be written, and `MdPageError::Load`
/// if loading failed (after the error page has been written).
pub async fn run(args: &RenderArgs) -> Result<(), MdPageError> {
    let http = HttpOptions {
        base_url: args.base_url.clone(),
        cache_bust: !args.no_cache_bust,
        timeout: args.timeout,
    };
    let fetcher = HttpFetcher::new(&http)?;
    tracing::info!(base_url = %fetcher.base_url(), "loading page");

    let options = LoaderOptions {
        config_path: args.config_path.clone(),
        readme_path: args.readme_path.clone(),
        marker: args.marker.clone(),
        missing_marker: args.missing_marker,
    };
    let loader = PageLoader::new(fetcher, options);

    let mut page = PageState::default();
    let outcome = loader.load_readme(&mut page).await;

    write_page(&render_page(&page), args.output.as_deref()).await?;

    outcome.map_err(MdPageError::from)
}

async fn write_page(html: &str, output: Option<&Path>) -> Result<(), MdPageError> {
    match output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            tracing::info!(output = %path.display(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
