//! `mdpage` - README-driven landing pages
//!
//! Fetches a site's Markdown README and JSON chrome configuration, renders
//! the README body to HTML, and applies title, favicon, and header text
//! through a [`chrome::ChromeSink`]. Failures replace the content with a
//! troubleshooting panel.

pub mod chrome;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod markdown;
pub mod observability;
pub mod page;

pub use chrome::{ChromeSink, ContentState, PageState};
pub use config::{LoaderOptions, MissingMarker, PageConfig};
pub use error::{LoadError, MdPageError};
pub use fetch::{Fetcher, HttpFetcher, RawResponse};
pub use loader::PageLoader;
