//! Configuration module
//!
//! The page chrome schema fetched from the site, plus the options that
//! steer the loader and the HTTP fetcher.

pub mod options;
pub mod schema;

pub use options::{BODY_MARKER, DEFAULT_CONFIG_PATH, DEFAULT_README_PATH, HttpOptions, LoaderOptions};
pub use schema::{MissingMarker, PageConfig};
