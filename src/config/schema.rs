//! Configuration schema types.
//!
//! `PageConfig` is the wire shape of `assets/conf.json`; `MissingMarker`
//! selects what happens when the README carries no body marker.

use serde::{Deserialize, Serialize};

/// Page chrome configuration, fetched as JSON.
///
/// Unknown fields are ignored; all three fields are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Emoji (or short text) used for the favicon and header prefix.
    pub icon: String,
    /// Document title.
    pub title: String,
    /// Header subtitle.
    pub subtitle: String,
}

/// Policy for a Markdown document that lacks the body marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingMarker {
    /// Fail the load with an undefined-content error (default)
    #[default]
    Fail,
    /// Render the entire document as the body
    WholeDocument,
}
