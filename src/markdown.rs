//! Markdown body extraction and HTML rendering.
//!
//! The README carries a preamble (badges, notes for repository viewers)
//! followed by a marker line; only what follows the marker is rendered.
//! Rendering uses comrak with the GitHub Flavored Markdown extensions and
//! passes raw HTML through untouched.

use comrak::{Options, markdown_to_html};

use crate::config::MissingMarker;

/// Markdown engine used by [`render_html`].
pub const RENDERER: &str = "comrak";

/// Returns the body segment of `text`.
///
/// The body is the text between the first occurrence of `marker` and the
/// next one (or the end of the document). Returns `None` when the marker is
/// absent and `policy` is [`MissingMarker::Fail`]. An empty marker never
/// matches.
#[must_use]
pub fn extract_body<'a>(text: &'a str, marker: &str, policy: MissingMarker) -> Option<&'a str> {
    let found = if marker.is_empty() {
        None
    } else {
        text.split(marker).nth(1)
    };
    match found {
        Some(body) => Some(body),
        None => match policy {
            MissingMarker::Fail => None,
            MissingMarker::WholeDocument => Some(text),
        },
    }
}

/// Converts Markdown source to an HTML fragment.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    markdown_to_html(markdown, &options)
}
