//! Page chrome: the sink the loader writes into.
//!
//! The loader never touches page elements directly. Everything visible
//! goes through a [`ChromeSink`], so a browser binding, a static page
//! writer, and a test recorder all drive the same load sequence.
//! [`PageState`] is the in-memory sink used by the CLI and the tests.

use crate::config::PageConfig;

// ============================================================================
// Sink
// ============================================================================

/// Page elements the loader updates.
///
/// Both [`reveal_content`](Self::reveal_content) and
/// [`show_error`](Self::show_error) must leave the content container out of
/// its loading state.
pub trait ChromeSink {
    /// Points the favicon link at `href`.
    fn set_favicon(&mut self, href: &str);

    /// Sets the document (tab) title.
    fn set_title(&mut self, title: &str);

    /// Sets the header title text.
    fn set_header_title(&mut self, text: &str);

    /// Sets the header subtitle text.
    fn set_header_subtitle(&mut self, text: &str);

    /// Injects rendered HTML into the content container and clears its
    /// loading state.
    fn reveal_content(&mut self, html: &str);

    /// Makes the header container visible.
    fn reveal_header(&mut self);

    /// Replaces the content container with `panel_html` and clears its
    /// loading state.
    fn show_error(&mut self, panel_html: &str);
}

// ============================================================================
// Chrome helpers
// ============================================================================

/// Builds an SVG data URI that draws `icon` as the favicon.
#[must_use]
pub fn favicon_data_uri(icon: &str) -> String {
    // Percent-encode last: entity escapes such as `&#39;` introduce `#`
    let icon = escape_html(icon).replace('%', "%25").replace('#', "%23");
    format!(
        "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22>\
         <text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>"
    )
}

/// Header title text: icon and title separated by a single space.
#[must_use]
pub fn header_title(icon: &str, title: &str) -> String {
    format!("{icon} {title}")
}

/// Applies the fetched configuration to the page chrome.
pub fn apply_chrome<S: ChromeSink + ?Sized>(sink: &mut S, conf: &PageConfig) {
    sink.set_favicon(&favicon_data_uri(&conf.icon));
    sink.set_title(&conf.title);
    sink.set_header_title(&header_title(&conf.icon, &conf.title));
    sink.set_header_subtitle(&conf.subtitle);
}

/// Troubleshooting panel shown in place of the content on failure.
#[must_use]
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="error">
    <h3>❌ {message}</h3>
    <p><strong>Possible solutions:</strong></p>
    <ul>
        <li>✅ Make sure the file exists in the same directory</li>
        <li>🌐 Serve the page from a web server (not as a local file)</li>
        <li>⚙️ Verify that the web server is configured to serve .md files</li>
        <li>🔒 Check the permissions of the file</li>
    </ul>
</div>
"#,
        message = escape_html(message)
    )
}

/// Escapes text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// In-memory page
// ============================================================================

/// Presentation state of the content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentState {
    /// Initial state set by the page markup.
    #[default]
    Loading,
    /// Terminal state, reached by rendering or by the error panel.
    Loaded,
}

/// Title the page carries before the loader applies its configuration.
pub const DEFAULT_TITLE: &str = "README";

/// In-memory model of the page elements the loader drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Favicon `href`; `None` until chrome is applied.
    pub favicon_href: Option<String>,
    /// Document title.
    pub title: String,
    /// Header title text.
    pub header_title: String,
    /// Header subtitle text.
    pub header_subtitle: String,
    /// Markup inside the content container.
    pub content_html: String,
    /// Content container presentation state.
    pub content: ContentState,
    /// Whether the header container is hidden.
    pub header_hidden: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            favicon_href: None,
            title: DEFAULT_TITLE.to_string(),
            header_title: String::new(),
            header_subtitle: String::new(),
            content_html: String::new(),
            content: ContentState::Loading,
            header_hidden: true,
        }
    }
}

impl ChromeSink for PageState {
    fn set_favicon(&mut self, href: &str) {
        self.favicon_href = Some(href.to_string());
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_header_title(&mut self, text: &str) {
        self.header_title = text.to_string();
    }

    fn set_header_subtitle(&mut self, text: &str) {
        self.header_subtitle = text.to_string();
    }

    fn reveal_content(&mut self, html: &str) {
        self.content_html = html.to_string();
        self.content = ContentState::Loaded;
    }

    fn reveal_header(&mut self) {
        self.header_hidden = false;
    }

    fn show_error(&mut self, panel_html: &str) {
        self.content_html = panel_html.to_string();
        self.content = ContentState::Loaded;
    }
}
