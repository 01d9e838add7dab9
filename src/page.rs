//! Static HTML page shell.
//!
//! Serializes a [`PageState`] into a standalone document carrying the
//! element ids a browser build of the page would use (`favicon`, `header`,
//! `theTitle`, `theSubtitle`, `content`) and the `loading`/`hide` classes
//! for any state the loader left unresolved.

use crate::chrome::{ContentState, PageState, escape_html};

/// Favicon shown before chrome is applied.
const DEFAULT_FAVICON: &str = "data:,";

/// Renders `page` as a complete HTML document.
#[must_use]
pub fn render_page(page: &PageState) -> String {
    let favicon = page.favicon_href.as_deref().unwrap_or(DEFAULT_FAVICON);
    let header_class = if page.header_hidden { " class=\"hide\"" } else { "" };
    let content_class = match page.content {
        ContentState::Loading => " class=\"loading\"",
        ContentState::Loaded => "",
    };

    let mut sections = Vec::new();
    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html>".to_string());
    sections.push("<head>".to_string());
    sections.push("    <meta charset=\"utf-8\">".to_string());
    sections.push(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    sections.push(format!("    <title>{}</title>", escape_html(&page.title)));
    sections.push(format!(
        "    <link id=\"favicon\" rel=\"icon\" href=\"{}\">",
        escape_html(favicon)
    ));
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push(format!("    <header id=\"header\"{header_class}>"));
    sections.push(format!(
        "        <h1 id=\"theTitle\">{}</h1>",
        escape_html(&page.header_title)
    ));
    sections.push(format!(
        "        <p id=\"theSubtitle\">{}</p>",
        escape_html(&page.header_subtitle)
    ));
    sections.push("    </header>".to_string());
    sections.push(format!("    <main id=\"content\"{content_class}>"));
    sections.push(page.content_html.trim_end().to_string());
    sections.push("    </main>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());

    let mut out = sections.join("\n");
    out.push('\n');
    out
}
