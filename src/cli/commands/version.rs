//! `version` command
//!
//! Reports the crate version together with the Markdown engine pages are
//! rendered with.

use serde_json::json;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::markdown::RENDERER;

/// Version line for `format`.
#[must_use]
pub fn describe(format: OutputFormat) -> String {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match format {
        OutputFormat::Human => format!("{name} {version} (markdown: {RENDERER})"),
        OutputFormat::Json => json!({
            "name": name,
            "version": version,
            "renderer": RENDERER,
        })
        .to_string(),
    }
}

/// Print version information.
pub fn run(args: &VersionArgs) {
    println!("{}", describe(args.format));
}
