//! CLI argument definitions
//!
//! All Clap derive structs for `mdpage` command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{BODY_MARKER, DEFAULT_CONFIG_PATH, DEFAULT_README_PATH, MissingMarker};

// ============================================================================
// Root CLI
// ============================================================================

/// Render a README-driven landing page from a site's Markdown and JSON config.
#[derive(Parser, Debug)]
#[command(name = "mdpage", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MDPAGE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a site's README and config and write the rendered page.
    Render(RenderArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Base URL of the site serving the README and config.
    pub base_url: String,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Site-relative path of the JSON chrome configuration.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, env = "MDPAGE_CONFIG_PATH")]
    pub config_path: String,

    /// Site-relative path of the Markdown document.
    #[arg(long, default_value = DEFAULT_README_PATH, env = "MDPAGE_README_PATH")]
    pub readme_path: String,

    /// Marker separating the preamble from the rendered body.
    #[arg(
        long,
        default_value = BODY_MARKER,
        env = "MDPAGE_MARKER",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub marker: String,

    /// What to do when the marker is missing.
    #[arg(long, default_value = "fail")]
    pub missing_marker: MissingMarker,

    /// Per-request timeout (e.g. `10s`, `500ms`).
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Do not append the `v=<timestamp>` cache-busting parameter.
    #[arg(long)]
    pub no_cache_bust: bool,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
