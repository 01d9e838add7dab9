//! Logging initialization for `mdpage`.
//!
//! Structured logging via `tracing` with human-readable and JSON output,
//! configurable verbosity, and an environment override via
//! `MDPAGE_LOG_LEVEL`. All output goes to stderr so rendered pages can be
//! written to stdout.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ColorChoice, LogFormat};

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "MDPAGE_LOG_LEVEL";

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directive used when `MDPAGE_LOG_LEVEL` is unset. `quiet` keeps only
/// errors regardless of `verbosity`.
#[must_use]
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        verbosity_to_directive(verbosity)
    }
}

/// Initializes the global tracing subscriber.
///
/// If `MDPAGE_LOG_LEVEL` is set it takes precedence over `verbosity` and
/// `quiet`. Uses `try_init()` so calling this more than once (e.g. in tests)
/// is safe.
pub fn init_logging(format: LogFormat, verbosity: u8, quiet: bool, color: ColorChoice) {
    let default_directive = default_directive(verbosity, quiet);

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
