//! Error types for `mdpage`
//!
//! Load failures are rendered into the page as a troubleshooting panel and
//! then surfaced to the host; everything else aborts the command.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `mdpage` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration error (bad base URL, HTTP client setup)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (output file not writable)
    pub const IO_ERROR: i32 = 3;

    /// Page load failed; the error panel was rendered
    pub const LOAD_ERROR: i32 = 4;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `mdpage` operations.
#[derive(Debug, Error)]
pub enum MdPageError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page load error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MdPageError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Load(_) => ExitCode::LOAD_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while preparing the loader, before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The site base URL could not be parsed
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// The URL as given
        url: String,
        /// Parser message
        message: String,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

// ============================================================================
// Load Errors
// ============================================================================

/// Failures of the load-and-render sequence.
///
/// The `Display` text is what ends up in the troubleshooting panel.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-2xx status
    #[error("failed to load {path}: {status} {status_text}")]
    Fetch {
        /// Site-relative path that was requested
        path: String,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase (may be empty)
        status_text: String,
    },

    /// The request never produced a response
    #[error("failed to load {path}: {message}")]
    Network {
        /// Site-relative path that was requested
        path: String,
        /// Transport error message
        message: String,
    },

    /// The response body could not be decoded
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Site-relative path that was requested
        path: String,
        /// Decoder error message
        message: String,
    },

    /// The Markdown document has no body marker
    #[error("no body marker '{marker}' found in {path}")]
    UndefinedContent {
        /// Site-relative path that was requested
        path: String,
        /// Marker that was searched for
        marker: String,
    },
}

impl LoadError {
    /// HTTP status carried by the error, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_message_carries_status() {
        let err = LoadError::Fetch {
            path: "README.md".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load README.md: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn undefined_content_names_marker() {
        let err = LoadError::UndefinedContent {
            path: "README.md".to_string(),
            marker: "<!-- BODY -->".to_string(),
        };
        assert!(err.to_string().contains("<!-- BODY -->"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn exit_codes_by_variant() {
        let load: MdPageError = LoadError::Parse {
            path: "assets/conf.json".to_string(),
            message: "EOF".to_string(),
        }
        .into();
        assert_eq!(load.exit_code(), ExitCode::LOAD_ERROR);

        let config: MdPageError = ConfigError::HttpClient("tls".to_string()).into();
        assert_eq!(config.exit_code(), ExitCode::CONFIG_ERROR);

        let io: MdPageError = std::io::Error::other("disk").into();
        assert_eq!(io.exit_code(), ExitCode::IO_ERROR);
    }
}
