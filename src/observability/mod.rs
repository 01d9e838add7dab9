//! Observability module
//!
//! Logging setup for the `mdpage` binary. Library code only emits
//! `tracing` events; installing a subscriber is the host's call.

pub mod logging;

pub use logging::{default_directive, init_logging, verbosity_to_directive};
