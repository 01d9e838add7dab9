//! Command-line interface
//!
//! Argument definitions and command handlers for the `mdpage` binary.

pub mod args;
pub mod commands;
