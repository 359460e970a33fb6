//! Core library for `logstrip`.
//!
//! Walks a source tree, removes `console.log(...)` statements from every
//! TypeScript file with a plain non-greedy textual match, and writes each
//! file back in place.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Command-line arguments.
pub mod cli;

/// Command implementations (the walk-strip-write loop).
pub mod commands;

/// Configuration loading from `.logstrip.toml`.
pub mod config;

/// Shared constants and the statement regex.
pub mod constants;

/// Shared entry point used by all binaries.
pub mod entry_point;

/// Error taxonomy.
pub mod error;

/// The text transformation.
pub mod strip;

/// Recursive source file discovery.
pub mod walker;

pub use commands::{run_strip, StripOptions, StripSummary};
pub use error::StripError;
pub use strip::{strip, Pattern, Stripped};
