//! Commands module - CLI command implementations.

mod strip;

pub use strip::{run_strip, strip_file, FileOutcome, StripOptions, StripSummary};
