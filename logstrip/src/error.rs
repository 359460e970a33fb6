//! Error taxonomy for a strip run.
//!
//! None of these are recovered from locally; they surface to the entry point
//! and end the process.

use std::io;
use std::path::PathBuf;

/// Fatal errors raised while walking or rewriting a source tree.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// The root directory (or a directory below it) cannot be listed.
    #[error("cannot access directory '{}': {source}", .path.display())]
    DirectoryAccess {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },
    /// A candidate file cannot be opened or is not valid UTF-8.
    #[error("cannot read '{}': {source}", .path.display())]
    FileRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },
    /// A candidate file cannot be written back.
    #[error("cannot write '{}': {source}", .path.display())]
    FileWrite {
        /// File that failed.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },
    /// A configuration file exists but cannot be read or parsed.
    #[error("invalid configuration in '{}': {message}", .path.display())]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// Parser or I/O message.
        message: String,
    },
}

impl StripError {
    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryAccess { path, .. }
            | Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::Config { path, .. } => path,
        }
    }
}
