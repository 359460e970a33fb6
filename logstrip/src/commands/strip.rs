//! Strip command: walk, rewrite, report.

use crate::constants::DEFAULT_ROOT;
use crate::error::StripError;
use crate::strip::{strip, Pattern};
use crate::walker::{SourceWalker, WalkOptions};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for a strip run.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Directory to process.
    pub root: PathBuf,
    /// Walk filters.
    pub walk: WalkOptions,
    /// Write through a temp file in the same directory, then rename.
    pub atomic_write: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            walk: WalkOptions::default(),
            atomic_write: false,
        }
    }
}

/// Outcome for one rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File that was rewritten.
    pub path: PathBuf,
    /// Number of statements removed from it.
    pub removed: usize,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripSummary {
    /// Files in the order they were processed.
    pub files: Vec<FileOutcome>,
    /// Sum of `removed` over all files.
    pub total_removed: usize,
}

/// Strips `console.log` statements from every matching file under `options.root`.
///
/// Each file is rewritten even when nothing matched, and a notice naming it is
/// written to `writer`. The first error stops the run; files handled before it
/// stay rewritten.
///
/// # Errors
///
/// Returns [`StripError::DirectoryAccess`], [`StripError::FileRead`] or
/// [`StripError::FileWrite`] (wrapped in `anyhow`) or an I/O error from `writer`.
pub fn run_strip<W: Write>(options: &StripOptions, mut writer: W) -> Result<StripSummary> {
    let pattern = Pattern::console_log();
    let mut summary = StripSummary::default();

    for path in SourceWalker::new(&options.root, &options.walk)? {
        let path = path?;
        let removed = strip_file(&path, &pattern, options.atomic_write)?;
        writeln!(
            writer,
            "Removed all console.log statements from {}",
            path.display()
        )?;
        summary.total_removed += removed;
        summary.files.push(FileOutcome { path, removed });
    }

    info!(
        files = summary.files.len(),
        removed = summary.total_removed,
        "strip finished"
    );
    Ok(summary)
}

/// Reads, strips and rewrites a single file. Returns the number of removals.
///
/// # Errors
///
/// Returns [`StripError::FileRead`] if the file cannot be read as UTF-8 and
/// [`StripError::FileWrite`] if it cannot be written back.
pub fn strip_file(path: &Path, pattern: &Pattern, atomic: bool) -> Result<usize, StripError> {
    let content = fs::read_to_string(path).map_err(|source| StripError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let stripped = strip(&content, pattern);
    debug!(file = %path.display(), removed = stripped.removed, "stripped");

    write_back(path, &stripped.content, atomic)?;
    Ok(stripped.removed)
}

/// Overwrites `path` with `content`, truncating first unless `atomic`.
fn write_back(path: &Path, content: &str, atomic: bool) -> Result<(), StripError> {
    let written = if atomic {
        write_atomic(path, content.as_bytes())
    } else {
        fs::write(path, content.as_bytes())
    };
    written.map_err(|source| StripError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_back_failure_is_file_write() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gone").join("a.ts");

        for atomic in [false, true] {
            let err = write_back(&target, "", atomic).unwrap_err();
            assert!(matches!(err, StripError::FileWrite { .. }));
            assert_eq!(err.path(), target.as_path());
        }
    }

    #[test]
    fn test_write_back_truncates() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a.ts");
        fs::write(&target, "console.log(1);\nrest\n").unwrap();

        write_back(&target, "rest\n", false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "rest\n");
    }
}
