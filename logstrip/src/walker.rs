//! Tree walker for source discovery.
//!
//! Uses the `ignore` crate's `WalkBuilder` with its standard filters turned
//! off, so the default walk sees every file a plain recursive descent would,
//! hidden files included. Symlinks are not followed into directories.

use crate::constants::DEFAULT_SUFFIXES;
use crate::error::StripError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Knobs for the walk. The default matches a bare recursive descent over
/// `.ts` / `.tsx` files.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// File-name suffixes to keep (matched against the whole file name).
    pub suffixes: Vec<String>,
    /// Directory names to prune. Exact names or `*.ext` wildcards.
    pub exclude_folders: Vec<String>,
    /// Honor `.gitignore`, `.ignore`, `.git/info/exclude` and the global gitignore.
    pub respect_gitignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|&s| s.to_owned()).collect(),
            exclude_folders: Vec::new(),
            respect_gitignore: false,
        }
    }
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| match exclude.strip_prefix('*') {
        Some(suffix) if suffix.starts_with('.') => name.ends_with(suffix),
        _ => name == exclude,
    })
}

/// True when the file name of `path` ends with one of `suffixes`.
///
/// This is a plain string suffix test, so `types.d.ts` and a file literally
/// named `.ts` both qualify.
#[must_use]
pub fn has_source_suffix(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    suffixes.iter().any(|s| name.ends_with(s.as_str()))
}

/// Lazy iterator over the source files below a root directory.
///
/// Yields paths in the walker's traversal order; no sort is applied. Any
/// error met while descending is yielded as [`StripError::DirectoryAccess`].
pub struct SourceWalker {
    inner: ignore::Walk,
    root: PathBuf,
    suffixes: Vec<String>,
}

impl SourceWalker {
    /// Validates `root` and prepares the walk.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::DirectoryAccess`] if `root` does not exist, is not
    /// a directory, or cannot be listed. Nothing has been yielded at that point.
    pub fn new(root: &Path, options: &WalkOptions) -> Result<Self, StripError> {
        let access_error = |source: io::Error| StripError::DirectoryAccess {
            path: root.to_path_buf(),
            source,
        };

        let meta = fs::metadata(root).map_err(access_error)?;
        if !meta.is_dir() {
            return Err(access_error(io::Error::other("not a directory")));
        }
        fs::read_dir(root).map_err(access_error)?;

        let mut builder = ignore::WalkBuilder::new(root);
        builder.standard_filters(false);
        if options.respect_gitignore {
            builder
                .ignore(true)
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .parents(true)
                .require_git(false);
        }

        if !options.exclude_folders.is_empty() {
            let excludes = options.exclude_folders.clone();
            builder.filter_entry(move |entry| {
                // Never prune the root itself
                if entry.depth() == 0 {
                    return true;
                }
                if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !is_excluded(name, &excludes))
            });
        }

        debug!(root = %root.display(), suffixes = ?options.suffixes, "walking source tree");

        Ok(Self {
            inner: builder.build(),
            root: root.to_path_buf(),
            suffixes: options.suffixes.clone(),
        })
    }
}

impl Iterator for SourceWalker {
    type Item = Result<PathBuf, StripError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(walk_error(err, &self.root))),
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }
            // Unfollowed symlink to a directory: listed, never descended into
            if file_type.is_symlink() && entry.path().is_dir() {
                continue;
            }
            if !has_source_suffix(entry.path(), &self.suffixes) {
                continue;
            }
            return Some(Ok(entry.into_path()));
        }
    }
}

/// Pulls the failing path out of a walk error, if it carries one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}

/// Errors without a path of their own are attributed to the walk root.
fn walk_error(err: ignore::Error, root: &Path) -> StripError {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    StripError::DirectoryAccess { path, source }
}
