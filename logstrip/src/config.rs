use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_ROOT, DEFAULT_SUFFIXES};
use crate::error::StripError;
use crate::walker::WalkOptions;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[logstrip]` section.
    pub logstrip: LogstripConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` when running on defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
/// Options of the `[logstrip]` section. Every key is optional.
pub struct LogstripConfig {
    /// Directory to process, relative to the config file's directory.
    pub root: Option<PathBuf>,
    /// File-name suffixes to rewrite.
    pub extensions: Option<Vec<String>>,
    /// Directory names to skip.
    pub exclude_folders: Option<Vec<String>>,
    /// Honor ignore files during the walk.
    pub respect_gitignore: Option<bool>,
    /// Write through a temporary file and rename it over the target.
    pub atomic_write: Option<bool>,
}

impl LogstripConfig {
    /// Walk options with defaults filled in.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            suffixes: self.extensions.clone().unwrap_or_else(|| {
                DEFAULT_SUFFIXES.iter().map(|&s| s.to_owned()).collect()
            }),
            exclude_folders: self.exclude_folders.clone().unwrap_or_default(),
            respect_gitignore: self.respect_gitignore.unwrap_or(false),
        }
    }
}

impl Config {
    /// Root directory to process.
    ///
    /// A relative `root` key is resolved against the directory holding the
    /// config file, then expressed relative to the working directory when it
    /// lies below it. Without a `root` key this is `src`, relative to the
    /// working directory.
    #[must_use]
    pub fn resolved_root(&self) -> PathBuf {
        let Some(root) = &self.logstrip.root else {
            return PathBuf::from(DEFAULT_ROOT);
        };
        if root.is_absolute() {
            return root.clone();
        }
        let Some(dir) = self.config_file_path.as_deref().and_then(Path::parent) else {
            return root.clone();
        };

        let anchored = dir.join(root);
        std::env::current_dir()
            .and_then(|cwd| cwd.canonicalize())
            .ok()
            .and_then(|cwd| anchored.strip_prefix(cwd).ok().map(Path::to_path_buf))
            .map(|rel| {
                if rel.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    rel
                }
            })
            .unwrap_or(anchored)
    }

    /// Loads configuration from the current directory or one of its parents.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::Config`] if a config file is found but is invalid.
    pub fn load() -> Result<Self, StripError> {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The first `.logstrip.toml` found wins. No file at all yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::Config`] if a config file is found but is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self, StripError> {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        // Relative paths lose their parents on `pop`; anchor them first
        if let Ok(absolute) = current.canonicalize() {
            current = absolute;
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
            if !current.pop() {
                break;
            }
        }

        Ok(Config::default())
    }

    /// Loads one specific configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::Config`] if the file cannot be read or parsed.
    pub fn load_file(file: &Path) -> Result<Self, StripError> {
        let content = fs::read_to_string(file).map_err(|e| StripError::Config {
            path: file.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = toml::from_str::<Config>(&content).map_err(|e| StripError::Config {
            path: file.to_path_buf(),
            message: e.to_string(),
        })?;
        config.config_file_path = Some(file.to_path_buf());
        Ok(config)
    }
}
