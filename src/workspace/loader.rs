//! Locating and loading the project configuration file.
//!
//! The search and the parse are behind the [`ConfigLoader`] trait so the
//! resolver can be exercised in tests without touching a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::config::ConfigPipeline;

/// File-name stem every recognised configuration file shares, as in
/// `postcss.config.json`.
pub const CONFIG_STEM: &str = "postcss.config";

/// Directories skipped during the workspace search.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    "dist",
    "build",
    "coverage",
    "target",
    "vendor",
];

/// Errors from loading a located configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// External collaborator interface for configuration discovery.
pub trait ConfigLoader: Send + Sync {
    /// Search `root` for a configuration file. Returns at most one path;
    /// when several files match, which one is chosen is not a contract the
    /// caller may rely on, only that the choice is consistent.
    fn locate(&self, root: &Path) -> Option<PathBuf>;

    /// Load and decode the file at `path`.
    fn load(&self, path: &Path) -> Result<ConfigPipeline, ConfigError>;
}

/// Filesystem-backed loader used in production.
#[derive(Debug, Default)]
pub struct FsConfigLoader;

impl ConfigLoader for FsConfigLoader {
    fn locate(&self, root: &Path) -> Option<PathBuf> {
        let found = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry))
            .filter_map(|entry| entry.ok())
            .find(|entry| entry.file_type().is_file() && is_config_file_name(entry.file_name()))
            .map(DirEntry::into_path);

        if let Some(path) = &found {
            log::debug!("located config file at {}", path.display());
        }
        found
    }

    fn load(&self, path: &Path) -> Result<ConfigPipeline, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    // depth 0 is the search root itself; never skip it.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

fn is_config_file_name(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| {
        name.strip_prefix(CONFIG_STEM)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|extension| !extension.is_empty())
    })
}
