//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::Config;
use crate::git::find_git_root;

/// File names searched for, in order of preference
pub const CONFIG_FILE_NAMES: &[&str] = &[".scopelint.toml", "scopelint.toml"];

/// A loaded configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    /// Config file, if one was found
    pub path: Option<PathBuf>,
    /// Directory that scope roots are resolved against
    pub base_dir: PathBuf,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Find the config file for `start`.
    ///
    /// Walks from `start` towards the filesystem root and stops at the first
    /// directory that holds a config file or a `.git` entry.
    pub fn find_file(start: &Path) -> Option<PathBuf> {
        for dir in start.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if dir.join(".git").exists() {
                break;
            }
        }
        None
    }

    /// Load the configuration that applies to `start`.
    ///
    /// The base directory is the directory holding the config file. Without
    /// a file, built-in defaults are used and the base directory is the git
    /// repository root, or `start` outside a repository.
    pub fn discover(start: &Path) -> Result<ResolvedConfig> {
        let start = std::fs::canonicalize(start)
            .with_context(|| format!("Failed to resolve directory: {}", start.display()))?;

        if let Some(path) = Self::find_file(&start) {
            return Self::load_explicit(&path);
        }

        let base_dir = find_git_root(&start).unwrap_or_else(|| start.clone());
        debug!(
            "No config file found from {}, using defaults (base: {})",
            start.display(),
            base_dir.display()
        );

        Ok(ResolvedConfig {
            config: Config::default(),
            path: None,
            base_dir,
        })
    }

    /// Load a specific config file; its parent directory becomes the base directory
    pub fn load_explicit(path: &Path) -> Result<ResolvedConfig> {
        let path = std::fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve config file: {}", path.display()))?;
        let config = Self::from_file(&path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!("Loaded config from {} (base: {})", path.display(), base_dir.display());

        Ok(ResolvedConfig {
            config,
            path: Some(path),
            base_dir,
        })
    }

    /// Save configuration to a file.
    ///
    /// Writes to a temp file first and renames it over the target.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_file_atomic(path, &content)
    }
}

/// Write `content` through a sibling temp file and a rename, so readers never
/// see a half-written config
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    debug!("Wrote {}", path.display());
    Ok(())
}
