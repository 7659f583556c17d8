//! CLI command implementations

pub mod hook;
pub mod init;
pub mod lint;
pub mod scopes;

use anyhow::Result;
use std::path::Path;

use scopelint::config::{Config, ResolvedConfig};

/// Load the configuration for a command: the explicit file if given, otherwise
/// whatever applies to `work_dir`
pub fn load_config(work_dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    match config_path {
        Some(path) => Config::load_explicit(path),
        None => Config::discover(work_dir),
    }
}
