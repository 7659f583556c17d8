//! `init` command implementation

use anyhow::{bail, Result};
use std::path::Path;

use scopelint::config::{write_file_atomic, CONFIG_FILE_NAMES, DEFAULT_CONFIG};

/// Write the default configuration into `work_dir`
pub fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_path = work_dir.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_file_atomic(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
