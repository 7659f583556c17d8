//! `scopes` and `roots` command implementations

use anyhow::Result;
use std::path::Path;

use scopelint::scope::{RootScan, ScopeEnv};

use super::load_config;

/// Print the resolved scope set
pub fn scopes_command(work_dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let resolved = load_config(work_dir, config_path)?;
    let scopes = resolved
        .config
        .scopes
        .resolver(&ScopeEnv::from_process())
        .resolve(&resolved.base_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&scopes)?);
    } else {
        for scope in scopes.iter() {
            println!("{}", scope);
        }
    }
    Ok(())
}

/// Print how each root was scanned
pub fn roots_command(work_dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let resolved = load_config(work_dir, config_path)?;
    let report = resolved
        .config
        .scopes
        .resolver(&ScopeEnv::from_process())
        .scan(&resolved.base_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Base directory: {}", report.base_dir.display());
    if let Some(path) = &resolved.path {
        println!("Config: {}", path.display());
    }
    println!();

    if report.roots.is_empty() {
        println!("No roots configured.");
    }
    for scan in &report.roots {
        match scan {
            RootScan::Scanned { root, names, .. } => {
                println!("  {} ({} scopes)", root, names.len());
                for name in names {
                    println!("    - {}", name);
                }
            }
            RootScan::Skipped { root, reason, .. } => {
                println!("  {} (skipped: {})", root, reason);
            }
        }
    }

    println!();
    println!("Extra scopes: {}", report.extra.join(", "));
    println!("Total: {} scopes", report.scopes.len());
    Ok(())
}
