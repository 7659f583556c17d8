//! `hook` command implementation

use anyhow::{bail, Result};
use std::path::Path;

use scopelint::git::{find_git_root, HookInstaller};

/// Install (or remove) the `commit-msg` hook of the repository containing `work_dir`
pub fn hook_command(work_dir: &Path, force: bool, remove: bool) -> Result<()> {
    let Some(root) = find_git_root(work_dir) else {
        bail!("Not a git repository: {}", work_dir.display());
    };
    let installer = HookInstaller::for_repo(&root)?;

    if remove {
        installer.uninstall()?;
        println!("Removed: {}", installer.hook_path().display());
    } else {
        installer.install(force)?;
        println!("Installed: {}", installer.hook_path().display());
        println!("Commit messages will now be checked by scopelint.");
    }
    Ok(())
}
