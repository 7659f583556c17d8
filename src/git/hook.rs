//! `commit-msg` hook installation

use std::path::{Path, PathBuf};

use tracing::info;

use super::git_path;

/// Marker line identifying hooks written by scopelint
pub const HOOK_MARKER: &str = "# installed by scopelint";

const HOOK_NAME: &str = "commit-msg";

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("A foreign commit-msg hook already exists: {} (use --force to overwrite)", .0.display())]
    ForeignHook(PathBuf),

    #[error("No scopelint commit-msg hook installed at {}", .0.display())]
    NotInstalled(PathBuf),

    #[error("Failed to write hook: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs and removes the `commit-msg` hook that runs `scopelint lint`
pub struct HookInstaller {
    hook_path: PathBuf,
}

impl HookInstaller {
    /// Locate the hook file for the repository at `root`
    pub fn for_repo(root: &Path) -> Result<Self, HookError> {
        if !root.join(".git").exists() {
            return Err(HookError::NotARepository(root.to_path_buf()));
        }
        Ok(Self {
            hook_path: git_path(root, &format!("hooks/{HOOK_NAME}")),
        })
    }

    pub fn hook_path(&self) -> &Path {
        &self.hook_path
    }

    /// Script body of the hook
    pub fn script() -> String {
        format!("#!/bin/sh\n{HOOK_MARKER}\nexec scopelint lint --edit \"$1\"\n")
    }

    /// Whether the existing hook (if any) was written by us
    pub fn is_ours(&self) -> bool {
        std::fs::read_to_string(&self.hook_path)
            .map(|content| content.contains(HOOK_MARKER))
            .unwrap_or(false)
    }

    /// Write the hook. An existing hook not written by scopelint is only
    /// replaced with `force`.
    pub fn install(&self, force: bool) -> Result<(), HookError> {
        if self.hook_path.exists() && !self.is_ours() && !force {
            return Err(HookError::ForeignHook(self.hook_path.clone()));
        }

        if let Some(parent) = self.hook_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.hook_path, Self::script())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.hook_path)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&self.hook_path, perms)?;
        }

        info!("Installed {} hook: {}", HOOK_NAME, self.hook_path.display());
        Ok(())
    }

    /// Remove a hook previously written by [`HookInstaller::install`]
    pub fn uninstall(&self) -> Result<(), HookError> {
        if !self.is_ours() {
            return Err(HookError::NotInstalled(self.hook_path.clone()));
        }
        std::fs::remove_file(&self.hook_path)?;
        info!("Removed {} hook: {}", HOOK_NAME, self.hook_path.display());
        Ok(())
    }
}
