//! Git repository helpers

mod hook;

pub use hook::{HookError, HookInstaller, HOOK_MARKER};

use std::path::{Path, PathBuf};
use std::process::Command;

/// Find the root of the git repository containing `path`
pub fn find_git_root(path: &Path) -> Option<PathBuf> {
    let start_dir = if path.is_file() { path.parent()? } else { path };
    git_output(start_dir, &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

/// Resolve a path inside the git directory (`.git/<name>`).
///
/// Asks git so that worktrees and `GIT_DIR` are honoured, and falls back to
/// `<root>/.git/<name>` when git cannot answer.
pub fn git_path(root: &Path, name: &str) -> PathBuf {
    match git_output(root, &["rev-parse", "--git-path", name]) {
        Some(p) => {
            let p = PathBuf::from(p);
            if p.is_absolute() { p } else { root.join(p) }
        }
        None => root.join(".git").join(name),
    }
}

/// Path of the message file git hands to `commit-msg` hooks
pub fn commit_editmsg_path(root: &Path) -> PathBuf {
    git_path(root, "COMMIT_EDITMSG")
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if out.is_empty() { None } else { Some(out) }
}
