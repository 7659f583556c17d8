//! `lint` command implementation

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use scopelint::git::{commit_editmsg_path, find_git_root};
use scopelint::lint::Linter;
use scopelint::scope::ScopeEnv;

use super::load_config;

/// Where the commit message comes from
#[derive(Debug, Clone)]
pub enum MessageSource {
    Text(String),
    /// `--edit` with an explicit file
    File(PathBuf),
    /// `--edit` without a value: the repository's `COMMIT_EDITMSG`
    EditMsg,
    Stdin,
}

impl MessageSource {
    fn read(&self, work_dir: &Path) -> Result<String> {
        match self {
            MessageSource::Text(text) => Ok(text.clone()),
            MessageSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read commit message: {}", path.display())),
            MessageSource::EditMsg => {
                let Some(root) = find_git_root(work_dir) else {
                    bail!("Not a git repository: {}", work_dir.display());
                };
                let path = commit_editmsg_path(&root);
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read commit message: {}", path.display()))
            }
            MessageSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read commit message from stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Lint a commit message. Returns whether it passed.
pub fn lint_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    source: MessageSource,
    json: bool,
) -> Result<bool> {
    let resolved = load_config(work_dir, config_path)?;
    let scopes = resolved
        .config
        .scopes
        .resolver(&ScopeEnv::from_process())
        .resolve(&resolved.base_dir);
    let linter = Linter::new(resolved.config.rules, scopes);

    let raw = source.read(work_dir)?;
    let report = linter.lint_str(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !report.problems.is_empty() {
        eprintln!("{}", report);
    }

    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn init_repo(dir: &Path) {
        Command::new("git")
            .args(["init"])
            .current_dir(dir)
            .output()
            .expect("Failed to init git repo");
    }

    #[test]
    fn test_read_text() {
        let temp = TempDir::new().unwrap();
        let source = MessageSource::Text("fix: x".to_string());

        assert_eq!(source.read(temp.path()).unwrap(), "fix: x");
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("MSG");
        std::fs::write(&path, "feat(core): add resolver\n").unwrap();

        let raw = MessageSource::File(path).read(temp.path()).unwrap();
        assert_eq!(raw, "feat(core): add resolver\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let source = MessageSource::File(temp.path().join("missing"));

        let err = source.read(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read commit message"));
    }

    #[test]
    fn test_read_edit_msg_from_repository() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());
        std::fs::write(temp.path().join(".git/COMMIT_EDITMSG"), "docs: fix typo\n").unwrap();

        let raw = MessageSource::EditMsg.read(temp.path()).unwrap();
        assert_eq!(raw, "docs: fix typo\n");
    }

    #[test]
    fn test_read_edit_msg_outside_repository_fails() {
        let temp = TempDir::new().unwrap();

        let err = MessageSource::EditMsg.read(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Not a git repository"));
    }

    #[test]
    fn test_lint_command_reports_pass_and_fail() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".scopelint.toml"), "").unwrap();

        let passed = lint_command(
            temp.path(),
            None,
            MessageSource::Text("docs: update readme".to_string()),
            false,
        )
        .unwrap();
        assert!(passed);

        let passed = lint_command(
            temp.path(),
            None,
            MessageSource::Text("Update stuff".to_string()),
            false,
        )
        .unwrap();
        assert!(!passed);
    }

    #[test]
    fn test_lint_command_reads_file_source() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".scopelint.toml"), "").unwrap();
        let path = temp.path().join("MSG");
        std::fs::write(&path, "# comment\nfix(nowhere): x\n").unwrap();

        let passed = lint_command(temp.path(), None, MessageSource::File(path), true).unwrap();
        assert!(!passed);
    }
}
