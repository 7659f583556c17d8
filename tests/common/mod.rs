//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates a temporary git repository for testing
pub fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    Command::new("git")
        .args(["init"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to init git repo");

    Command::new("git")
        .args(["config", "user.email", "test@test.com"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git name");

    temp_dir
}

/// Creates the given directories (relative to `base`)
pub fn create_dirs(base: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(base.join(dir)).expect("Failed to create directory");
    }
}

/// Creates a monorepo layout: `packages/{core,ui}` and `apps/{mobile,web}`
pub fn create_monorepo(base: &Path) {
    create_dirs(
        base,
        &["packages/core", "packages/ui", "apps/mobile", "apps/web"],
    );
}
