//! End-to-end lint tests: repository layout + config + commit messages

mod common;

use std::fs;

use scopelint::config::{Config, RuleLevel};
use scopelint::git::commit_editmsg_path;
use scopelint::lint::Linter;
use scopelint::scope::ScopeEnv;

use common::{create_monorepo, create_test_repo};

fn linter_for(dir: &std::path::Path) -> Linter {
    let resolved = Config::discover(dir).expect("Failed to load config");
    let scopes = resolved
        .config
        .scopes
        .resolver(&ScopeEnv::default())
        .resolve(&resolved.base_dir);
    Linter::new(resolved.config.rules, scopes)
}

#[test]
fn test_discovered_scopes_are_accepted() {
    let temp_dir = create_test_repo();
    create_monorepo(temp_dir.path());
    let linter = linter_for(temp_dir.path());

    for message in [
        "feat(core): add resolver",
        "fix(web): handle missing root",
        "docs(repo): update readme",
        "ci(workflows): cache dependencies",
        "refactor(ui,mobile): share widgets",
    ] {
        let report = linter.lint_str(message);
        assert!(report.is_valid(), "{}: {:?}", message, report.problems);
    }
}

#[test]
fn test_scope_outside_repository_is_rejected() {
    let temp_dir = create_test_repo();
    create_monorepo(temp_dir.path());
    let linter = linter_for(temp_dir.path());

    let report = linter.lint_str("feat(desktop): add window");

    assert!(!report.is_valid());
    assert!(report.has_problem("scope-enum"));
}

#[test]
fn test_rule_levels_from_config() {
    let temp_dir = create_test_repo();
    create_monorepo(temp_dir.path());
    fs::write(
        temp_dir.path().join(".scopelint.toml"),
        r#"
[rules]
types = ["feat", "fix", "wip"]
header_max_length = 20
scope_enum = "warn"
"#,
    )
    .expect("Failed to write config");
    let linter = linter_for(temp_dir.path());

    assert!(linter.lint_str("wip: x").is_valid());
    assert!(linter.lint_str("chore: x").has_problem("type-enum"));

    let report = linter.lint_str("fix(desktop): y");
    assert!(report.is_valid());
    assert_eq!(report.problems[0].level, RuleLevel::Warn);

    assert!(!linter.lint_str("feat: this header is too long").is_valid());
}

#[test]
fn test_commit_editmsg_in_repository() {
    let temp_dir = create_test_repo();
    let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");

    let path = commit_editmsg_path(&root);
    assert!(path.ends_with("COMMIT_EDITMSG"));
    assert!(path.starts_with(&root));

    fs::write(
        &path,
        "feat(repo): initial layout\n# Please enter the commit message for your changes.\n",
    )
    .expect("Failed to write COMMIT_EDITMSG");
    let raw = fs::read_to_string(&path).expect("Failed to read COMMIT_EDITMSG");

    assert!(linter_for(&root).lint_str(&raw).is_valid());
}
