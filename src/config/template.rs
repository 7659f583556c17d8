//! Default configuration written by `scopelint init`

/// Default configuration content
pub const DEFAULT_CONFIG: &str = r#"# scopelint configuration
# ========================
#
# Scopes are discovered from the directories below each root, relative to
# the directory holding this file. Two environment variables override them:
#
#   COMMIT_SCOPE_ROOTS="crates,tools"   replaces `roots`
#   COMMIT_SCOPES="infra,security"      is appended to `extra`

[scopes]
# Directories whose child directories become scopes
roots = ["packages", "apps"]

# Scopes that are not backed by a directory
extra = ["repo", "workflows", "ci", "release", "docs", "tooling"]

# Directory names to skip, on top of hidden directories and the built-in
# list (node_modules, build, coverage, ios, android, ...)
ignore = []

# ============================================================================
# RULES
# ============================================================================
#
# Levels: "off", "warn", "error". Only errors fail the lint.

#
# Lengths are counted like commitlint does (UTF-16 code units).

[rules]
types = ["feat", "fix", "perf", "refactor", "docs", "test", "build", "ci", "chore", "style"]
header_max_length = 100
body_max_line_length = 100
footer_max_line_length = 100

type_enum = "error"
type_empty = "error"
type_case = "error"               # lower-case
scope_enum = "error"
scope_case = "error"              # lower-case
subject_empty = "error"
subject_case = "error"            # must not start with an upper-case letter
subject_full_stop = "error"       # must not end with "."
header_trim = "error"
header_max_length_level = "error"
body_leading_blank = "warn"
body_max_line_length_level = "error"
footer_leading_blank = "warn"
footer_max_line_length_level = "error"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
