//! Commit message linting
//!
//! Rules (conventional commit preset plus the repository scope list):
//! - header: `header-trim`, `header-max-length`
//! - type: `type-empty`, `type-case`, `type-enum`
//! - scope: `scope-case`, `scope-enum` (against the resolved [`ScopeSet`])
//! - subject: `subject-empty`, `subject-case`, `subject-full-stop`
//! - body/footer: `body-leading-blank`, `body-max-line-length`,
//!   `footer-leading-blank`, `footer-max-line-length`

mod message;
mod report;

pub use message::{text_len, CommitMessage};
pub use report::{LintReport, Problem};

use tracing::debug;

use crate::config::{RuleLevel, RulesConfig};
use crate::scope::ScopeSet;

/// Jaro-Winkler similarity needed before a scope is suggested
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Checks commit messages against the configured rules and scopes
#[derive(Debug, Clone)]
pub struct Linter {
    rules: RulesConfig,
    scopes: ScopeSet,
}

/// Record a violation unless the rule is turned off
fn push(problems: &mut Vec<Problem>, rule: &'static str, level: RuleLevel, message: String) {
    if level.is_enabled() {
        problems.push(Problem {
            rule,
            level,
            message,
        });
    }
}

impl Linter {
    pub fn new(rules: RulesConfig, scopes: ScopeSet) -> Self {
        Self { rules, scopes }
    }

    pub fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }

    /// Parse and lint a raw commit message
    pub fn lint_str(&self, raw: &str) -> LintReport {
        self.lint(&CommitMessage::parse(raw))
    }

    /// Lint an already parsed message
    pub fn lint(&self, message: &CommitMessage) -> LintReport {
        let mut report = LintReport {
            header: message.header.clone(),
            ..Default::default()
        };

        if message.is_empty() {
            report.problems.push(Problem {
                rule: "empty-message",
                level: RuleLevel::Error,
                message: "commit message may not be empty".to_string(),
            });
            return report;
        }

        if message.is_ignored() {
            debug!("Ignoring generated commit header: {}", message.header);
            report.ignored = true;
            return report;
        }

        let problems = &mut report.problems;
        self.check_header(message, problems);
        self.check_type(message, problems);
        self.check_scope(message, problems);
        self.check_subject(message, problems);
        self.check_body_and_footer(message, problems);

        report
    }

    fn check_header(&self, message: &CommitMessage, problems: &mut Vec<Problem>) {
        let rules = &self.rules;

        if message.header != message.header.trim() {
            push(
                problems,
                "header-trim",
                rules.header_trim,
                "header must not be surrounded by whitespace".to_string(),
            );
        }

        let len = message.header_len();
        let max = rules.header_max_length;
        if len > max {
            push(
                problems,
                "header-max-length",
                rules.header_max_length_level,
                format!(
                    "header must not be longer than {} characters, current length is {}",
                    max, len
                ),
            );
        }
    }

    fn check_type(&self, message: &CommitMessage, problems: &mut Vec<Problem>) {
        let rules = &self.rules;

        let Some(commit_type) = message.commit_type.as_deref() else {
            push(
                problems,
                "type-empty",
                rules.type_empty,
                "type may not be empty".to_string(),
            );
            return;
        };

        if commit_type != commit_type.to_lowercase() {
            push(
                problems,
                "type-case",
                rules.type_case,
                "type must be lower-case".to_string(),
            );
        }

        if !rules.types.iter().any(|allowed| allowed == commit_type) {
            push(
                problems,
                "type-enum",
                rules.type_enum,
                format!("type must be one of [{}]", rules.types.join(", ")),
            );
        }
    }

    fn check_scope(&self, message: &CommitMessage, problems: &mut Vec<Problem>) {
        let scopes = message.scopes();

        if scopes.iter().any(|scope| *scope != scope.to_lowercase()) {
            push(
                problems,
                "scope-case",
                self.rules.scope_case,
                "scope must be lower-case".to_string(),
            );
        }

        // An empty list allows any scope
        if self.scopes.is_empty() {
            return;
        }

        for scope in scopes {
            if self.scopes.contains(scope) {
                continue;
            }
            let allowed: Vec<&str> = self.scopes.iter().collect();
            let mut text = format!(
                "scope \"{}\" must be one of [{}]",
                scope,
                allowed.join(", ")
            );
            if let Some(suggestion) = self.suggest_scope(scope) {
                text.push_str(&format!(", did you mean \"{}\"?", suggestion));
            }
            push(problems, "scope-enum", self.rules.scope_enum, text);
        }
    }

    fn check_subject(&self, message: &CommitMessage, problems: &mut Vec<Problem>) {
        let rules = &self.rules;

        let Some(subject) = message.subject.as_deref() else {
            push(
                problems,
                "subject-empty",
                rules.subject_empty,
                "subject may not be empty".to_string(),
            );
            return;
        };

        // Sentence, start, pascal and upper case all begin with a capital;
        // subjects starting with a digit or symbol are not checked
        if subject.starts_with(|c: char| c.is_ascii_uppercase()) {
            push(
                problems,
                "subject-case",
                rules.subject_case,
                "subject must not be sentence-case, start-case, pascal-case, upper-case"
                    .to_string(),
            );
        }

        if subject.ends_with('.') && !subject.ends_with("...") {
            push(
                problems,
                "subject-full-stop",
                rules.subject_full_stop,
                "subject may not end with full stop".to_string(),
            );
        }
    }

    fn check_body_and_footer(&self, message: &CommitMessage, problems: &mut Vec<Problem>) {
        let rules = &self.rules;

        if let Some(body) = message.body.as_deref() {
            if !message.body_leading_blank {
                push(
                    problems,
                    "body-leading-blank",
                    rules.body_leading_blank,
                    "body must have leading blank line".to_string(),
                );
            }
            if body.lines().any(|l| text_len(l) > rules.body_max_line_length) {
                push(
                    problems,
                    "body-max-line-length",
                    rules.body_max_line_length_level,
                    format!(
                        "body's lines must not be longer than {} characters",
                        rules.body_max_line_length
                    ),
                );
            }
        }

        if let Some(footer) = message.footer.as_deref() {
            if !message.footer_leading_blank {
                push(
                    problems,
                    "footer-leading-blank",
                    rules.footer_leading_blank,
                    "footer must have leading blank line".to_string(),
                );
            }
            if footer.lines().any(|l| text_len(l) > rules.footer_max_line_length) {
                push(
                    problems,
                    "footer-max-line-length",
                    rules.footer_max_line_length_level,
                    format!(
                        "footer's lines must not be longer than {} characters",
                        rules.footer_max_line_length
                    ),
                );
            }
        }
    }

    /// Closest allowed scope by Jaro-Winkler similarity
    pub fn suggest_scope(&self, scope: &str) -> Option<&str> {
        use strsim::jaro_winkler;

        let needle = scope.to_lowercase();
        self.scopes
            .iter()
            .map(|candidate| (candidate, jaro_winkler(&needle, &candidate.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linter() -> Linter {
        let scopes: ScopeSet = ["core", "ui", "docs", "repo"].into_iter().collect();
        Linter::new(RulesConfig::default(), scopes)
    }

    #[test]
    fn test_valid_message() {
        let report = linter().lint_str("feat(core): add resolver\n\nLonger body.\n");

        assert!(report.is_valid(), "{:?}", report.problems);
        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_valid_without_scope() {
        assert!(linter().lint_str("chore: bump deps").is_valid());
    }

    #[test]
    fn test_unknown_type() {
        let report = linter().lint_str("feature(core): add resolver");

        assert!(!report.is_valid());
        assert!(report.has_problem("type-enum"));
    }

    #[test]
    fn test_missing_type_and_subject() {
        let report = linter().lint_str("just some words");

        assert!(report.has_problem("type-empty"));
        assert!(report.has_problem("subject-empty"));
        assert!(!report.has_problem("type-enum"));
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_case_and_full_stop_rules() {
        let report = linter().lint_str("FEAT(core): Add thing.");

        for rule in ["type-case", "type-enum", "subject-case", "subject-full-stop"] {
            assert!(report.has_problem(rule), "missing {rule}: {:?}", report.problems);
        }
        assert!(!report.has_problem("scope-case"));
    }

    #[test]
    fn test_subject_may_start_with_digit_or_keep_acronyms() {
        assert!(linter().lint_str("fix(ui): 3 buttons misaligned").is_valid());
        assert!(linter().lint_str("fix(ui): handle API errors").is_valid());
        assert!(linter().lint_str("docs: explain the flow...").is_valid());
    }

    #[test]
    fn test_scope_case() {
        let report = linter().lint_str("fix(Core): x");

        assert!(report.has_problem("scope-case"));
        let suggestion = report
            .problems
            .iter()
            .find(|p| p.rule == "scope-enum")
            .unwrap();
        assert!(suggestion.message.contains("did you mean \"core\""));
    }

    #[test]
    fn test_header_trim() {
        let report = linter().lint_str("fix(ui): x   ");

        assert!(report.has_problem("header-trim"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_body_without_leading_blank_warns() {
        let report = linter().lint_str("feat(core): x\nbody without blank line");

        assert!(report.has_problem("body-leading-blank"));
        assert_eq!(report.warning_count(), 1);
        assert!(report.is_valid());
    }

    #[test]
    fn test_footer_without_leading_blank_warns() {
        let report = linter().lint_str("feat(core): x\n\nbody\nCloses #4");

        assert!(report.has_problem("footer-leading-blank"));
        assert!(!report.has_problem("body-leading-blank"));
        assert!(report.is_valid());
    }

    #[test]
    fn test_body_and_footer_line_length() {
        let long = "x".repeat(101);
        let report = linter().lint_str(&format!(
            "feat(core): x\n\n{}\n\nRefs: {}",
            long, long
        ));

        assert!(report.has_problem("body-max-line-length"));
        assert!(report.has_problem("footer-max-line-length"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_header_length_counts_emoji_as_two() {
        // 98 ASCII characters plus one emoji: 99 chars, 100 UTF-16 units
        let ok = format!("feat: {}🚀", "a".repeat(92));
        let too_long = format!("feat: {}🚀", "a".repeat(93));

        assert!(!linter().lint_str(&ok).has_problem("header-max-length"));
        assert!(linter().lint_str(&too_long).has_problem("header-max-length"));
    }

    #[test]
    fn test_unknown_scope_with_suggestion() {
        let report = linter().lint_str("fix(cor): handle missing root");

        let problem = report
            .problems
            .iter()
            .find(|p| p.rule == "scope-enum")
            .unwrap();
        assert!(problem.message.contains("did you mean \"core\""));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_each_of_multiple_scopes_is_checked() {
        let report = linter().lint_str("fix(core,server): x");

        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].message.contains("\"server\""));
    }

    #[test]
    fn test_empty_scope_set_allows_any_scope() {
        let linter = Linter::new(RulesConfig::default(), ScopeSet::new());

        assert!(linter.lint_str("fix(anything): x").is_valid());
    }

    #[test]
    fn test_empty_subject() {
        let report = linter().lint_str("feat(ui): ");

        assert!(report.has_problem("subject-empty"));
        assert!(!report.has_problem("type-enum"));
    }

    #[test]
    fn test_header_max_length() {
        let subject = "a".repeat(100 - "feat: ".len());
        let ok = format!("feat: {}", subject);
        let too_long = format!("{}b", ok);

        assert!(linter().lint_str(&ok).is_valid());
        let report = linter().lint_str(&too_long);
        assert!(report.has_problem("header-max-length"));
        assert!(report.problems[0].message.contains("current length is 101"));
    }

    #[test]
    fn test_warning_level_keeps_report_valid() {
        let rules = RulesConfig {
            scope_enum: RuleLevel::Warn,
            ..Default::default()
        };
        let scopes: ScopeSet = ["core"].into_iter().collect();
        let report = Linter::new(rules, scopes).lint_str("fix(web): x");

        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_disabled_rule_never_reports() {
        let rules = RulesConfig {
            type_enum: RuleLevel::Off,
            ..Default::default()
        };
        let report = Linter::new(rules, ScopeSet::new()).lint_str("wip: stuff");

        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_ignored_merge_commit() {
        let report = linter().lint_str("Merge branch 'main' into feature/x");

        assert!(report.ignored);
        assert!(report.is_valid());
    }

    #[test]
    fn test_empty_message_is_an_error() {
        let report = linter().lint_str("# only comments\n");

        assert!(report.has_problem("empty-message"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_no_suggestion_for_distant_scope() {
        assert_eq!(linter().suggest_scope("zzzzzz"), None);
    }
}
