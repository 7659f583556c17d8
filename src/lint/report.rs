//! Lint results

use std::fmt;

use serde::Serialize;

use crate::config::RuleLevel;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Rule name, e.g. `scope-enum`
    pub rule: &'static str,
    pub level: RuleLevel,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.level {
            RuleLevel::Error => "✖",
            _ => "⚠",
        };
        write!(f, "{}   {} [{}]", mark, self.message, self.rule)
    }
}

/// Outcome of linting one message
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub header: String,
    /// Message matched one of the ignore patterns and was not checked
    pub ignored: bool,
    pub problems: Vec<Problem>,
}

impl LintReport {
    /// No error-level problems
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| p.level == RuleLevel::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| p.level == RuleLevel::Warn)
            .count()
    }

    pub fn has_problem(&self, rule: &str) -> bool {
        self.problems.iter().any(|p| p.rule == rule)
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⧗   input: {}", self.header)?;
        for problem in &self.problems {
            writeln!(f, "{}", problem)?;
        }
        writeln!(f)?;
        let mark = if self.is_valid() { "✔" } else { "✖" };
        write!(
            f,
            "{}   found {} problems, {} warnings",
            mark,
            self.error_count(),
            self.warning_count()
        )
    }
}
