//! Lint rule configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commit types accepted by `type-enum` unless configured otherwise
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "perf", "refactor", "docs", "test", "build", "ci", "chore", "style",
];

/// Maximum header length accepted by `header-max-length`
pub const DEFAULT_HEADER_MAX_LENGTH: usize = 100;

/// Maximum line length for `body-max-line-length` and `footer-max-line-length`
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// How a rule violation is reported.
///
/// Only `error` makes a message invalid; `warn` is reported but passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    #[serde(alias = "disabled", alias = "ignore")]
    Off,
    #[serde(alias = "warning")]
    Warn,
    #[default]
    Error,
}

impl RuleLevel {
    pub fn is_enabled(self) -> bool {
        self != RuleLevel::Off
    }
}

impl fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleLevel::Off => write!(f, "off"),
            RuleLevel::Warn => write!(f, "warning"),
            RuleLevel::Error => write!(f, "error"),
        }
    }
}

/// `[rules]` section
///
/// Defaults follow the conventional commit preset: blank-line rules warn,
/// everything else is an error. Lengths are counted in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed commit types
    pub types: Vec<String>,

    /// Maximum header length
    pub header_max_length: usize,

    /// Maximum length of a body line
    pub body_max_line_length: usize,

    /// Maximum length of a footer line
    pub footer_max_line_length: usize,

    pub type_enum: RuleLevel,
    pub type_empty: RuleLevel,
    pub type_case: RuleLevel,
    pub scope_enum: RuleLevel,
    pub scope_case: RuleLevel,
    pub subject_empty: RuleLevel,
    pub subject_case: RuleLevel,
    pub subject_full_stop: RuleLevel,
    pub header_trim: RuleLevel,
    pub header_max_length_level: RuleLevel,
    pub body_leading_blank: RuleLevel,
    pub body_max_line_length_level: RuleLevel,
    pub footer_leading_blank: RuleLevel,
    pub footer_max_line_length_level: RuleLevel,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(|s| s.to_string()).collect(),
            header_max_length: DEFAULT_HEADER_MAX_LENGTH,
            body_max_line_length: DEFAULT_MAX_LINE_LENGTH,
            footer_max_line_length: DEFAULT_MAX_LINE_LENGTH,
            type_enum: RuleLevel::Error,
            type_empty: RuleLevel::Error,
            type_case: RuleLevel::Error,
            scope_enum: RuleLevel::Error,
            scope_case: RuleLevel::Error,
            subject_empty: RuleLevel::Error,
            subject_case: RuleLevel::Error,
            subject_full_stop: RuleLevel::Error,
            header_trim: RuleLevel::Error,
            header_max_length_level: RuleLevel::Error,
            body_leading_blank: RuleLevel::Warn,
            body_max_line_length_level: RuleLevel::Error,
            footer_leading_blank: RuleLevel::Warn,
            footer_max_line_length_level: RuleLevel::Error,
        }
    }
}
