//! Configuration loading and management

mod io;
mod rules;
mod scopes;
mod template;

pub use io::{write_file_atomic, ResolvedConfig, CONFIG_FILE_NAMES};
pub use rules::{
    RuleLevel, RulesConfig, DEFAULT_HEADER_MAX_LENGTH, DEFAULT_MAX_LINE_LENGTH, DEFAULT_TYPES,
};
pub use scopes::ScopesConfig;
pub use template::DEFAULT_CONFIG;

use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scope discovery
    #[serde(default)]
    pub scopes: ScopesConfig,

    /// Lint rules
    #[serde(default)]
    pub rules: RulesConfig,
}
