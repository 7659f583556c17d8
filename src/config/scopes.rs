//! Scope discovery configuration

use serde::{Deserialize, Serialize};

use crate::scope::{ScopeEnv, ScopeResolver, DEFAULT_EXTRA_SCOPES, DEFAULT_ROOTS};

/// `[scopes]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesConfig {
    /// Directories (relative to the base directory) whose children become scopes
    pub roots: Vec<String>,

    /// Scopes that are not backed by a directory
    pub extra: Vec<String>,

    /// Directory names to skip in addition to the built-in ignore list
    pub ignore: Vec<String>,
}

impl Default for ScopesConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|s| s.to_string()).collect(),
            extra: DEFAULT_EXTRA_SCOPES.iter().map(|s| s.to_string()).collect(),
            ignore: Vec::new(),
        }
    }
}

impl ScopesConfig {
    /// Build a resolver from this section, with environment overrides applied on top
    pub fn resolver(&self, env: &ScopeEnv) -> ScopeResolver {
        ScopeResolver::new()
            .with_roots(self.roots.iter().cloned())
            .with_extra(self.extra.iter().cloned())
            .with_ignored(self.ignore.iter().cloned())
            .with_env(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config_roots() {
        let config = ScopesConfig {
            roots: vec!["crates".to_string()],
            ..Default::default()
        };

        let resolver = config.resolver(&ScopeEnv::default().with_roots("libs"));

        assert_eq!(resolver.roots(), &["libs".to_string()]);
    }

    #[test]
    fn test_env_scopes_append_to_config_extra() {
        let config = ScopesConfig {
            extra: vec!["repo".to_string()],
            ..Default::default()
        };

        let resolver = config.resolver(&ScopeEnv::default().with_scopes("infra"));

        assert_eq!(resolver.extra(), &["repo".to_string(), "infra".to_string()]);
    }
}
