//! Environment overrides for scope resolution

/// Comma-separated list replacing the default roots
pub const ENV_SCOPE_ROOTS: &str = "COMMIT_SCOPE_ROOTS";

/// Comma-separated list appended to the extra scopes
pub const ENV_EXTRA_SCOPES: &str = "COMMIT_SCOPES";

/// Snapshot of the environment variables that influence scope resolution.
///
/// Captured once at start-up and passed down explicitly, so resolution is a
/// function of its arguments and tests never have to touch the process
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeEnv {
    /// Raw value of `COMMIT_SCOPE_ROOTS`
    pub roots: Option<String>,
    /// Raw value of `COMMIT_SCOPES`
    pub scopes: Option<String>,
}

impl ScopeEnv {
    /// Read both variables from the process environment
    pub fn from_process() -> Self {
        Self {
            roots: std::env::var(ENV_SCOPE_ROOTS).ok(),
            scopes: std::env::var(ENV_EXTRA_SCOPES).ok(),
        }
    }

    pub fn with_roots(mut self, roots: impl Into<String>) -> Self {
        self.roots = Some(roots.into());
        self
    }

    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    /// Root override, if one is set.
    ///
    /// An unset or empty variable means "use the defaults". A non-empty value
    /// replaces them entirely, even when it parses to zero roots (e.g. `","`).
    pub fn root_override(&self) -> Option<Vec<String>> {
        self.roots
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(parse_list)
    }

    /// Extra scopes from the environment (empty when unset)
    pub fn extra_scopes(&self) -> Vec<String> {
        self.scopes.as_deref().map(parse_list).unwrap_or_default()
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// Order and duplicates are preserved; deduplication happens in [`super::ScopeSet`].
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
