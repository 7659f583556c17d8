//! Commit scope resolution
//!
//! Scopes come from two places:
//! 1. Child directories of the configured roots (`packages/`, `apps/` by default)
//! 2. Extra scopes that are not backed by a directory (`repo`, `ci`, ...)
//!
//! Both lists can be extended from the environment:
//! - `COMMIT_SCOPE_ROOTS` replaces the root list
//! - `COMMIT_SCOPES` appends to the extra scopes
//!
//! Scanning never fails. A root that is missing or unreadable contributes
//! nothing; the outcome is still visible through [`RootScan`].

mod env;
mod resolver;
mod set;

pub use env::{parse_list, ScopeEnv, ENV_EXTRA_SCOPES, ENV_SCOPE_ROOTS};
pub use resolver::{
    is_ignored_dir, resolve_scopes, RootScan, ScopeReport, ScopeResolver, SkipReason,
    DEFAULT_EXTRA_SCOPES, DEFAULT_ROOTS, IGNORE_DIRS,
};
pub use set::ScopeSet;
