//! scopelint - conventional commit linting
//!
//! The permitted commit scopes are not hand-maintained. They are discovered
//! from the repository layout: every directory below a scope root
//! (`packages/`, `apps/` by default) becomes a scope, together with a few
//! repository-level scopes such as `repo`, `ci` and `docs`.
//!
//! ```no_run
//! use std::path::Path;
//! use scopelint::scope::{resolve_scopes, ScopeEnv};
//!
//! let scopes = resolve_scopes(Path::new("."), &ScopeEnv::from_process());
//! for scope in scopes.iter() {
//!     println!("{scope}");
//! }
//! ```
//!
//! The resolved [`scope::ScopeSet`] feeds the [`lint::Linter`], which checks
//! commit headers (`type(scope): subject`) against the configured rules.

pub mod config;
pub mod git;
pub mod lint;
pub mod scope;

pub use config::Config;
pub use lint::{CommitMessage, LintReport, Linter};
pub use scope::{resolve_scopes, ScopeEnv, ScopeResolver, ScopeSet};
