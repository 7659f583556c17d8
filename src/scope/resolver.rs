//! Scope discovery from the filesystem

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::env::ScopeEnv;
use super::set::ScopeSet;

/// Roots scanned when neither the config nor the environment names any
pub const DEFAULT_ROOTS: &[&str] = &["packages", "apps"];

/// Repository-level scopes that are not backed by a directory
pub const DEFAULT_EXTRA_SCOPES: &[&str] = &["repo", "workflows", "ci", "release", "docs", "tooling"];

/// Directory names that never become scopes, whatever root they live in
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".husky",
    ".dart_tool",
    "node_modules",
    "build",
    "coverage",
    "test_cache",
    ".idea",
    ".vscode",
    "ios",
    "android",
];

/// Whether a directory name is excluded by the built-in rules (hidden or well-known)
pub fn is_ignored_dir(name: &str) -> bool {
    name.starts_with('.') || IGNORE_DIRS.contains(&name)
}

/// Why a root contributed no scopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The path does not exist
    Missing,
    /// The path exists but is not a directory
    NotADirectory,
    /// The path could not be inspected or listed
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "missing"),
            SkipReason::NotADirectory => write!(f, "not a directory"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

/// Outcome of scanning a single root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RootScan {
    Scanned {
        root: String,
        path: PathBuf,
        /// Accepted child directory names, in filesystem order
        names: Vec<String>,
    },
    Skipped {
        root: String,
        path: PathBuf,
        reason: SkipReason,
    },
}

impl RootScan {
    pub fn root(&self) -> &str {
        match self {
            RootScan::Scanned { root, .. } | RootScan::Skipped { root, .. } => root,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RootScan::Scanned { path, .. } | RootScan::Skipped { path, .. } => path,
        }
    }

    /// Names contributed by this root (empty when skipped)
    pub fn names(&self) -> &[String] {
        match self {
            RootScan::Scanned { names, .. } => names,
            RootScan::Skipped { .. } => &[],
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RootScan::Skipped { .. })
    }
}

/// Full result of a resolution: per-root outcomes plus the final set
#[derive(Debug, Clone, Serialize)]
pub struct ScopeReport {
    pub base_dir: PathBuf,
    pub roots: Vec<RootScan>,
    pub extra: Vec<String>,
    pub scopes: ScopeSet,
}

/// Resolves the permitted commit scopes for a repository
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    roots: Vec<String>,
    extra: Vec<String>,
    /// Names ignored on top of [`IGNORE_DIRS`]
    ignore: HashSet<String>,
}

impl Default for ScopeResolver {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|s| s.to_string()).collect(),
            extra: DEFAULT_EXTRA_SCOPES.iter().map(|s| s.to_string()).collect(),
            ignore: HashSet::new(),
        }
    }
}

impl ScopeResolver {
    /// Create a resolver with the built-in roots and extra scopes
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root list
    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the baseline extra scopes
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra = extra.into_iter().map(Into::into).collect();
        self
    }

    /// Ignore additional directory names (the built-in ones always apply)
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    /// Apply environment overrides: roots are replaced, extra scopes appended
    pub fn with_env(mut self, env: &ScopeEnv) -> Self {
        if let Some(roots) = env.root_override() {
            debug!("Scope roots overridden from environment: {:?}", roots);
            self.roots = roots;
        }
        self.extra.extend(env.extra_scopes());
        self
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Resolve the scope set for `base_dir`
    pub fn resolve(&self, base_dir: &Path) -> ScopeSet {
        self.scan(base_dir).scopes
    }

    /// Resolve the scope set and keep the per-root outcomes
    pub fn scan(&self, base_dir: &Path) -> ScopeReport {
        let roots: Vec<RootScan> = self
            .roots
            .iter()
            .map(|root| self.scan_root(base_dir, root))
            .collect();

        let mut scopes = ScopeSet::new();
        for scan in &roots {
            scopes.extend(scan.names().iter().cloned());
        }
        scopes.extend(self.extra.iter().cloned());

        ScopeReport {
            base_dir: base_dir.to_path_buf(),
            roots,
            extra: self.extra.clone(),
            scopes,
        }
    }

    fn is_ignored(&self, name: &str) -> bool {
        is_ignored_dir(name) || self.ignore.contains(name)
    }

    /// List the child directories of a single root.
    ///
    /// Never fails: every error is turned into [`RootScan::Skipped`].
    fn scan_root(&self, base_dir: &Path, root: &str) -> RootScan {
        let path = base_dir.join(root);
        let skipped = |reason: SkipReason| {
            debug!("Skipping scope root {:?} ({}): {}", root, path.display(), reason);
            RootScan::Skipped {
                root: root.to_string(),
                path: path.clone(),
                reason,
            }
        };

        match std::fs::metadata(&path) {
            Ok(meta) if !meta.is_dir() => return skipped(SkipReason::NotADirectory),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return skipped(SkipReason::Missing);
            }
            Err(e) => return skipped(SkipReason::Unreadable(e.to_string())),
        }

        let entries = match std::fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => return skipped(SkipReason::Unreadable(e.to_string())),
        };

        let mut names = Vec::new();
        for entry in entries.flatten() {
            // file_type() does not follow symlinks
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non UTF-8 directory name in {}", path.display());
                continue;
            };
            if self.is_ignored(&name) {
                continue;
            }
            names.push(name);
        }

        debug!("Scope root {:?}: {} scopes", root, names.len());
        RootScan::Scanned {
            root: root.to_string(),
            path: path.clone(),
            names,
        }
    }
}

/// Resolve scopes with the built-in defaults and the given environment.
///
/// Directory names found under each root are merged with the extra scopes,
/// deduplicated and sorted. Filesystem problems never surface as errors.
pub fn resolve_scopes(base_dir: &Path, env: &ScopeEnv) -> ScopeSet {
    ScopeResolver::new().with_env(env).resolve(base_dir)
}
