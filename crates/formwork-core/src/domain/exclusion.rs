//! Exclusion matching for transient/generated paths.
//!
//! The matcher is a pure predicate over single path-segment names (a
//! directory or file basename, never a full path). It is consulted once per
//! tree entry during traversal; when it matches a directory the copier must
//! not descend into it at all — excluded trees may contain unreadable or
//! irrelevant files that must never be touched.

/// Default exclusion patterns, in match order.
///
/// Covers version-control metadata, installed-dependency directories,
/// bytecode caches, local environment/secrets files, and build output.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".env",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    "dist",
    "build",
    ".DS_Store",
    "*.pyc",
];

/// A single exclusion rule applied to a path basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches the basename exactly (e.g. `node_modules`).
    Exact(String),
    /// Matches any basename ending with the suffix (parsed from `*.ext`).
    Suffix(String),
}

impl Pattern {
    /// Parse a raw pattern string.
    ///
    /// A leading `*` produces a [`Pattern::Suffix`] (`"*.pyc"` matches any
    /// name ending in `.pyc`); anything else is an exact basename match.
    /// No recursive path-pattern language exists — segments only.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('*') {
            Some(suffix) => Self::Suffix(suffix.to_string()),
            None => Self::Exact(raw.to_string()),
        }
    }

    /// Whether `name` (a single basename) matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => name == exact,
            Self::Suffix(suffix) => name.ends_with(suffix.as_str()),
        }
    }
}

/// An ordered set of [`Pattern`]s denoting entries never copied, regardless
/// of their depth in the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl Default for ExclusionSet {
    /// The fixed set shipped with the tool — see [`DEFAULT_EXCLUSIONS`].
    fn default() -> Self {
        Self::from_patterns(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

impl ExclusionSet {
    /// An empty set (copies everything). Useful in tests.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Build a set from raw pattern strings, preserving order.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| Pattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// Whether a path basename is excluded. Pure; no side effects.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` if the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
