//! Bundled template root resolution.
//!
//! The template tree ships with the tool, so its location depends on how the
//! binary was installed. The locator resolves it once per invocation and the
//! result is threaded explicitly into the scaffold service — there is no
//! ambient global.
//!
//! # Resolution order (highest priority first)
//!
//! 1. An explicit override (the `--template-dir` flag).
//! 2. The `FORMWORK_TEMPLATE_DIR` environment variable (testing/development).
//! 3. `<exe dir>/../share/formwork/template` — installed layout.
//! 4. `<exe dir>/template` — archive-extracted layout.
//! 5. The `template/` directory of the development checkout.
//!
//! An explicit override (1 or 2) that does not point at a directory is an
//! immediate `TemplateNotFound` — it never falls through to the bundled
//! locations, so a typo cannot silently scaffold the wrong tree.

use std::path::{Path, PathBuf};

use tracing::debug;

use formwork_core::error::{ScaffoldError, ScaffoldResult};

/// Environment variable overriding the bundled template root.
pub const TEMPLATE_DIR_ENV: &str = "FORMWORK_TEMPLATE_DIR";

/// Resolves the absolute path of the bundled template root.
#[derive(Debug, Clone, Default)]
pub struct TemplateLocator {
    override_dir: Option<PathBuf>,
}

impl TemplateLocator {
    /// Locator using the standard resolution order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator with an explicit override that wins over everything else.
    pub fn with_override(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Resolve the template root, verifying it exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] when the override (if
    /// any) is not a directory, or when none of the bundled candidate
    /// locations exists.
    pub fn resolve(&self) -> ScaffoldResult<PathBuf> {
        if let Some(dir) = &self.override_dir {
            debug!(dir = %dir.display(), "using explicit template override");
            return Self::validate(dir.clone());
        }

        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            if !dir.is_empty() {
                debug!(dir = %dir, "using {TEMPLATE_DIR_ENV} template override");
                return Self::validate(PathBuf::from(dir));
            }
        }

        let candidates = Self::bundled_candidates();
        for candidate in &candidates {
            if candidate.is_dir() {
                debug!(dir = %candidate.display(), "resolved bundled template root");
                return Ok(candidate.clone());
            }
            debug!(dir = %candidate.display(), "candidate not present");
        }

        Err(ScaffoldError::TemplateNotFound {
            path: candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from("template")),
        })
    }

    /// Candidate locations of the bundled template, in priority order.
    fn bundled_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                candidates.push(exe_dir.join("../share/formwork/template"));
                candidates.push(exe_dir.join("template"));
            }
        }

        // Development checkout: this crate lives at crates/formwork-adapters,
        // the template tree at the workspace root.
        candidates.push(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../..")
                .join("template"),
        );

        candidates
    }

    fn validate(path: PathBuf) -> ScaffoldResult<PathBuf> {
        if path.is_dir() {
            Ok(path)
        } else {
            Err(ScaffoldError::TemplateNotFound { path })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
