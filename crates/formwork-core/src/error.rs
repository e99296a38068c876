//! Unified error handling for Formwork Core.
//!
//! The failure taxonomy is deliberately small and exhaustively matchable:
//! a broken template root, a destination conflict, or an I/O failure during
//! the copy. Failures are values returned up through each component's call
//! boundary — never unwind-based control flow.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Root error type for Formwork Core operations.
///
/// All errors are:
/// - Cloneable (outcomes can be stored and re-reported)
/// - Categorizable (for CLI display and exit-code selection)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The bundled template root is missing or is not a directory.
    ///
    /// Fatal and reported before any destination mutation is attempted.
    #[error("template root not found or not a directory: {path}")]
    TemplateNotFound { path: PathBuf },

    /// The destination exists with content and overwrite was not requested.
    ///
    /// Detected by the pre-flight check, never mid-copy.
    #[error("destination '{path}' already contains files")]
    DestinationConflict { path: PathBuf },

    /// An individual create/copy failed during traversal.
    ///
    /// Fatal to the run; the destination is left in whatever partial state
    /// existed at the point of failure. Re-running after fixing the cause
    /// (optionally with overwrite) recovers cleanly.
    #[error("I/O failure at '{path}': {reason}")]
    CopyIo { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Build a [`ScaffoldError::CopyIo`] from a failed filesystem operation.
    pub fn io(path: impl AsRef<Path>, operation: &str, err: &std::io::Error) -> Self {
        Self::CopyIo {
            path: path.as_ref().to_path_buf(),
            reason: format!("failed to {operation}: {err}"),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No template tree at: {}", path.display()),
                "Reinstall formwork, or point at a template explicitly:".into(),
                "  formwork <target> --template-dir <DIR>".into(),
                "  FORMWORK_TEMPLATE_DIR=<DIR> formwork <target>".into(),
            ],
            Self::DestinationConflict { path } => vec![
                format!("The directory '{}' is not empty", path.display()),
                "Use --force to overwrite colliding files (destructive)".into(),
                "Or choose a different target directory".into(),
            ],
            Self::CopyIo { path, .. } => vec![
                format!("Failed while writing: {}", path.display()),
                "Check file permissions".into(),
                "Check available disk space".into(),
                "Re-run after fixing the cause; add --force if the destination is now partial".into(),
            ],
        }
    }

    /// Error category for CLI display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DestinationConflict { .. } => ErrorCategory::Conflict,
            Self::CopyIo { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The template source could not be resolved.
    NotFound,
    /// The destination refused the scaffold (user-resolvable).
    Conflict,
    /// System-level I/O failure.
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
