//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `formwork-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - [`Filesystem`]: all filesystem access of the scaffold use case
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer, implemented by services)

use std::path::Path;

use crate::error::ScaffoldResult;

/// One immediate child of a directory, as reported by
/// [`Filesystem::read_dir`].
///
/// Names are plain UTF-8 basenames; adapters reject non-UTF-8 entries with a
/// `CopyIo` error rather than mangling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Basename of the entry (no path separators).
    pub name: String,
    /// `true` for directories (symlinks are classified by their target).
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `formwork_adapters::filesystem::LocalFilesystem` (production)
/// - `formwork_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The service never touches `std::fs` directly; every read and write of
///   the scaffold use case flows through this trait.
/// - `copy_file` must reproduce byte content exactly and preserve the
///   source's permission bits where the platform supports them.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>>;

    /// Create a directory and all parent directories (idempotent).
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Copy a file byte-for-byte, preserving permission bits.
    ///
    /// Replaces `dst` if it already exists.
    fn copy_file(&self, src: &Path, dst: &Path) -> ScaffoldResult<()>;
}
