//! Local filesystem adapter using std::fs.
//!
//! ## Symlink policy
//!
//! Entries are classified through `std::fs::metadata`, which follows
//! symlinks: a link to a file is copied as its target's byte content and a
//! link to a directory is materialized as a real directory in the
//! destination. The destination never contains links back into the template
//! root. Broken links surface as `CopyIo`.

use std::path::Path;

use formwork_core::{
    application::ports::{DirEntry, Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let iter =
            std::fs::read_dir(path).map_err(|e| ScaffoldError::io(path, "read directory", &e))?;

        let mut entries = Vec::new();
        for entry in iter {
            let entry =
                entry.map_err(|e| ScaffoldError::io(path, "read directory entry", &e))?;

            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| ScaffoldError::CopyIo {
                    path: path.join(&name),
                    reason: "entry name is not valid UTF-8".into(),
                })?;

            // metadata() follows symlinks, so links are classified by target.
            let metadata = std::fs::metadata(entry.path())
                .map_err(|e| ScaffoldError::io(entry.path(), "read metadata", &e))?;

            entries.push(DirEntry {
                name,
                is_dir: metadata.is_dir(),
            });
        }
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, "create directory", &e))
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> ScaffoldResult<()> {
        // fs::copy reproduces byte content and the source's permission bits
        // (including the executable bit on Unix), and follows symlinks.
        std::fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| ScaffoldError::io(dst, "copy file", &e))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
