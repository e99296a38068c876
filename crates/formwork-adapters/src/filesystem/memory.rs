//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use formwork_core::{
    application::ports::{DirEntry, Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can keep a handle for
/// assertions while the service owns a boxed clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding helpers (testing only) ────────────────────────────────────

    /// Add a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Add an (empty) directory and its parents.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.into().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Mark a file executable.
    pub fn set_executable(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().executables.insert(path.into());
    }

    // ── Inspection helpers (testing only) ─────────────────────────────────

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.inner.read().ok()?.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner.read().unwrap().executables.contains(path)
    }

    /// List all file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    fn lock_err(path: &Path) -> ScaffoldError {
        ScaffoldError::CopyIo {
            path: path.to_path_buf(),
            reason: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| Self::lock_err(path))?;

        if !inner.directories.contains(path) {
            return Err(ScaffoldError::CopyIo {
                path: path.to_path_buf(),
                reason: "failed to read directory: no such directory".into(),
            });
        }

        // BTreeSet gives deterministic ordering, which the service does not
        // rely on but which keeps test assertions stable.
        let mut names: BTreeSet<(String, bool)> = BTreeSet::new();
        for dir in &inner.directories {
            if dir.parent() == Some(path) {
                if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
                    names.insert((name.to_string(), true));
                }
            }
        }
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                if let Some(name) = file.file_name().and_then(|n| n.to_str()) {
                    names.insert((name.to_string(), false));
                }
            }
        }

        Ok(names
            .into_iter()
            .map(|(name, is_dir)| DirEntry { name, is_dir })
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err(src))?;

        let content = inner
            .files
            .get(src)
            .cloned()
            .ok_or_else(|| ScaffoldError::CopyIo {
                path: src.to_path_buf(),
                reason: "failed to copy file: no such file".into(),
            })?;

        inner.files.insert(dst.to_path_buf(), content);

        // Permission bits travel with the copy.
        if inner.executables.contains(src) {
            inner.executables.insert(dst.to_path_buf());
        } else {
            inner.executables.remove(dst);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
