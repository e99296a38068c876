//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the template root (fail-fast, before any destination mutation)
//! 2. Resolve the destination conflict policy (once, up front)
//! 3. Copy the template tree, consulting the exclusion matcher per entry
//!
//! It implements the driving port (incoming) and uses the driven
//! [`Filesystem`] port (outgoing).

use std::path::Path;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::ports::Filesystem,
    domain::{CopyOutcome, EntryKind, ExclusionSet, PlannedEntry},
    error::{ScaffoldError, ScaffoldResult},
};

/// Pre-flight classification of the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// Destination does not exist yet; it will be created.
    Fresh,
    /// Destination exists and is an empty directory.
    Empty,
    /// Destination exists with content; colliding paths will be overwritten.
    Overwrite,
}

/// Main scaffolding service.
///
/// Holds the injected filesystem adapter and the exclusion set; both the
/// template root and the destination are threaded through explicitly per
/// call — the service keeps no ambient path state.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    exclusions: ExclusionSet,
}

impl ScaffoldService {
    /// Create a service with the fixed default exclusion set.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self::with_exclusions(filesystem, ExclusionSet::default())
    }

    /// Create a service with a custom exclusion set.
    pub fn with_exclusions(filesystem: Box<dyn Filesystem>, exclusions: ExclusionSet) -> Self {
        Self {
            filesystem,
            exclusions,
        }
    }

    /// Scaffold the template tree into `destination`.
    ///
    /// This is the main use case. The conflict check runs exactly once,
    /// before any copy work, so a detectable conflict never leaves a
    /// half-scaffolded directory behind. A failure mid-copy aborts the run
    /// and leaves the destination in its partial state (no rollback).
    #[instrument(
        skip_all,
        fields(
            template = %template_root.display(),
            destination = %destination.display(),
            force = force
        )
    )]
    pub fn scaffold(
        &self,
        template_root: &Path,
        destination: &Path,
        force: bool,
    ) -> ScaffoldResult<CopyOutcome> {
        self.check_template_root(template_root)?;

        let state = self.check_destination(destination, force)?;
        debug!(?state, "destination pre-flight passed");

        let mut outcome = CopyOutcome::default();
        if state == DestinationState::Fresh {
            self.filesystem.create_dir_all(destination)?;
            outcome.record_directory();
        }

        self.copy_tree(template_root, destination, &mut outcome)?;

        info!(
            directories = outcome.directories_created,
            files = outcome.files_copied,
            overwritten = outcome.files_overwritten,
            "scaffold completed"
        );
        Ok(outcome)
    }

    /// Compute the copy plan without writing anything (dry runs).
    ///
    /// Returns every non-excluded entry of the template tree as a
    /// destination-relative path, parents before children.
    #[instrument(skip_all, fields(template = %template_root.display()))]
    pub fn plan(&self, template_root: &Path) -> ScaffoldResult<Vec<PlannedEntry>> {
        self.check_template_root(template_root)?;

        let mut entries = Vec::new();
        self.walk(template_root, Path::new(""), &mut |rel, is_dir| {
            entries.push(PlannedEntry {
                path: rel.to_path_buf(),
                kind: if is_dir {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            });
            Ok(())
        })?;
        Ok(entries)
    }

    // -------------------------------------------------------------------------
    // Pre-flight checks
    // -------------------------------------------------------------------------

    fn check_template_root(&self, root: &Path) -> ScaffoldResult<()> {
        if !self.filesystem.is_dir(root) {
            return Err(ScaffoldError::TemplateNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Conflict resolution, per the decision table:
    /// absent → create fresh; exists-empty → proceed; exists-non-empty
    /// without force → conflict; with force → overwrite colliding paths.
    /// A regular file at the destination path is always a conflict.
    fn check_destination(
        &self,
        destination: &Path,
        force: bool,
    ) -> ScaffoldResult<DestinationState> {
        if !self.filesystem.exists(destination) {
            return Ok(DestinationState::Fresh);
        }
        if !self.filesystem.is_dir(destination) {
            return Err(ScaffoldError::DestinationConflict {
                path: destination.to_path_buf(),
            });
        }
        if self.filesystem.read_dir(destination)?.is_empty() {
            return Ok(DestinationState::Empty);
        }
        if force {
            warn!(
                destination = %destination.display(),
                "destination not empty, colliding paths will be overwritten"
            );
            return Ok(DestinationState::Overwrite);
        }
        Err(ScaffoldError::DestinationConflict {
            path: destination.to_path_buf(),
        })
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    fn copy_tree(
        &self,
        template_root: &Path,
        destination: &Path,
        outcome: &mut CopyOutcome,
    ) -> ScaffoldResult<()> {
        self.walk(template_root, Path::new(""), &mut |rel, is_dir| {
            let dst = destination.join(rel);
            if is_dir {
                // Idempotent: an already-existing directory is not an error.
                if !self.filesystem.exists(&dst) {
                    self.filesystem.create_dir_all(&dst)?;
                    outcome.record_directory();
                }
            } else {
                let overwritten = self.filesystem.exists(&dst);
                self.filesystem.copy_file(&template_root.join(rel), &dst)?;
                outcome.record_file(overwritten);
            }
            Ok(())
        })
    }

    /// Depth-first traversal of the template tree with exclusion pruning.
    ///
    /// The exclusion check runs before recursing into a directory, so the
    /// copier never reads inside an excluded subtree. `visit` receives each
    /// surviving entry's destination-relative path and kind; a parent
    /// directory is always visited before anything inside it.
    fn walk(
        &self,
        dir: &Path,
        rel: &Path,
        visit: &mut dyn FnMut(&Path, bool) -> ScaffoldResult<()>,
    ) -> ScaffoldResult<()> {
        for entry in self.filesystem.read_dir(dir)? {
            if self.exclusions.is_excluded(&entry.name) {
                trace!(name = %entry.name, "excluded, pruning");
                continue;
            }

            let child_rel = rel.join(&entry.name);
            visit(&child_rel, entry.is_dir)?;

            if entry.is_dir {
                self.walk(&dir.join(&entry.name), &child_rel, visit)?;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem};
    use std::path::PathBuf;

    // ── helpers ───────────────────────────────────────────────────────────

    fn file(name: &str) -> DirEntry {
        DirEntry {
            name: name.into(),
            is_dir: false,
        }
    }

    fn dir(name: &str) -> DirEntry {
        DirEntry {
            name: name.into(),
            is_dir: true,
        }
    }

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs))
    }

    // ── template root pre-flight ──────────────────────────────────────────

    #[test]
    fn missing_template_root_is_fatal_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(false);
        // No other expectations: any create/copy attempt would panic the mock.

        let err = service(fs)
            .scaffold(Path::new("/tpl"), Path::new("/out"), false)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound { .. }));
    }

    #[test]
    fn plan_also_requires_a_template_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);

        let err = service(fs).plan(Path::new("/tpl")).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound { .. }));
    }

    // ── conflict resolution table ─────────────────────────────────────────

    #[test]
    fn absent_destination_is_fresh() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let state = service(fs)
            .check_destination(Path::new("/out"), false)
            .unwrap();
        assert_eq!(state, DestinationState::Fresh);
    }

    #[test]
    fn empty_destination_proceeds() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir().returning(|_| Ok(Vec::new()));

        let state = service(fs)
            .check_destination(Path::new("/out"), false)
            .unwrap();
        assert_eq!(state, DestinationState::Empty);
    }

    #[test]
    fn non_empty_destination_without_force_is_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir().returning(|_| Ok(vec![file("old.txt")]));

        let err = service(fs)
            .check_destination(Path::new("/out"), false)
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::DestinationConflict {
                path: PathBuf::from("/out")
            }
        );
    }

    #[test]
    fn non_empty_destination_with_force_overwrites() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_read_dir().returning(|_| Ok(vec![file("old.txt")]));

        let state = service(fs)
            .check_destination(Path::new("/out"), true)
            .unwrap();
        assert_eq!(state, DestinationState::Overwrite);
    }

    #[test]
    fn regular_file_at_destination_is_always_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);

        // Even with force: a file cannot become a directory.
        let err = service(fs)
            .check_destination(Path::new("/out"), true)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationConflict { .. }));
    }

    // ── copy behaviour ────────────────────────────────────────────────────

    #[test]
    fn fresh_scaffold_copies_structure_and_counts() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl"))
            .returning(|_| Ok(vec![dir("src"), file("README.md")]));
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl/src"))
            .returning(|_| Ok(vec![file("main.py")]));
        fs.expect_copy_file().times(2).returning(|_, _| Ok(()));

        let outcome = service(fs)
            .scaffold(Path::new("/tpl"), Path::new("/out"), false)
            .unwrap();

        // Destination root + src/.
        assert_eq!(outcome.directories_created, 2);
        assert_eq!(outcome.files_copied, 2);
        assert_eq!(outcome.files_overwritten, 0);
    }

    #[test]
    fn excluded_directory_is_pruned_not_descended() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // read_dir is expected for /tpl only; a call for /tpl/.git would
        // find no matching expectation and panic the mock.
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl"))
            .returning(|_| Ok(vec![dir(".git"), file("kept.txt")]));
        fs.expect_copy_file()
            .times(1)
            .withf(|src, _| src == Path::new("/tpl/kept.txt"))
            .returning(|_, _| Ok(()));

        let outcome = service(fs)
            .scaffold(Path::new("/tpl"), Path::new("/out"), false)
            .unwrap();
        assert_eq!(outcome.files_copied, 1);
        // Only the destination root; .git/ was never created.
        assert_eq!(outcome.directories_created, 1);
    }

    #[test]
    fn first_copy_failure_aborts_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl"))
            .returning(|_| Ok(vec![file("a.txt"), file("b.txt")]));
        // Exactly one copy attempt: the failure must stop the traversal
        // before b.txt is reached.
        fs.expect_copy_file().times(1).returning(|src, _| {
            Err(ScaffoldError::CopyIo {
                path: src.to_path_buf(),
                reason: "disk full".into(),
            })
        });

        let err = service(fs)
            .scaffold(Path::new("/tpl"), Path::new("/out"), false)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CopyIo { .. }));
    }

    #[test]
    fn force_overwrite_counts_collisions_separately() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(true);
        // Destination exists, is a dir, and has content.
        fs.expect_exists()
            .withf(|p| p == Path::new("/out"))
            .return_const(true);
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/out"))
            .return_const(true);
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/out"))
            .returning(|_| Ok(vec![file("README.md")]));
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl"))
            .returning(|_| Ok(vec![file("README.md"), file("new.txt")]));
        // README.md collides; new.txt does not.
        fs.expect_exists()
            .withf(|p| p == Path::new("/out/README.md"))
            .return_const(true);
        fs.expect_exists()
            .withf(|p| p == Path::new("/out/new.txt"))
            .return_const(false);
        fs.expect_copy_file().times(2).returning(|_, _| Ok(()));

        let outcome = service(fs)
            .scaffold(Path::new("/tpl"), Path::new("/out"), true)
            .unwrap();
        assert_eq!(outcome.files_overwritten, 1);
        assert_eq!(outcome.files_copied, 1);
        assert_eq!(outcome.directories_created, 0);
    }

    // ── plan ──────────────────────────────────────────────────────────────

    #[test]
    fn plan_lists_parents_before_children_and_prunes() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/tpl"))
            .return_const(true);
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl"))
            .returning(|_| Ok(vec![dir("app"), dir("node_modules"), file("README.md")]));
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/tpl/app"))
            .returning(|_| Ok(vec![file("main.py")]));

        let entries = service(fs).plan(Path::new("/tpl")).unwrap();

        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("app"),
                PathBuf::from("app/main.py"),
                PathBuf::from("README.md"),
            ]
        );
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].kind, EntryKind::File);
    }
}
