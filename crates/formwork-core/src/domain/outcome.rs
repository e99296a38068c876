//! Run summaries: what a scaffold produced, or what it would produce.

use std::path::PathBuf;

use serde::Serialize;

/// Summary of a successful scaffold run, returned to the CLI shell for
/// reporting. Failures are carried separately as `ScaffoldError`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyOutcome {
    /// Directories newly created under the destination (the destination root
    /// itself included when it did not pre-exist).
    pub directories_created: usize,
    /// Files copied to paths that did not previously exist.
    pub files_copied: usize,
    /// Files replaced at colliding paths (only possible in overwrite mode).
    pub files_overwritten: usize,
}

impl CopyOutcome {
    pub(crate) fn record_directory(&mut self) {
        self.directories_created += 1;
    }

    pub(crate) fn record_file(&mut self, overwritten: bool) {
        if overwritten {
            self.files_overwritten += 1;
        } else {
            self.files_copied += 1;
        }
    }

    /// Total entries written in this run.
    pub fn total_entries(&self) -> usize {
        self.directories_created + self.files_copied + self.files_overwritten
    }
}

/// Kind of a planned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of the copy plan, as exposed by dry runs.
///
/// The plan is computed and consumed in a single traversal; it is never
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    /// Path relative to the destination root.
    pub path: PathBuf,
    pub kind: EntryKind,
}
