// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Formwork.
//!
//! This module contains pure business logic. All I/O concerns are handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!   (plus serde for outward-facing summaries)
//!
// Public API - what the world sees
pub mod exclusion;
pub mod outcome;

// Re-exports for convenience
pub use exclusion::{ExclusionSet, Pattern};
pub use outcome::{CopyOutcome, EntryKind, PlannedEntry};
