//! Formwork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Formwork
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          formwork-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (ScaffoldService)             │
//! │   Conflict Pre-flight + Tree Copy       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Port (Trait)           │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   formwork-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │          TemplateLocator)               │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │     (ExclusionSet, CopyOutcome)         │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn demo(
//! #     filesystem: Box<dyn formwork_core::application::ports::Filesystem>,
//! # ) -> formwork_core::error::ScaffoldResult<()> {
//! use formwork_core::application::ScaffoldService;
//! use std::path::Path;
//!
//! // With an injected filesystem adapter:
//! let service = ScaffoldService::new(filesystem);
//! let outcome = service.scaffold(
//!     Path::new("/usr/share/formwork/template"),
//!     Path::new("./my-project"),
//!     false,
//! )?;
//! println!("copied {} files", outcome.files_copied);
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{DirEntry, Filesystem},
    };
    pub use crate::domain::{
        CopyOutcome, EntryKind, ExclusionSet, Pattern, PlannedEntry, exclusion::DEFAULT_EXCLUSIONS,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
