//! Application layer for Formwork.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DestinationState, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{DirEntry, Filesystem};
