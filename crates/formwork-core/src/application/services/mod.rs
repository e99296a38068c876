//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "scaffold the bundled template into a directory".

pub mod scaffold_service;

pub use scaffold_service::{DestinationState, ScaffoldService};
