//! Command handlers.
//!
//! Each module translates parsed CLI arguments into core service calls and
//! displays the results.  No business logic lives here.

pub mod completions;
pub mod scaffold;
