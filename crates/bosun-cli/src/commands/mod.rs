//! Command implementations for the Bosun CLI.
//!
//! - [`plan`] - Assemble the deploy plan for a build target
//! - [`check`] - Validate configuration and project files
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod check;
pub mod plan;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
