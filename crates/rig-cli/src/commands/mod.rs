//! Command implementations for the rig CLI.
//!
//! - [`resolve`] - Emit the resolved configuration as JSON
//! - [`check`] - Validate and summarize the configuration

pub mod check;
pub mod resolve;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
