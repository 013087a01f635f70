//! rig CLI - front-end build configuration resolver.
//!
//! Reads the build mode from `--mode` or `NODE_ENV`, discovers the project's
//! package metadata and secrets, and hands the resolved configuration to the
//! bundler as JSON.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `resolve` and `check` implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
