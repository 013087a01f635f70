//! Command-line interface definition for rig.
//!
//! # Command Structure
//!
//! - `rig resolve` - Print the resolved build configuration as JSON
//! - `rig check` - Assemble, validate and summarize the configuration

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ProjectArgs, ResolveArgs};

/// rig - front-end build configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Resolve front-end build configuration for the bundler",
    long_about = "rig assembles the bundler configuration for a front-end project.\n\
                  The build mode selects source maps, output names and the plugin list;\n\
                  package metadata and secrets are discovered from the project root."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
