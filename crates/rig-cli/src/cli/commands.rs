use clap::{Args, Subcommand};
use rig_config::{BuildMode, SecretPolicy};
use std::path::PathBuf;

/// Available rig subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build configuration
    ///
    /// Assembles the configuration for the selected mode and writes it as
    /// JSON to stdout (or --output), ready for the bundler.
    Resolve(ResolveArgs),

    /// Validate the configuration and summarize it
    ///
    /// Runs the full assembly without emitting it and lists the mode,
    /// source map strategy and plugin order.
    Check(CheckArgs),
}

/// Options shared by every command that assembles a configuration
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing package.json
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Build mode: development or production
    ///
    /// Falls back to NODE_ENV. Unset or unrecognized values select
    /// development.
    #[arg(long, env = "NODE_ENV", value_name = "MODE")]
    pub mode: Option<String>,

    /// Inject empty strings for missing secrets instead of failing
    #[arg(long)]
    pub allow_missing_secrets: bool,
}

impl ProjectArgs {
    pub fn build_mode(&self) -> BuildMode {
        let mode = BuildMode::from_env_value(self.mode.as_deref());
        if let Some(raw) = self.mode.as_deref() {
            if BuildMode::recognize(raw).is_none() {
                tracing::debug!(value = raw, %mode, "unrecognized build mode");
                crate::ui::warning(&format!("Unrecognized build mode '{raw}', using {mode}"));
            }
        }
        mode
    }

    pub fn secret_policy(&self) -> SecretPolicy {
        if self.allow_missing_secrets {
            SecretPolicy::Substitute
        } else {
            SecretPolicy::FailFast
        }
    }
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
