//! Resolve command implementation.
//!
//! Emits the resolved configuration as JSON for the bundler.

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::io::Write;
use tracing::info;

/// Execute the resolve command.
///
/// Writes JSON to `--output` when given, otherwise to stdout. Nothing is
/// written if assembly fails.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = utils::assemble(&args.project)?;

    let mut json = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };
    json.push('\n');

    match &args.output {
        Some(path) => {
            utils::write_file(path, &json)?;
            info!(path = %path.display(), mode = %config.mode, "wrote build configuration");
            ui::success(&format!("Wrote {} configuration to {}", config.mode, path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
