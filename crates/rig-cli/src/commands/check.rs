//! Check command implementation.
//!
//! Assembles and validates the configuration without emitting it.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use rig_config::{PluginSpec, ResolvedConfig};

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::assemble(&args.project)?;

    for line in summary(&config) {
        ui::info(&line);
    }

    ui::success("Configuration is valid!");
    Ok(())
}

/// Human-readable lines describing a resolved configuration
pub(crate) fn summary(config: &ResolvedConfig) -> Vec<String> {
    let mut lines = vec![
        format!("mode: {}", config.mode),
        format!("devtool: {}", config.devtool.as_str()),
        format!("output: {}", config.output.path.join(&config.output.filename).display()),
        format!("dev server port: {}", config.dev_server.port),
        format!("rules: {}", config.module.rules.len()),
        "plugins:".to_string(),
    ];

    lines.extend(
        config
            .plugins
            .iter()
            .enumerate()
            .map(|(i, plugin)| format!("  {}. {}", i + 1, describe(plugin))),
    );
    lines
}

fn describe(plugin: &PluginSpec) -> String {
    match plugin {
        PluginSpec::Html(html) => format!("{} ({})", plugin.name(), html.filename),
        PluginSpec::ExtractCss(css) => format!("{} ({})", plugin.name(), css.filename),
        PluginSpec::BundleAnalyzer(analyzer) if analyzer.open_analyzer => {
            format!("{} (opens report)", plugin.name())
        }
        // Secret values stay out of terminal output
        PluginSpec::Define(define) => format!(
            "{} ({} definitions)",
            plugin.name(),
            define.definitions.len()
        ),
        _ => plugin.name().to_string(),
    }
}
