//! Logging infrastructure for the rig CLI.
//!
//! Structured logging on the `tracing` ecosystem. Logs go to stderr so the
//! resolved configuration on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use rig_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Resolving configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "rig=debug,rig_config=debug,rig_cli=debug";
const QUIET_FILTER: &str = "rig=error,rig_config=error,rig_cli=error";
const DEFAULT_FILTER: &str = "rig=info,rig_config=info,rig_cli=info";

/// Select the log filter from the global flags.
///
/// 1. `--verbose`: DEBUG for rig crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for rig crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. ANSI
/// styling follows the same decision as the status messages in [`crate::ui`].
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // only exercise filter construction.

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = build_filter(true, false);
        assert!(filter.to_string().contains("rig_config=debug"));
    }

    #[test]
    fn test_quiet_filter_is_errors_only() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("rig_cli=error"));
    }
}
