//! Shared utilities for command implementations.

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};
use rig_config::{ProjectDiscovery, ResolvedConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Discover the project and assemble its configuration.
///
/// The build mode comes from the parsed arguments; nothing below this point
/// reads the process environment for it.
pub(crate) fn assemble(project: &ProjectArgs) -> Result<ResolvedConfig> {
    let mode = project.build_mode();
    debug!(root = %project.root.display(), %mode, "resolving configuration");

    if !project.root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "project root is not a directory: {}",
            project.root.display()
        )));
    }

    let config = ProjectDiscovery::new(&project.root)
        .with_secret_policy(project.secret_policy())
        .assembler(mode)?
        .assemble()?;

    Ok(config)
}

/// Write `contents` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    };

    write().map_err(|source| CliError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
