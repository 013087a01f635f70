use std::path::{Path, PathBuf};

/// HTML shell name used by development builds
pub(crate) const DEV_HTML_FILENAME: &str = "./index.html";

/// Output directory, relative to the project root
pub(crate) const OUTPUT_DIR: &str = "dist";

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn output_dir(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIR)
}
