use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::DEV_HTML_FILENAME;
use crate::mode::BuildMode;
use crate::package::PackageMeta;

/// HTML shell generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Output filename for the generated document
    pub filename: String,

    /// Template the shell is rendered from
    pub template: PathBuf,

    /// Page title
    pub title: String,
}

impl HtmlOptions {
    /// Shell for `pkg` under `mode`, rendered from `{root}/index.html`.
    ///
    /// Development serves a fixed `./index.html`; production names the
    /// document after the package so it can be deployed next to older builds.
    pub fn for_mode(mode: BuildMode, pkg: &PackageMeta, root: &Path) -> Self {
        let filename = match mode {
            BuildMode::Development => DEV_HTML_FILENAME.to_string(),
            BuildMode::Production => format!("{}.html", pkg.artifact_stem()),
        };

        Self {
            filename,
            template: root.join("index.html"),
            title: pkg.name.clone(),
        }
    }
}
