use serde::{Deserialize, Serialize};

use crate::package::PackageMeta;

/// Stylesheet extraction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractCssOptions {
    /// Extracted stylesheet name
    pub filename: String,
}

impl ExtractCssOptions {
    /// `{name}-{version}.css`, independent of build mode
    pub fn for_package(pkg: &PackageMeta) -> Self {
        Self {
            filename: format!("{}.css", pkg.artifact_stem()),
        }
    }
}
