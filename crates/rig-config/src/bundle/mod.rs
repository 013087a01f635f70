//! Resolved build configuration handed to the bundler.

mod css;
pub(crate) mod helpers;
mod html;
mod plugin;
mod rules;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use css::ExtractCssOptions;
pub use html::HtmlOptions;
pub use plugin::{
    AnalyzerOptions, CleanOptions, CompressionOptions, DefineOptions, EnvironmentOptions,
    MinifyOptions, PluginKind, PluginSpec,
};
pub use rules::{
    DEPENDENCY_DIR_PATTERN, INLINE_ASSET_LIMIT, LoaderStep, RuleUse, TransformRule, default_rules,
};
pub use types::{AnalyzerMode, CompressionAlgorithm, DevtoolStrategy, EcmaVersion, SizeKind};

use crate::dev::DevServer;
use crate::error::ConfigError;
use crate::mode::BuildMode;
use crate::package::PackageMeta;

/// Where and under which name bundles are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    /// Bundle filename, `{name}-{version}.js`
    pub filename: String,

    /// Destination directory
    pub path: PathBuf,

    /// Base path assets are served from
    pub public_path: String,
}

impl OutputDescriptor {
    pub fn for_package(pkg: &PackageMeta, root: &Path) -> Self {
        Self {
            filename: format!("{}.js", pkg.artifact_stem()),
            path: helpers::output_dir(root),
            public_path: "/".to_string(),
        }
    }
}

/// Module transformation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<TransformRule>,
}

/// Fully resolved build configuration
///
/// Built once by [`crate::ConfigAssembler::assemble`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub mode: BuildMode,

    pub devtool: DevtoolStrategy,

    /// Entry modules, bundled in order
    pub entry: Vec<String>,

    pub module: ModuleOptions,

    pub output: OutputDescriptor,

    pub plugins: Vec<PluginSpec>,

    pub dev_server: DevServer,

    /// Collect per-module timing information
    pub profile: bool,
}

impl ResolvedConfig {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(serialize_error)
    }

    /// Pretty-printed JSON, as written by `rig resolve`
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(serialize_error)
    }

    /// Single-line JSON, as written by `rig resolve --compact`
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(serialize_error)
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&PluginSpec> {
        self.plugins.iter().find(|p| p.kind() == kind)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin(kind).is_some()
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(PluginSpec::kind).collect()
    }
}

fn serialize_error(e: serde_json::Error) -> ConfigError {
    ConfigError::InvalidValue {
        field: "config".to_string(),
        hint: Some(e.to_string()),
    }
}
