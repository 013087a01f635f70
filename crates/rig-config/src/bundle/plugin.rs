use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::bundle::css::ExtractCssOptions;
use crate::bundle::helpers::default_true;
use crate::bundle::html::HtmlOptions;
use crate::bundle::types::{AnalyzerMode, CompressionAlgorithm, EcmaVersion, SizeKind};

/// A bundler plugin together with its configuration payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginSpec {
    Clean(CleanOptions),
    Html(HtmlOptions),
    BundleAnalyzer(AnalyzerOptions),
    Environment(EnvironmentOptions),
    ExtractCss(ExtractCssOptions),
    Compression(CompressionOptions),
    Minify(MinifyOptions),
    Define(DefineOptions),
}

/// Plugin identity without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Clean,
    Html,
    BundleAnalyzer,
    Environment,
    ExtractCss,
    Compression,
    Minify,
    Define,
}

impl PluginKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Html => "html",
            Self::BundleAnalyzer => "bundle-analyzer",
            Self::Environment => "environment",
            Self::ExtractCss => "extract-css",
            Self::Compression => "compression",
            Self::Minify => "minify",
            Self::Define => "define",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PluginSpec {
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Clean(_) => PluginKind::Clean,
            Self::Html(_) => PluginKind::Html,
            Self::BundleAnalyzer(_) => PluginKind::BundleAnalyzer,
            Self::Environment(_) => PluginKind::Environment,
            Self::ExtractCss(_) => PluginKind::ExtractCss,
            Self::Compression(_) => PluginKind::Compression,
            Self::Minify(_) => PluginKind::Minify,
            Self::Define(_) => PluginKind::Define,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Removes stale build output before a build starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Paths to remove, relative to `root`
    pub paths: Vec<PathBuf>,

    pub root: PathBuf,

    #[serde(default = "default_true")]
    pub verbose: bool,
}

/// Static bundle-composition report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerOptions {
    #[serde(default)]
    pub analyzer_mode: AnalyzerMode,

    #[serde(default)]
    pub default_sizes: SizeKind,

    /// Open the report in a browser once written
    #[serde(default)]
    pub open_analyzer: bool,
}

/// Process environment variables exposed to application code, with defaults
/// for variables unset at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentOptions {
    pub defaults: IndexMap<String, String>,
}

/// Pre-compressed copies of emitted assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionOptions {
    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    /// Only assets larger than this (bytes) are compressed
    #[serde(default)]
    pub threshold: u64,

    /// Only keep results that compress better than this ratio
    pub min_ratio: f64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            algorithm: CompressionAlgorithm::Gzip,
            threshold: 0,
            min_ratio: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    /// Minify chunks on multiple workers
    pub parallel: bool,

    /// Emit source maps for minified output
    pub source_map: bool,

    pub compress: bool,

    pub ecma: EcmaVersion,
}

/// Compile-time replacements. Values are JSON literals spliced into the
/// source verbatim, so strings carry their own quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefineOptions {
    pub definitions: IndexMap<String, String>,
}

impl DefineOptions {
    /// Define `process.env.{name}` as the string literal `value`
    pub fn insert_env(&mut self, name: &str, value: &str) -> serde_json::Result<()> {
        let literal = serde_json::to_string(value)?;
        self.definitions
            .insert(format!("process.env.{name}"), literal);
        Ok(())
    }

    pub fn get_env(&self, name: &str) -> Option<&str> {
        self.definitions
            .get(&format!("process.env.{name}"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn define_values_are_json_literals() {
        let mut define = DefineOptions::default();
        define.insert_env("CAPTCHA_SITE_KEY", "a\"b").unwrap();
        assert_eq!(define.get_env("CAPTCHA_SITE_KEY"), Some(r#""a\"b""#));
    }

    #[test]
    fn plugin_specs_are_adjacently_tagged() {
        let spec = PluginSpec::Minify(MinifyOptions {
            parallel: true,
            source_map: true,
            compress: true,
            ecma: EcmaVersion::ES2015,
        });
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "plugin": "minify",
                "options": {
                    "parallel": true,
                    "sourceMap": true,
                    "compress": true,
                    "ecma": 6
                }
            })
        );
        assert_eq!(spec.name(), "minify");
    }

    #[test]
    fn analyzer_defaults_report_gzip_sizes() {
        let value = json!({ "openAnalyzer": true });
        let options: AnalyzerOptions = serde_json::from_value(value).unwrap();
        assert_eq!(options.analyzer_mode, AnalyzerMode::Static);
        assert_eq!(options.default_sizes, SizeKind::Gzip);
        assert!(options.open_analyzer);
    }
}
