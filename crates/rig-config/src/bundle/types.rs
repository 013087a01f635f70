use serde::{Deserialize, Serialize};

/// Source map strategy handed to the bundler's `devtool` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevtoolStrategy {
    /// Fast, low-fidelity maps evaluated per module
    CheapModuleEvalSourceMap,
    /// Full external .map files
    SourceMap,
}

impl DevtoolStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheapModuleEvalSourceMap => "cheap-module-eval-source-map",
            Self::SourceMap => "source-map",
        }
    }
}

/// ECMAScript language level targeted by the minifier's compressor
///
/// Serialized as the edition number the compressor expects (`5`, `6`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum EcmaVersion {
    /// ECMAScript 5
    ES5,
    /// ECMAScript 2015 (ES6)
    ES2015,
    /// ECMAScript 2016
    ES2016,
    /// ECMAScript 2017
    ES2017,
}

impl From<EcmaVersion> for u8 {
    fn from(version: EcmaVersion) -> Self {
        match version {
            EcmaVersion::ES5 => 5,
            EcmaVersion::ES2015 => 6,
            EcmaVersion::ES2016 => 7,
            EcmaVersion::ES2017 => 8,
        }
    }
}

impl TryFrom<u8> for EcmaVersion {
    type Error = String;

    fn try_from(edition: u8) -> Result<Self, Self::Error> {
        match edition {
            5 => Ok(Self::ES5),
            6 => Ok(Self::ES2015),
            7 => Ok(Self::ES2016),
            8 => Ok(Self::ES2017),
            other => Err(format!("unsupported ecma edition {other}")),
        }
    }
}

/// How the bundle analyzer publishes its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    /// Write a standalone HTML report next to the bundle
    #[default]
    Static,
    /// Serve the report from a local HTTP server
    Server,
    /// Only emit the stats JSON
    Json,
    /// Disable the report
    Disabled,
}

/// Which module size the analyzer shows by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKind {
    Stat,
    Parsed,
    #[default]
    Gzip,
}

/// Compression algorithm for pre-compressed assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    #[default]
    Gzip,
    Deflate,
    #[serde(rename = "brotliCompress")]
    Brotli,
}
