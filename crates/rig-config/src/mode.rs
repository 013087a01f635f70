//! Build mode selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::DevtoolStrategy;

/// Execution mode governing every conditional configuration choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast rebuilds, cheap source maps, secrets injected (default)
    #[default]
    Development,
    /// Compressed, minified output with full source maps
    Production,
}

impl BuildMode {
    /// Match a mode name exactly. Returns `None` for anything else.
    pub fn recognize(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            _ => None,
        }
    }

    /// Resolve a mode from an optional raw environment value.
    ///
    /// Unset, empty and unrecognized values all select `Development`.
    ///
    /// # Example
    ///
    /// ```
    /// use rig_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::from_env_value(Some("production")), BuildMode::Production);
    /// assert_eq!(BuildMode::from_env_value(Some("staging")), BuildMode::Development);
    /// assert_eq!(BuildMode::from_env_value(None), BuildMode::Development);
    /// ```
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.and_then(Self::recognize).unwrap_or_default()
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Source map strategy for this mode
    pub fn devtool(self) -> DevtoolStrategy {
        select_devtool_strategy(self)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cheap eval-based maps for development, full external maps otherwise.
pub fn select_devtool_strategy(mode: BuildMode) -> DevtoolStrategy {
    match mode {
        BuildMode::Development => DevtoolStrategy::CheapModuleEvalSourceMap,
        BuildMode::Production => DevtoolStrategy::SourceMap,
    }
}
