use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A single named processing step applied to matching files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl LoaderStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Map::new(),
        }
    }

    /// Attach options from a JSON object. Non-object values are ignored.
    pub fn with_options(mut self, options: Value) -> Self {
        if let Value::Object(map) = options {
            self.options = map;
        }
        self
    }
}

/// How matching files are processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RuleUse {
    /// Steps applied in order (the bundler runs them last-to-first)
    Chain { steps: Vec<LoaderStep> },
    /// Output is pulled into a standalone stylesheet by the CSS extraction
    /// plugin; `fallback` injects styles when extraction is unavailable
    Extract {
        fallback: LoaderStep,
        steps: Vec<LoaderStep>,
    },
}

impl RuleUse {
    /// Every step this rule can run, fallback included
    pub fn steps(&self) -> impl Iterator<Item = &LoaderStep> {
        let (fallback, steps) = match self {
            Self::Chain { steps } => (None, steps),
            Self::Extract { fallback, steps } => (Some(fallback), steps),
        };
        fallback.into_iter().chain(steps.iter())
    }
}

/// File-pattern match routed through a sequence of processing steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRule {
    /// Regex source matched against module paths
    pub test: String,

    #[serde(default)]
    pub case_insensitive: bool,

    /// Regex source for paths the rule skips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "use")]
    pub rule_use: RuleUse,
}

impl TransformRule {
    pub fn chain(test: impl Into<String>, steps: Vec<LoaderStep>) -> Self {
        Self {
            test: test.into(),
            case_insensitive: false,
            exclude: None,
            rule_use: RuleUse::Chain { steps },
        }
    }

    pub fn extract(test: impl Into<String>, fallback: LoaderStep, steps: Vec<LoaderStep>) -> Self {
        Self {
            test: test.into(),
            case_insensitive: false,
            exclude: None,
            rule_use: RuleUse::Extract { fallback, steps },
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn excluding(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    /// The `test` pattern with its flags folded in, ready for `regex::Regex::new`
    pub fn test_pattern(&self) -> String {
        if self.case_insensitive {
            format!("(?i){}", self.test)
        } else {
            self.test.clone()
        }
    }
}

/// Assets below this size (bytes) are inlined as data URLs
pub const INLINE_ASSET_LIMIT: u64 = 100_000;

/// Dependency directory never run through the syntax transform
pub const DEPENDENCY_DIR_PATTERN: &str = "node_modules";

/// The static, mode-independent transform rules
pub fn default_rules() -> Vec<TransformRule> {
    vec![
        // Markup-with-logic sources
        TransformRule::chain(
            r"\.(js|jsx)$",
            vec![LoaderStep::new("babel-loader").with_options(json!({
                "cacheDirectory": true,
                "presets": ["env", "react", "stage-2"],
            }))],
        )
        .case_insensitive()
        .excluding(DEPENDENCY_DIR_PATTERN),
        // Plain stylesheets
        TransformRule::chain(
            r"\.css$",
            vec![LoaderStep::new("style-loader"), LoaderStep::new("css-loader")],
        ),
        // Preprocessed stylesheets
        TransformRule::extract(
            r"\.scss$",
            LoaderStep::new("style-loader"),
            vec![
                LoaderStep::new("css-loader"),
                LoaderStep::new("resolve-url-loader"),
                LoaderStep::new("sass-loader").with_options(json!({ "sourceMap": true })),
            ],
        ),
        // Binary assets
        TransformRule::chain(
            r"\.(png|jpe?g|woff|woff2|eot|ttf|svg)$",
            vec![LoaderStep::new("url-loader").with_options(json!({ "limit": INLINE_ASSET_LIMIT }))],
        )
        .case_insensitive(),
    ]
}
