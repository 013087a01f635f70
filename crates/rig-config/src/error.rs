//! Error types for configuration assembly and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Project discovery errors
    #[error("config not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("invalid config value for '{}'{}", .field, .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid package metadata: {0}")]
    InvalidPackage(String),

    // Assembly errors
    #[error("missing secret '{name}' required for development builds")]
    MissingSecret { name: &'static str },

    #[error("invalid transform rule '{test}': {message}")]
    InvalidRule { test: String, message: String },

    #[error("invalid options for plugin '{plugin}': {message}")]
    InvalidPlugin { plugin: String, message: String },

    // Schema validation errors
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Optional remediation hint attached to the error
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::MissingSecret { .. } => {
                Some("Set it in config.json, rig.toml or the environment, or allow missing secrets")
            }
            Self::NotFound { .. } => Some("Run rig from the project root or pass --root"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_includes_hint_in_message() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: Some("expected a number".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'port': expected a number"
        );

        let bare = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid config value for 'port'");
    }

    #[test]
    fn missing_secret_has_hint() {
        let err = ConfigError::MissingSecret {
            name: "CAPTCHA_SITE_KEY",
        };
        assert!(err.to_string().contains("CAPTCHA_SITE_KEY"));
        assert!(err.hint().is_some());
    }
}
