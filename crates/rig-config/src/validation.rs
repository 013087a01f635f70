//! Schema validation for resolved configurations
//!
//! Runs as the last step of assembly so a malformed rule or plugin payload
//! rejects the whole configuration.

use regex::Regex;

use crate::bundle::{PluginSpec, ResolvedConfig, TransformRule};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a resolved configuration
    fn validate(&self, config: &ResolvedConfig) -> Result<()>;
}

/// Structural validation, no filesystem checks
///
/// # Example
///
/// ```
/// use rig_config::{BuildMode, ConfigAssembler, ConfigValidator, PackageMeta, SchemaValidator, Secrets};
///
/// let pkg = PackageMeta::new("app", "1.0.0").unwrap();
/// let mut config = ConfigAssembler::new(BuildMode::Production, Secrets::default(), pkg)
///     .assemble()
///     .unwrap();
///
/// config.entry.clear();
/// assert!(SchemaValidator.validate(&config).is_err());
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if config.entry.iter().any(|entry| entry.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "entry module names cannot be empty".to_string(),
                hint: Some("Remove empty strings from the entry list".to_string()),
            });
        }

        for rule in &config.module.rules {
            validate_rule(rule)?;
        }

        for plugin in &config.plugins {
            validate_plugin(plugin)?;
        }

        if config.output.filename.trim().is_empty() || config.output.public_path.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename and public path are required".to_string(),
                hint: None,
            });
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Set PORT to a fixed listening port".to_string()),
            });
        }

        Ok(())
    }
}

fn validate_rule(rule: &TransformRule) -> Result<()> {
    let invalid = |message: String| ConfigError::InvalidRule {
        test: rule.test.clone(),
        message,
    };

    Regex::new(&rule.test_pattern()).map_err(|e| invalid(e.to_string()))?;

    if let Some(exclude) = &rule.exclude {
        Regex::new(exclude).map_err(|e| invalid(format!("exclude: {e}")))?;
    }

    let mut steps = rule.rule_use.steps().peekable();
    if steps.peek().is_none() {
        return Err(invalid("rule has no processing steps".to_string()));
    }

    if steps.any(|step| step.loader.trim().is_empty()) {
        return Err(invalid("loader name cannot be empty".to_string()));
    }

    Ok(())
}

fn validate_plugin(plugin: &PluginSpec) -> Result<()> {
    let invalid = |message: &str| ConfigError::InvalidPlugin {
        plugin: plugin.name().to_string(),
        message: message.to_string(),
    };

    match plugin {
        PluginSpec::Clean(clean) if clean.paths.is_empty() => Err(invalid("no paths to clean")),
        PluginSpec::Html(html) if html.filename.trim().is_empty() => {
            Err(invalid("filename cannot be empty"))
        }
        PluginSpec::ExtractCss(css) if css.filename.trim().is_empty() => {
            Err(invalid("filename cannot be empty"))
        }
        PluginSpec::Compression(compression)
            if !(compression.min_ratio > 0.0 && compression.min_ratio <= 1.0) =>
        {
            Err(invalid("min_ratio must be within (0, 1]"))
        }
        PluginSpec::Environment(env) if env.defaults.keys().any(|k| k.trim().is_empty()) => {
            Err(invalid("variable names cannot be empty"))
        }
        PluginSpec::Define(define)
            if define.definitions.keys().any(|k| k.trim().is_empty()) =>
        {
            Err(invalid("definition keys cannot be empty"))
        }
        _ => Ok(()),
    }
}

/// Convenience function for schema validation
pub fn validate_schema(config: &ResolvedConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{CompressionOptions, LoaderStep, PluginKind};
    use crate::{BuildMode, ConfigAssembler, PackageMeta, Secrets};

    fn resolved(mode: BuildMode) -> ResolvedConfig {
        ConfigAssembler::new(
            mode,
            Secrets::new("abc", "https://x"),
            PackageMeta::new("app", "1.2.3").unwrap(),
        )
        .assemble()
        .unwrap()
    }

    #[test]
    fn accepts_assembled_configs() {
        assert!(validate_schema(&resolved(BuildMode::Development)).is_ok());
        assert!(validate_schema(&resolved(BuildMode::Production)).is_ok());
    }

    #[test]
    fn rejects_empty_entries() {
        let mut config = resolved(BuildMode::Development);
        config.entry.clear();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::NoEntries
        ));
    }

    #[test]
    fn rejects_uncompilable_rule_pattern() {
        let mut config = resolved(BuildMode::Development);
        config
            .module
            .rules
            .push(TransformRule::chain(r"\.(ts$", vec![LoaderStep::new("ts-loader")]));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidRule { .. }
        ));
    }

    #[test]
    fn rejects_rule_without_steps() {
        let mut config = resolved(BuildMode::Development);
        config
            .module
            .rules
            .push(TransformRule::chain(r"\.ts$", Vec::new()));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidRule { .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_compression_ratio() {
        let mut config = resolved(BuildMode::Production);
        for plugin in &mut config.plugins {
            if plugin.kind() == PluginKind::Compression {
                *plugin = PluginSpec::Compression(CompressionOptions {
                    min_ratio: 1.5,
                    ..CompressionOptions::default()
                });
            }
        }
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugin { ref plugin, .. } if plugin == "compression"));
    }

    fn rejected_plugin(config: &ResolvedConfig) -> String {
        match SchemaValidator.validate(config).unwrap_err() {
            ConfigError::InvalidPlugin { plugin, .. } => plugin,
            other => panic!("expected plugin error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_uncompilable_exclude_pattern() {
        let mut config = resolved(BuildMode::Development);
        config.module.rules.push(
            TransformRule::chain(r"\.ts$", vec![LoaderStep::new("ts-loader")]).excluding("(vendor"),
        );
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidRule { ref message, .. } if message.starts_with("exclude:"))
        );
    }

    #[test]
    fn rejects_empty_html_filename() {
        let mut config = resolved(BuildMode::Production);
        for plugin in &mut config.plugins {
            if let PluginSpec::Html(html) = plugin {
                html.filename = " ".to_string();
            }
        }
        assert_eq!(rejected_plugin(&config), "html");
    }

    #[test]
    fn rejects_empty_stylesheet_filename() {
        let mut config = resolved(BuildMode::Production);
        for plugin in &mut config.plugins {
            if let PluginSpec::ExtractCss(css) = plugin {
                css.filename.clear();
            }
        }
        assert_eq!(rejected_plugin(&config), "extract-css");
    }

    #[test]
    fn rejects_blank_environment_variable_name() {
        let mut config = resolved(BuildMode::Production);
        for plugin in &mut config.plugins {
            if let PluginSpec::Environment(env) = plugin {
                env.defaults.insert(String::new(), "x".to_string());
            }
        }
        assert_eq!(rejected_plugin(&config), "environment");
    }

    #[test]
    fn rejects_blank_define_key() {
        let mut config = resolved(BuildMode::Development);
        for plugin in &mut config.plugins {
            if let PluginSpec::Define(define) = plugin {
                define.definitions.insert("  ".to_string(), "\"x\"".to_string());
            }
        }
        assert_eq!(rejected_plugin(&config), "define");
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = resolved(BuildMode::Development);
        config.dev_server.port = 0;
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }
}
