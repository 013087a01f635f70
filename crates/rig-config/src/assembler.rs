//! Assembly of a [`ResolvedConfig`] from mode, secrets and package metadata.
//!
//! The assembler never touches the process environment or the filesystem:
//! everything it needs is handed to [`ConfigAssembler::new`], which keeps
//! assembly a pure function of its inputs. Use
//! [`crate::ProjectDiscovery`] to gather those inputs from a project
//! directory.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::bundle::helpers::{OUTPUT_DIR, default_port};
use crate::bundle::{
    AnalyzerMode, AnalyzerOptions, CleanOptions, CompressionOptions, DefineOptions,
    DevtoolStrategy, EcmaVersion, EnvironmentOptions, ExtractCssOptions, HtmlOptions,
    MinifyOptions, ModuleOptions, OutputDescriptor, PluginSpec, ResolvedConfig, SizeKind,
    TransformRule, default_rules,
};
use crate::dev::DevServer;
use crate::error::{ConfigError, Result};
use crate::mode::{BuildMode, select_devtool_strategy};
use crate::package::PackageMeta;
use crate::secrets::{SecretPolicy, Secrets};
use crate::validation::{ConfigValidator, SchemaValidator};

/// Modules bundled into every build, in order: runtime polyfills, the
/// application, then the top-level stylesheet.
pub const ENTRIES: [&str; 3] = ["babel-polyfill", "./src/index.js", "./style/core.scss"];

/// Builds a [`ResolvedConfig`]
///
/// # Example
///
/// ```
/// use rig_config::{BuildMode, ConfigAssembler, PackageMeta, PluginKind, Secrets};
///
/// let pkg = PackageMeta::new("app", "1.2.3").unwrap();
/// let config = ConfigAssembler::new(BuildMode::Production, Secrets::default(), pkg)
///     .assemble()
///     .unwrap();
///
/// assert!(config.has_plugin(PluginKind::Minify));
/// assert!(!config.has_plugin(PluginKind::Define));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    mode: BuildMode,
    secrets: Secrets,
    package: PackageMeta,
    port: u16,
    root: PathBuf,
    secret_policy: SecretPolicy,
}

impl ConfigAssembler {
    pub fn new(mode: BuildMode, secrets: Secrets, package: PackageMeta) -> Self {
        Self {
            mode,
            secrets,
            package,
            port: default_port(),
            root: PathBuf::from("."),
            secret_policy: SecretPolicy::default(),
        }
    }

    /// Dev-server listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Project root that output and template paths resolve against
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_secret_policy(mut self, policy: SecretPolicy) -> Self {
        self.secret_policy = policy;
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn devtool(&self) -> DevtoolStrategy {
        select_devtool_strategy(self.mode)
    }

    pub fn entries(&self) -> Vec<String> {
        ENTRIES.iter().map(|e| e.to_string()).collect()
    }

    pub fn rules(&self) -> Vec<TransformRule> {
        default_rules()
    }

    pub fn output(&self) -> OutputDescriptor {
        OutputDescriptor::for_package(&self.package, &self.root)
    }

    pub fn dev_server(&self) -> DevServer {
        DevServer::on_port(self.port)
    }

    /// Ordered plugin list: the fixed plugins, then production-only, then
    /// development-only ones.
    pub fn plugins(&self) -> Result<Vec<PluginSpec>> {
        let development = self.development_plugins()?;

        Ok(self
            .base_plugins()
            .into_iter()
            .chain(self.production_plugins())
            .chain(development)
            .collect())
    }

    /// Build the complete configuration.
    ///
    /// The result is validated before it is returned; on any error no
    /// configuration is produced.
    pub fn assemble(&self) -> Result<ResolvedConfig> {
        debug!(
            mode = %self.mode,
            package = %self.package.artifact_stem(),
            "assembling build configuration"
        );

        let config = ResolvedConfig {
            mode: self.mode,
            devtool: self.devtool(),
            entry: self.entries(),
            module: ModuleOptions {
                rules: self.rules(),
            },
            output: self.output(),
            plugins: self.plugins()?,
            dev_server: self.dev_server(),
            profile: true,
        };

        SchemaValidator.validate(&config)?;

        debug!(plugins = ?config.plugin_kinds(), "build configuration assembled");
        Ok(config)
    }

    fn base_plugins(&self) -> Vec<PluginSpec> {
        let mut env_defaults = IndexMap::new();
        env_defaults.insert(
            "NODE_ENV".to_string(),
            BuildMode::Development.as_str().to_string(),
        );

        vec![
            PluginSpec::Clean(CleanOptions {
                paths: vec![PathBuf::from(format!("./{OUTPUT_DIR}"))],
                root: self.root.clone(),
                verbose: true,
            }),
            PluginSpec::Html(HtmlOptions::for_mode(self.mode, &self.package, &self.root)),
            PluginSpec::BundleAnalyzer(AnalyzerOptions {
                analyzer_mode: AnalyzerMode::Static,
                default_sizes: SizeKind::Gzip,
                open_analyzer: self.mode.is_production(),
            }),
            PluginSpec::Environment(EnvironmentOptions {
                defaults: env_defaults,
            }),
            PluginSpec::ExtractCss(ExtractCssOptions::for_package(&self.package)),
        ]
    }

    fn production_plugins(&self) -> Vec<PluginSpec> {
        if !self.mode.is_production() {
            return Vec::new();
        }

        vec![
            PluginSpec::Compression(CompressionOptions::default()),
            PluginSpec::Minify(MinifyOptions {
                parallel: true,
                source_map: true,
                compress: true,
                ecma: EcmaVersion::ES2015,
            }),
        ]
    }

    /// Secrets are only embedded outside production, whatever they contain.
    fn development_plugins(&self) -> Result<Vec<PluginSpec>> {
        if self.mode.is_production() {
            return Ok(Vec::new());
        }

        let mut define = DefineOptions::default();
        for (name, value) in self.secrets.resolve(self.secret_policy)? {
            define
                .insert_env(name, &value)
                .map_err(|e| ConfigError::InvalidPlugin {
                    plugin: "define".to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(vec![PluginSpec::Define(define)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::PluginKind;

    fn assembler(mode: BuildMode) -> ConfigAssembler {
        ConfigAssembler::new(
            mode,
            Secrets::new("abc", "https://x"),
            PackageMeta::new("app", "1.2.3").unwrap(),
        )
    }

    #[test]
    fn base_plugins_come_first_in_fixed_order() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            let kinds: Vec<_> = assembler(mode)
                .plugins()
                .unwrap()
                .iter()
                .map(PluginSpec::kind)
                .take(5)
                .collect();
            assert_eq!(
                kinds,
                [
                    PluginKind::Clean,
                    PluginKind::Html,
                    PluginKind::BundleAnalyzer,
                    PluginKind::Environment,
                    PluginKind::ExtractCss,
                ]
            );
        }
    }

    #[test]
    fn clean_targets_dist() {
        let plugins = assembler(BuildMode::Development).plugins().unwrap();
        let PluginSpec::Clean(clean) = &plugins[0] else {
            panic!("cleaner must run first");
        };
        assert_eq!(clean.paths, vec![PathBuf::from("./dist")]);
        assert!(clean.verbose);
    }

    #[test]
    fn environment_plugin_pins_development_default() {
        let plugins = assembler(BuildMode::Production).plugins().unwrap();
        let PluginSpec::Environment(env) = &plugins[3] else {
            panic!("expected environment plugin");
        };
        assert_eq!(env.defaults["NODE_ENV"], "development");
    }

    #[test]
    fn production_plugins_follow_base() {
        let kinds: Vec<_> = assembler(BuildMode::Production)
            .plugins()
            .unwrap()
            .iter()
            .map(PluginSpec::kind)
            .skip(5)
            .collect();
        assert_eq!(kinds, [PluginKind::Compression, PluginKind::Minify]);
    }

    #[test]
    fn missing_secret_aborts_development_assembly() {
        let assembler = ConfigAssembler::new(
            BuildMode::Development,
            Secrets::default(),
            PackageMeta::new("app", "1.2.3").unwrap(),
        );
        assert!(matches!(
            assembler.assemble().unwrap_err(),
            ConfigError::MissingSecret { .. }
        ));
    }

    #[test]
    fn production_ignores_missing_secrets() {
        let assembler = ConfigAssembler::new(
            BuildMode::Production,
            Secrets::default(),
            PackageMeta::new("app", "1.2.3").unwrap(),
        );
        assert!(assembler.assemble().is_ok());
    }

    #[test]
    fn output_and_dev_server_follow_inputs() {
        let config = assembler(BuildMode::Development)
            .with_port(3000)
            .with_root("/srv/app")
            .assemble()
            .unwrap();
        assert_eq!(config.output.filename, "app-1.2.3.js");
        assert_eq!(config.output.path, PathBuf::from("/srv/app/dist"));
        assert_eq!(config.output.public_path, "/");
        assert_eq!(config.dev_server.port, 3000);
        assert!(config.dev_server.history_api_fallback);
        assert!(config.profile);
        assert_eq!(config.entry, ENTRIES);
    }
}
