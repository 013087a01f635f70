//! File-based project discovery for CLI use
//!
//! Gathers the assembler's inputs from a project directory: package metadata
//! from `package.json`, and secrets plus the dev-server port from
//! `config.json`, `rig.toml` and the process environment.

use std::path::{Path, PathBuf};

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Json, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::assembler::ConfigAssembler;
use crate::bundle::helpers::default_port;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::package::PackageMeta;
use crate::secrets::{CAPTCHA_SITE_KEY, SecretPolicy, Secrets, URL_LOGIN_SERVICE};

/// Environment variable overriding the dev-server port
pub const PORT: &str = "PORT";

/// Settings supplied by the project's configuration files and environment
///
/// Top-level keys are case-insensitive in files, so `CAPTCHA_SITE_KEY` and
/// `captcha_site_key` name the same setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub captcha_site_key: Option<String>,

    #[serde(default, deserialize_with = "scalar_as_string")]
    pub url_login_service: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            captcha_site_key: None,
            url_login_service: None,
            port: default_port(),
        }
    }
}

/// Secrets are opaque: a key written as `12345` or `true` is kept as text.
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Bool(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Bool(b) => b.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}

/// Lowercases the top-level keys of a file provider to match how
/// environment variables are keyed.
struct CaseInsensitive<P>(P);

impl<P: Provider> Provider for CaseInsensitive<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> std::result::Result<Map<Profile, Dict>, figment::Error> {
        Ok(self
            .0
            .data()?
            .into_iter()
            .map(|(profile, dict)| {
                let dict: Dict = dict
                    .into_iter()
                    .map(|(key, value)| (key.to_ascii_lowercase(), value))
                    .collect();
                (profile, dict)
            })
            .collect())
    }

    fn profile(&self) -> Option<Profile> {
        self.0.profile()
    }
}

impl ProjectSettings {
    pub fn secrets(&self) -> Secrets {
        Secrets {
            captcha_site_key: self.captcha_site_key.clone(),
            login_service_url: self.url_login_service.clone(),
        }
    }
}

/// Project discovery rooted at a directory
///
/// # Example
///
/// ```no_run
/// use rig_config::{BuildMode, ProjectDiscovery};
///
/// let config = ProjectDiscovery::new(".")
///     .assembler(BuildMode::Development)
///     .unwrap()
///     .assemble()
///     .unwrap();
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
    read_env: bool,
    secret_policy: SecretPolicy,
}

impl ProjectDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            read_env: true,
            secret_policy: SecretPolicy::default(),
        }
    }

    /// Ignore process environment variables when loading settings
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn with_secret_policy(mut self, policy: SecretPolicy) -> Self {
        self.secret_policy = policy;
        self
    }

    /// Package metadata from `{root}/package.json`
    pub fn package(&self) -> Result<PackageMeta> {
        PackageMeta::from_package_json(&self.root.join("package.json"))
    }

    /// Layered settings sources.
    ///
    /// Priority: environment > rig.toml > config.json > defaults
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(ProjectSettings::default()))
            .merge(CaseInsensitive(Json::file(self.root.join("config.json"))))
            .merge(CaseInsensitive(Toml::file(self.root.join("rig.toml"))));

        if self.read_env {
            figment = figment.merge(Env::raw().only(&[PORT]));

            // Secret values are taken verbatim; `Env` would parse "007" as 7.
            for var in [CAPTCHA_SITE_KEY, URL_LOGIN_SERVICE] {
                if let Ok(value) = std::env::var(var) {
                    figment = figment.merge(Serialized::default(&var.to_ascii_lowercase(), value));
                }
            }
        }

        figment
    }

    pub fn settings(&self) -> Result<ProjectSettings> {
        self.figment().extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "settings".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                hint: Some(e.to_string()),
            }
        })
    }

    /// Assembler for `mode` wired with this project's inputs
    pub fn assembler(&self, mode: BuildMode) -> Result<ConfigAssembler> {
        let package = self.package()?;
        let settings = self.settings()?;
        debug!(
            root = %self.root.display(),
            package = %package.artifact_stem(),
            port = settings.port,
            "discovered project"
        );

        Ok(ConfigAssembler::new(mode, settings.secrets(), package)
            .with_port(settings.port)
            .with_root(self.root.clone())
            .with_secret_policy(self.secret_policy))
    }
}
