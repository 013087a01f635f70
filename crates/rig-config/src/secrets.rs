//! Externally supplied secrets injected into development builds.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment name of the captcha site key
pub const CAPTCHA_SITE_KEY: &str = "CAPTCHA_SITE_KEY";

/// Environment name of the login service URL
pub const URL_LOGIN_SERVICE: &str = "URL_LOGIN_SERVICE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub captcha_site_key: Option<String>,

    #[serde(default)]
    pub login_service_url: Option<String>,
}

/// What to do when a secret is absent from a development build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretPolicy {
    /// Abort assembly with `ConfigError::MissingSecret`
    #[default]
    FailFast,
    /// Inject an empty string literal
    Substitute,
}

impl Secrets {
    pub fn new(captcha_site_key: impl Into<String>, login_service_url: impl Into<String>) -> Self {
        Self {
            captcha_site_key: Some(captcha_site_key.into()),
            login_service_url: Some(login_service_url.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.captcha_site_key.is_none() && self.login_service_url.is_none()
    }

    /// Secrets in injection order, keyed by their environment name.
    ///
    /// Missing values are resolved through `policy`.
    pub(crate) fn resolve(&self, policy: SecretPolicy) -> Result<Vec<(&'static str, String)>> {
        [
            (CAPTCHA_SITE_KEY, &self.captcha_site_key),
            (URL_LOGIN_SERVICE, &self.login_service_url),
        ]
        .into_iter()
        .map(|(name, value)| match (value, policy) {
            (Some(value), _) => Ok((name, value.clone())),
            (None, SecretPolicy::Substitute) => {
                tracing::warn!(secret = name, "secret missing, injecting empty string");
                Ok((name, String::new()))
            }
            (None, SecretPolicy::FailFast) => Err(ConfigError::MissingSecret { name }),
        })
        .collect()
    }
}
