//! Package metadata used to parameterize output file names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMeta {
    pub name: String,
    pub version: String,
}

impl PackageMeta {
    /// Create validated package metadata
    ///
    /// # Example
    ///
    /// ```
    /// use rig_config::PackageMeta;
    ///
    /// let pkg = PackageMeta::new("app", "1.2.3").unwrap();
    /// assert_eq!(pkg.artifact_stem(), "app-1.2.3");
    /// assert!(PackageMeta::new("", "1.0.0").is_err());
    /// ```
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let meta = Self {
            name: name.into(),
            version: version.into(),
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Read `name` and `version` from a package.json file
    pub fn from_package_json(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let meta: PackageMeta =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("expected string 'name' and 'version' fields: {e}")),
            })?;
        meta.validate()?;
        Ok(meta)
    }

    /// `{name}-{version}`, the stem shared by every versioned artifact
    pub fn artifact_stem(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [("name", &self.name), ("version", &self.version)] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidPackage(format!("{field} cannot be empty")));
            }
            // Scoped names ("@scope/app") keep their slash; versions never have one.
            let forbidden = |c: char| {
                c.is_whitespace() || c == '\\' || (c == '/' && field == "version")
            };
            if value.chars().any(forbidden) {
                return Err(ConfigError::InvalidPackage(format!(
                    "{field} '{value}' cannot be used in a file name"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            PackageMeta::new("app", " ").unwrap_err(),
            ConfigError::InvalidPackage(_)
        ));
    }

    #[test]
    fn rejects_separators_in_version() {
        assert!(PackageMeta::new("app", "1.0/2").is_err());
        assert!(PackageMeta::new("my app", "1.0.0").is_err());
    }

    #[test]
    fn reads_package_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(
            &path,
            r#"{ "name": "app", "version": "1.2.3", "private": true }"#,
        )
        .unwrap();

        let meta = PackageMeta::from_package_json(&path).unwrap();
        assert_eq!(meta, PackageMeta::new("app", "1.2.3").unwrap());
    }

    #[test]
    fn missing_version_is_invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "name": "app" }"#).unwrap();

        let err = PackageMeta::from_package_json(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = PackageMeta::from_package_json(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
