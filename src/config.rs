//! YAML Configuration File Support for dynform
//!
//! Loads the client and store settings of a dynform deployment from a single
//! YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # dynform configuration
//! version: "1.0"
//!
//! client:
//!   endpoint: "http://localhost:3000/submit-form"
//!   notice_duration_ms: 3000
//!   request_timeout_secs: 10
//!   preserve_on_failure: false
//!
//! store:
//!   data_path: "data.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use client::ClientConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DynformConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Form session settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Submission document settings
    #[serde(default)]
    pub store: StoreYamlConfig,
}

impl DynformConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DynformConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.client
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("client: {err}")))?;
        self.store.validate()?;

        Ok(())
    }
}

impl Default for DynformConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            client: ClientConfig::default(),
            store: StoreYamlConfig::default(),
        }
    }
}

/// Store YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreYamlConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl StoreYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "store.data_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreYamlConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "local"
client:
  endpoint: "http://127.0.0.1:8080/submit-form"
  preserve_on_failure: true
store:
  data_path: "/var/lib/dynform/data.json"
"#;

        let config = DynformConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("local".to_string()));
        assert_eq!(config.client.endpoint, "http://127.0.0.1:8080/submit-form");
        assert!(config.client.preserve_on_failure);
        assert_eq!(config.client.notice_duration_ms, 3000);
        assert_eq!(
            config.store.data_path,
            PathBuf::from("/var/lib/dynform/data.json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"version: \"1\"\n").unwrap();

        let config = DynformConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.client, ClientConfig::default());
        assert_eq!(config.store.data_path, PathBuf::from("data.json"));
    }

    #[test]
    fn test_unsupported_version() {
        let result = DynformConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_client_validation() {
        let yaml = r#"
version: "1.0"
client:
  endpoint: "ftp://example.com"
"#;

        let result = DynformConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("client"));
    }

    #[test]
    fn test_empty_data_path() {
        let yaml = r#"
version: "1.0"
store:
  data_path: ""
"#;

        assert!(DynformConfig::from_yaml(yaml).is_err());
    }
}
