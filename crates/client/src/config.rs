use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint {0:?}: must be an http(s) URL")]
    InvalidEndpoint(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Client side settings for a form session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Submission endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// How long a success/error notice stays visible, in milliseconds
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Keep the fields when the submit call fails instead of clearing them
    #[serde(default)]
    pub preserve_on_failure: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            notice_duration_ms: default_notice_duration_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            preserve_on_failure: false,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.notice_duration_ms == 0 {
            return Err(ConfigError::Zero("notice_duration_ms"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Zero("request_timeout_secs"));
        }
        Ok(())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_endpoint() -> String {
    "http://localhost:3000/submit-form".to_string()
}

fn default_notice_duration_ms() -> u64 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.endpoint, "http://localhost:3000/submit-form");
        assert_eq!(cfg.notice_duration(), Duration::from_secs(3));
        assert!(!cfg.preserve_on_failure);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let cfg = ClientConfig {
            endpoint: "localhost:3000".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidEndpoint(_))));

        let cfg = ClientConfig {
            notice_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Zero("notice_duration_ms")));
    }

    #[test]
    fn test_partial_json() {
        let cfg: ClientConfig = serde_json::from_str(r#"{"preserve_on_failure": true}"#).unwrap();
        assert!(cfg.preserve_on_failure);
        assert_eq!(cfg.request_timeout_secs, 10);
    }
}
