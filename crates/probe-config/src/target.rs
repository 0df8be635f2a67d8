//! Target API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_prefix() -> String {
    "/api/v0".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

/// One connect/read timeout shared by every request.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("contract-probe/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Scheme and authority of the API under test.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Versioned prefix prepended to every API path.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Unversioned liveness path.
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Skip TLS certificate verification. Only meaningful for `https://`.
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            health_path: default_health_path(),
            insecure: false,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TargetConfig {
    /// Whether the base URL uses TLS.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.is_https()) {
            return Err(ConfigError::invalid(
                "target.base_url",
                format!("'{}' must start with http:// or https://", self.base_url),
            ));
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ConfigError::invalid(
                "target.api_prefix",
                "must be empty or start with '/'",
            ));
        }
        if !self.health_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "target.health_path",
                "must start with '/'",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "target.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Command-line values that take precedence over every other source.
///
/// `None` fields are omitted from serialization so they do not mask lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
