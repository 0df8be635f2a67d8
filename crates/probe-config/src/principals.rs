//! Mock-login selectors for each principal.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_standard() -> String {
    "basic".to_string()
}

fn default_admin() -> String {
    "admin".to_string()
}

/// Value sent as `test_user` in the mock login body for each principal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrincipalsConfig {
    #[serde(default = "default_standard")]
    pub standard: String,

    #[serde(default = "default_admin")]
    pub admin: String,
}

impl Default for PrincipalsConfig {
    fn default() -> Self {
        Self {
            standard: default_standard(),
            admin: default_admin(),
        }
    }
}

impl PrincipalsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.standard.trim().is_empty() {
            return Err(ConfigError::invalid("principals.standard", "must not be empty"));
        }
        if self.admin.trim().is_empty() {
            return Err(ConfigError::invalid("principals.admin", "must not be empty"));
        }
        Ok(())
    }
}
