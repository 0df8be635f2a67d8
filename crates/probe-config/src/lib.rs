//! # probe-config
//!
//! Layered configuration loading for contract-probe using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`TargetOverrides`])
//! 2. Environment variables (`PROBE_*` prefix, `__` as separator)
//! 3. Project-level `./probe.toml`
//! 4. User-level `~/.config/contract-probe/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROBE_TARGET__BASE_URL` -> `target.base_url`,
//! `PROBE_PRINCIPALS__ADMIN` -> `principals.admin`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use probe_config::ProbeConfig;
//!
//! let config = ProbeConfig::load_with_dotenv().expect("config");
//! println!("probing {}", config.target.base_url);
//! ```

mod error;
mod fixtures;
mod principals;
mod target;

pub use error::ConfigError;
pub use fixtures::FixturesConfig;
pub use principals::PrincipalsConfig;
pub use target::{TargetConfig, TargetOverrides};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the current directory.
pub const LOCAL_CONFIG_FILE: &str = "probe.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub principals: PrincipalsConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

/// Only the `target` section is overridable from the command line.
#[derive(Serialize)]
struct OverrideLayer<'a> {
    target: &'a TargetOverrides,
}

impl ProbeConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(&TargetOverrides::default())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with command-line overrides layered on top of every
    /// other source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result is invalid.
    pub fn load_with_overrides(overrides: &TargetOverrides) -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .merge(Serialized::defaults(OverrideLayer { target: overrides }))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain without command-line overrides.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PROBE_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target.validate()?;
        self.principals.validate()?;
        self.fixtures.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("contract-probe").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ProbeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target.base_url, "http://localhost:8080");
        assert_eq!(config.principals.standard, "basic");
        assert_eq!(config.principals.admin, "admin");
    }

    #[test]
    fn overrides_serialize_only_present_fields() {
        let overrides = TargetOverrides {
            base_url: Some("https://api.example.test".into()),
            ..TargetOverrides::default()
        };
        let layer = Figment::from(Serialized::defaults(OverrideLayer {
            target: &overrides,
        }));
        let config: ProbeConfig = Figment::from(Serialized::defaults(ProbeConfig::default()))
            .merge(layer)
            .extract()
            .expect("should extract");
        assert_eq!(config.target.base_url, "https://api.example.test");
        assert!(!config.target.insecure);
        assert_eq!(config.target.timeout_secs, 30);
    }
}
