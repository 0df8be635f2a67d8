//! Literal request values used by the check catalog.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_semester() -> String {
    "2024-2025-1".to_string()
}

fn default_campus() -> String {
    "红旗校区".to_string()
}

fn default_target_date() -> String {
    "2025-12-31".to_string()
}

fn default_due_date() -> String {
    "2025-12-31 23:59".to_string()
}

const fn default_whitelist_user_id() -> u64 {
    1
}

const fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixturesConfig {
    /// Semester requested from the course table.
    #[serde(default = "default_semester")]
    pub semester: String,

    /// Campus sent with created reviews; the API validates it.
    #[serde(default = "default_campus")]
    pub campus: String,

    /// `target_date` of the created countdown (`YYYY-MM-DD`).
    #[serde(default = "default_target_date")]
    pub target_date: String,

    /// `due_date` of the created study task.
    #[serde(default = "default_due_date")]
    pub due_date: String,

    /// User granted and revoked on the feature whitelist.
    #[serde(default = "default_whitelist_user_id")]
    pub whitelist_user_id: u64,

    /// `size` query parameter for paged list endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            semester: default_semester(),
            campus: default_campus(),
            target_date: default_target_date(),
            due_date: default_due_date(),
            whitelist_user_id: default_whitelist_user_id(),
            page_size: default_page_size(),
        }
    }
}

impl FixturesConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::invalid(
                "fixtures.page_size",
                "must be greater than zero",
            ));
        }
        if self.whitelist_user_id == 0 {
            return Err(ConfigError::invalid(
                "fixtures.whitelist_user_id",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
