//! Identifiers returned by resource-creating checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::CoreError;

/// A non-empty identifier of a transient resource created during the run.
///
/// The remote API returns numeric ids for countdowns and tasks and string keys
/// for feature flags; both are held as their path-segment text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Build an identifier from text, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidResourceId`] when `raw` is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::InvalidResourceId(raw));
        }
        Ok(Self(raw))
    }

    /// Build an identifier from a JSON scalar (`42` or `"beta_key"`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidResourceId`] for `null`, booleans, floats,
    /// arrays, objects, or empty strings.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::String(s) => Self::new(s.clone()),
            Value::Number(n) if n.is_u64() || n.is_i64() => Self::new(n.to_string()),
            other => Err(CoreError::InvalidResourceId(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
