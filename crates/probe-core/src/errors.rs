//! Cross-cutting error types.
//!
//! Transport and configuration errors live in their own crates; this module
//! only covers values that fail domain validation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A creation response carried an identifier that is empty or not a scalar.
    #[error("unusable resource identifier: {0}")]
    InvalidResourceId(String),
}
