//! Principal roles and the credential requirement attached to each check.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

/// A mock-login principal whose bearer credential is acquired at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principal {
    Standard,
    Admin,
}

impl Principal {
    /// Both principals, in acquisition order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Requirement
// ---------------------------------------------------------------------------

/// Credential a check needs before it may execute.
///
/// Checks whose requirement is unmet are skipped, never recorded as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    None,
    Standard,
    Admin,
}

impl Requirement {
    /// The principal whose credential satisfies this requirement, if any.
    #[must_use]
    pub const fn principal(self) -> Option<Principal> {
        match self {
            Self::None => None,
            Self::Standard => Some(Principal::Standard),
            Self::Admin => Some(Principal::Admin),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Admin => "admin",
        }
    }
}

impl From<Principal> for Requirement {
    fn from(principal: Principal) -> Self {
        match principal {
            Principal::Standard => Self::Standard,
            Principal::Admin => Self::Admin,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_maps_to_principal() {
        assert_eq!(Requirement::None.principal(), None);
        assert_eq!(Requirement::Standard.principal(), Some(Principal::Standard));
        assert_eq!(Requirement::Admin.principal(), Some(Principal::Admin));
    }

    #[test]
    fn principal_round_trips_into_requirement() {
        for principal in Principal::ALL {
            assert_eq!(Requirement::from(principal).principal(), Some(principal));
        }
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Requirement::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let parsed: Principal = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, Principal::Standard);
    }
}
