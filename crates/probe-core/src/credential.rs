//! Bearer credentials acquired at startup.

use std::fmt;

use crate::enums::Principal;

/// An opaque bearer token bound to one principal for the run's lifetime.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    principal: Principal,
    token: String,
}

impl Credential {
    #[must_use]
    pub fn new(principal: Principal, token: impl Into<String>) -> Self {
        Self {
            principal,
            token: token.into(),
        }
    }

    #[must_use]
    pub const fn principal(&self) -> Principal {
        self.principal
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("principal", &self.principal)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// The credentials held by one run; either may be missing.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub standard: Option<Credential>,
    pub admin: Option<Credential>,
}

impl Credentials {
    #[must_use]
    pub const fn get(&self, principal: Principal) -> Option<&Credential> {
        match principal {
            Principal::Standard => self.standard.as_ref(),
            Principal::Admin => self.admin.as_ref(),
        }
    }

    pub fn set(&mut self, credential: Credential) {
        match credential.principal() {
            Principal::Standard => self.standard = Some(credential),
            Principal::Admin => self.admin = Some(credential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_token() {
        let credential = Credential::new(Principal::Admin, "abc123");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn credentials_are_keyed_by_principal() {
        let mut credentials = Credentials::default();
        credentials.set(Credential::new(Principal::Admin, "abc123"));

        assert!(credentials.get(Principal::Standard).is_none());
        assert_eq!(
            credentials.get(Principal::Admin).map(Credential::token),
            Some("abc123")
        );
    }
}
