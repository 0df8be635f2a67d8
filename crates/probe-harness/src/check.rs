//! The value every check returns and the declarative endpoint check template.
//!
//! Most checks are "send one request, compare the status to a literal set".
//! [`EndpointCheck`] captures that shape so the catalog lists requests
//! instead of repeating request/compare/record bodies. Checks with extra
//! predicates (liveness, login, idempotency replay) are plain async functions
//! returning the same [`CheckResult`].

use probe_client::{ApiClient, ApiResponse, ClientError, Method};
use probe_core::{Credential, ResourceId};
use serde_json::Value;

/// Pass/fail verdict of one check plus whatever it produced for later checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T = ()> {
    pub passed: bool,
    pub diagnostic: String,
    /// Only meaningful when `passed` is true; the recorder drops it otherwise.
    pub artifact: Option<T>,
}

/// A check either yields a verdict or fails at the transport/decoding layer.
///
/// The recorder turns `Err` into a failed outcome carrying the error text.
pub type CheckResult<T = ()> = Result<Checked<T>, ClientError>;

impl<T> Checked<T> {
    #[must_use]
    pub fn pass(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: true,
            diagnostic: diagnostic.into(),
            artifact: None,
        }
    }

    #[must_use]
    pub fn fail(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: false,
            diagnostic: diagnostic.into(),
            artifact: None,
        }
    }

    /// Verdict from a status-code membership test.
    #[must_use]
    pub fn from_status(resp: &ApiResponse, accepted: &[u16]) -> Self {
        Self {
            passed: resp.accepted(accepted),
            diagnostic: status_diagnostic(resp),
            artifact: None,
        }
    }

    #[must_use]
    pub fn with_artifact(mut self, artifact: T) -> Self {
        self.artifact = Some(artifact);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl std::fmt::Display) -> Self {
        self.diagnostic = format!("{}, {note}", self.diagnostic);
        self
    }
}

/// `status=<code>`, plus the envelope's own code and message when it reports
/// a service failure.
#[must_use]
pub fn status_diagnostic(resp: &ApiResponse) -> String {
    let mut diagnostic = format!("status={}", resp.status());
    if let Ok(envelope) = resp.envelope() {
        if let Some((code, message)) = envelope.service_error() {
            diagnostic.push_str(&format!(" (StatusCode={code}, message={message})"));
        }
    }
    diagnostic
}

/// One request and the statuses it may return.
#[derive(Debug, Clone)]
pub struct EndpointCheck {
    pub name: &'static str,
    pub method: Method,
    /// API path relative to the versioned prefix, query string included.
    pub path: String,
    pub body: Option<Value>,
    pub accepted: &'static [u16],
}

impl EndpointCheck {
    fn new(name: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            name,
            method,
            path: path.into(),
            body: None,
            accepted: &[200],
        }
    }

    #[must_use]
    pub fn get(name: &'static str, path: impl Into<String>) -> Self {
        Self::new(name, Method::GET, path)
    }

    #[must_use]
    pub fn post(name: &'static str, path: impl Into<String>, body: Value) -> Self {
        Self::new(name, Method::POST, path).with_body(body)
    }

    #[must_use]
    pub fn put(name: &'static str, path: impl Into<String>, body: Value) -> Self {
        Self::new(name, Method::PUT, path).with_body(body)
    }

    #[must_use]
    pub fn delete(name: &'static str, path: impl Into<String>) -> Self {
        Self::new(name, Method::DELETE, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace the default `{200}` accepted set.
    #[must_use]
    pub const fn accepting(mut self, accepted: &'static [u16]) -> Self {
        self.accepted = accepted;
        self
    }

    async fn send(
        &self,
        client: &ApiClient,
        credential: Option<&Credential>,
    ) -> Result<ApiResponse, ClientError> {
        let mut request = client
            .request(self.method.clone(), &self.path)
            .bearer_opt(credential);
        if let Some(body) = &self.body {
            request = request.json(body);
        }
        request.send().await
    }

    /// Send the request and compare its status to the accepted set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn execute(&self, client: &ApiClient, credential: Option<&Credential>) -> CheckResult {
        let resp = self.send(client, credential).await?;
        Ok(Checked::from_status(&resp, self.accepted))
    }

    /// Send a creation request and extract `Result.<field>` as the new
    /// resource's identifier.
    ///
    /// An accepted status without a usable identifier fails the check, so
    /// dependent update/delete checks are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn execute_create(
        &self,
        client: &ApiClient,
        credential: Option<&Credential>,
        field: &str,
    ) -> CheckResult<ResourceId> {
        let resp = self.send(client, credential).await?;
        let checked = Checked::from_status(&resp, self.accepted);
        if !checked.passed {
            return Ok(checked);
        }
        match resp.resource_id(field) {
            Ok(id) => Ok(checked.with_note(format!("id={id}")).with_artifact(id)),
            Err(error) => Ok(Checked::fail(format!("{}, {error}", checked.diagnostic))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn endpoint_defaults_to_accepting_200_only() {
        let check = EndpointCheck::get("hero list", "/heroes/");
        assert_eq!(check.accepted, &[200]);
        assert_eq!(check.method, Method::GET);
        assert!(check.body.is_none());
    }

    #[test]
    fn accepting_replaces_status_set() {
        let check = EndpointCheck::get("course table", "/coursetable/").accepting(&[200, 400]);
        assert_eq!(check.accepted, &[200, 400]);
    }

    #[test]
    fn post_carries_body() {
        let check = EndpointCheck::post("create", "/countdowns/", json!({"title": "x"}));
        assert_eq!(check.method, Method::POST);
        assert_eq!(check.body, Some(json!({"title": "x"})));
    }

    #[test]
    fn note_is_appended_to_diagnostic() {
        let checked: Checked = Checked::pass("status=200").with_note("key=abc...");
        assert_eq!(checked.diagnostic, "status=200, key=abc...");
        assert!(checked.passed);
    }

    #[test]
    fn artifact_is_attached() {
        let checked = Checked::pass("ok").with_artifact(7_u32);
        assert_eq!(checked.artifact, Some(7));
    }
}
