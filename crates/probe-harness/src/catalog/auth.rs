//! Liveness probe and mock-login credential acquisition.

use probe_client::{ApiClient, ClientError};
use probe_core::{Credential, Principal};
use serde_json::{Value, json};

use crate::check::{CheckResult, Checked, status_diagnostic};

/// Mock login endpoint, relative to the API prefix.
pub const LOGIN_PATH: &str = "/auth/mock-wechat-login";

/// Passes iff the health path answers 200 with `{"status": "ok"}`.
///
/// # Errors
///
/// Returns [`ClientError`] on transport failure.
pub async fn liveness(client: &ApiClient) -> CheckResult {
    let resp = client.health().await?;
    let diagnostic = status_diagnostic(&resp);
    if resp.status() != 200 {
        return Ok(Checked::fail(diagnostic));
    }
    let status = resp
        .json::<Value>()
        .ok()
        .and_then(|body| body.get("status").and_then(Value::as_str).map(str::to_string));
    match status.as_deref() {
        Some("ok") => Ok(Checked::pass(diagnostic)),
        Some(other) => Ok(Checked::fail(format!("{diagnostic}, status field={other:?}"))),
        None => Ok(Checked::fail(format!(
            "{diagnostic}, no status field in body={}",
            resp.body()
        ))),
    }
}

/// Name of the login check for one mock-login selector.
#[must_use]
pub fn login_check_name(selector: &str) -> String {
    format!("mock login ({selector})")
}

/// Log in as `selector` and extract `Result.token`.
///
/// A non-200 status or an absent/empty token fails the check with the
/// response body in the diagnostic.
///
/// # Errors
///
/// Returns [`ClientError`] on transport failure.
pub async fn mock_login(
    client: &ApiClient,
    principal: Principal,
    selector: &str,
) -> CheckResult<Credential> {
    let resp = client
        .post(LOGIN_PATH)
        .json(&json!({ "test_user": selector }))
        .send()
        .await?;
    let diagnostic = status_diagnostic(&resp);
    if resp.status() != 200 {
        return Ok(Checked::fail(format!("{diagnostic}, body={}", resp.body())));
    }
    match resp.result_str("token") {
        Ok(token) => Ok(Checked::pass(format!("{diagnostic}, token acquired"))
            .with_artifact(Credential::new(principal, token))),
        Err(ClientError::MissingField { field, body }) => Ok(Checked::fail(format!(
            "{diagnostic}, {field} is empty, body={body}"
        ))),
        Err(error) => Ok(Checked::fail(format!("{diagnostic}, {error}"))),
    }
}
