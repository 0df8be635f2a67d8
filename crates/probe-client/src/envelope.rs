//! The common response envelope wrapping every API payload.
//!
//! ```json
//! {"StatusCode": 0, "StatusMessage": "Success", "RequestId": "…", "Result": {…}}
//! ```
//!
//! The API reports some service failures with HTTP 200 and a non-zero
//! `StatusCode`; [`Envelope::service_error`] surfaces those for diagnostics.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(rename = "StatusCode", default)]
    pub status_code: i64,
    #[serde(rename = "StatusMessage", default)]
    pub status_message: String,
    #[serde(rename = "RequestId", default)]
    pub request_id: String,
    #[serde(rename = "Result", default)]
    pub result: Option<Value>,
}

impl Envelope {
    /// A top-level field of the nested `Result` object.
    #[must_use]
    pub fn result_field(&self, name: &str) -> Option<&Value> {
        self.result.as_ref().and_then(|r| r.get(name))
    }

    /// `Result.<name>` as a non-empty string.
    #[must_use]
    pub fn result_str(&self, name: &str) -> Option<&str> {
        self.result_field(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// `StatusCode` and `StatusMessage` when the envelope reports a failure.
    #[must_use]
    pub fn service_error(&self) -> Option<(i64, &str)> {
        (self.status_code != 0).then_some((self.status_code, self.status_message.as_str()))
    }
}
