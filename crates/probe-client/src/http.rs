//! Request building and buffered responses.
//!
//! Every response is read to completion before it is handed to a check, so a
//! check can inspect status, headers, and body in any order and quote the
//! body in its diagnostic.

use std::time::{Duration, Instant};

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use probe_core::{Credential, ResourceId};

use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::idempotency;

/// Append URL-encoded query pairs to `path`.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Encode an identifier for use as a single path segment.
#[must_use]
pub fn segment(id: &ResourceId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

/// A request under construction against the API under test.
pub struct ApiRequest {
    method: Method,
    url: String,
    inner: reqwest::RequestBuilder,
}

impl ApiRequest {
    pub(crate) fn new(http: &reqwest::Client, method: Method, url: String) -> Self {
        let inner = http.request(method.clone(), &url);
        Self { method, url, inner }
    }

    /// Attach `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(mut self, credential: &Credential) -> Self {
        self.inner = self.inner.bearer_auth(credential.token());
        self
    }

    /// Attach `Authorization` when a credential is present.
    #[must_use]
    pub fn bearer_opt(self, credential: Option<&Credential>) -> Self {
        match credential {
            Some(credential) => self.bearer(credential),
            None => self,
        }
    }

    /// Attach the idempotency key header.
    #[must_use]
    pub fn idempotency_key(mut self, key: &str) -> Self {
        self.inner = self.inner.header(idempotency::KEY_HEADER, key);
        self
    }

    #[must_use]
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.inner = self.inner.json(body);
        self
    }

    /// Send the request and buffer the whole response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure or when the body
    /// cannot be read.
    pub async fn send(self) -> Result<ApiResponse, ClientError> {
        let started = Instant::now();
        let result = self.inner.send().await;
        let resp = match result {
            Ok(resp) => resp,
            Err(error) => {
                tracing::debug!(method = %self.method, url = %self.url, %error, "request failed");
                return Err(error.into());
            }
        };
        let response = ApiResponse::read(resp, started.elapsed()).await?;
        tracing::debug!(
            method = %self.method,
            url = %self.url,
            status = response.status(),
            elapsed_ms = response.elapsed_ms(),
            "request completed"
        );
        Ok(response)
    }
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
    elapsed: Duration,
}

impl ApiResponse {
    /// Buffer a `reqwest` response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the body stream fails.
    pub async fn read(resp: reqwest::Response, elapsed: Duration) -> Result<Self, ClientError> {
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        Ok(Self {
            status,
            headers,
            body,
            elapsed,
        })
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is one of `accepted`.
    #[must_use]
    pub fn accepted(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of the replay marker header, if the server sent one.
    #[must_use]
    pub fn replayed(&self) -> Option<&str> {
        self.header(idempotency::REPLAYED_HEADER)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Decode the body as arbitrary JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|source| ClientError::Decode {
            status: self.status,
            source,
        })
    }

    /// Decode the body as the common response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the body is not an envelope.
    pub fn envelope(&self) -> Result<Envelope, ClientError> {
        self.json()
    }

    /// Extract `Result.<field>` as a string, failing when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] or [`ClientError::MissingField`].
    pub fn result_str(&self, field: &str) -> Result<String, ClientError> {
        self.envelope()?
            .result_str(field)
            .map(str::to_string)
            .ok_or_else(|| self.missing(field))
    }

    /// Extract `Result.<field>` as a resource identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`], [`ClientError::MissingField`], or
    /// [`ClientError::InvalidId`].
    pub fn resource_id(&self, field: &str) -> Result<ResourceId, ClientError> {
        let envelope = self.envelope()?;
        let value = envelope
            .result_field(field)
            .ok_or_else(|| self.missing(field))?;
        Ok(ResourceId::from_json(value)?)
    }

    fn missing(&self, field: &str) -> ClientError {
        ClientError::MissingField {
            field: format!("Result.{field}"),
            body: self.body.clone(),
        }
    }
}
