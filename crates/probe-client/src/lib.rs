//! # probe-client
//!
//! HTTP client for the API under test.
//!
//! Builds URLs from the configured base URL and versioned prefix, attaches
//! bearer credentials and idempotency keys, and buffers responses so checks
//! can inspect status, headers, and the response envelope.

pub mod envelope;
pub mod idempotency;

mod error;
mod http;

pub use envelope::Envelope;
pub use error::ClientError;
pub use http::{ApiRequest, ApiResponse, segment, with_query};
pub use reqwest::Method;

use std::time::Duration;

use probe_config::TargetConfig;

/// Client bound to one target API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_prefix: String,
    health_path: String,
}

impl ApiClient {
    /// Build a client with the target's uniform timeout and TLS policy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(target: &TargetConfig) -> Result<Self, ClientError> {
        if target.insecure {
            if target.is_https() {
                tracing::warn!(
                    base_url = %target.base_url,
                    "TLS certificate verification is disabled; certificate errors will be ignored"
                );
            } else {
                tracing::debug!("--insecure has no effect on a plain http:// base URL");
            }
        }

        let timeout = Duration::from_secs(target.timeout_secs);
        let http = reqwest::Client::builder()
            .user_agent(target.user_agent.as_str())
            .timeout(timeout)
            .connect_timeout(timeout)
            .danger_accept_invalid_certs(target.insecure)
            .build()?;

        Ok(Self {
            http,
            base_url: target.base_url.trim_end_matches('/').to_string(),
            api_prefix: target.api_prefix.trim_end_matches('/').to_string(),
            health_path: target.health_path.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API path (`/countdowns/42` -> `{base}{prefix}/countdowns/42`).
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{path}", self.base_url, self.api_prefix)
    }

    /// Full URL of the unversioned liveness path.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }

    /// Start a request against an API path.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(&self.http, method, self.api_url(path))
    }

    #[must_use]
    pub fn get(&self, path: &str) -> ApiRequest {
        self.request(Method::GET, path)
    }

    #[must_use]
    pub fn post(&self, path: &str) -> ApiRequest {
        self.request(Method::POST, path)
    }

    #[must_use]
    pub fn put(&self, path: &str) -> ApiRequest {
        self.request(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(&self, path: &str) -> ApiRequest {
        self.request(Method::DELETE, path)
    }

    /// GET the liveness path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure.
    pub async fn health(&self) -> Result<ApiResponse, ClientError> {
        ApiRequest::new(&self.http, Method::GET, self.health_url())
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&TargetConfig {
            base_url: base_url.to_string(),
            ..TargetConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn api_paths_are_joined_under_prefix() {
        let client = client("http://localhost:8080/");
        assert_eq!(
            client.api_url("/countdowns/42"),
            "http://localhost:8080/api/v0/countdowns/42"
        );
    }

    #[test]
    fn health_path_is_unversioned() {
        let client = client("http://localhost:8080");
        assert_eq!(client.health_url(), "http://localhost:8080/health");
    }

    #[test]
    fn insecure_client_builds_for_https() {
        let client = ApiClient::new(&TargetConfig {
            base_url: "https://self-signed.example.test".into(),
            insecure: true,
            ..TargetConfig::default()
        });
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::new(&TargetConfig {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout_secs: 2,
            ..TargetConfig::default()
        })
        .unwrap();
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
