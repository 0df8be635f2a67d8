//! Client error types.

use thiserror::Error;

/// Errors raised while talking to the API under test.
///
/// The harness turns every variant into a failed check; none of them abort a run.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON the check expected.
    #[error("decode error ({status}): {source}")]
    Decode {
        /// HTTP status of the undecodable response.
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// An expected field was absent from an otherwise valid response.
    #[error("missing field '{field}' in response: {body}")]
    MissingField {
        /// Dotted path of the missing field (e.g. `Result.token`).
        field: String,
        /// Raw response body, for the diagnostic.
        body: String,
    },

    /// A creation response carried an unusable identifier.
    #[error(transparent)]
    InvalidId(#[from] probe_core::CoreError),
}
