//! Error types for the dashkit-api crate.

/// Error type for all fallible operations in the dashkit-api crate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Wraps a transport-level failure from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Returned when the server answers with a non-success status.
    #[error("unexpected status {code} from {url}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
        /// Final URL the request resolved to.
        url: String,
    },

    /// Returned when the response body is not valid JSON.
    #[error("undecodable body from {url}: {reason}")]
    Decode {
        /// Final URL the request resolved to.
        url: String,
        /// Description of the underlying decoding failure.
        reason: String,
    },
}
