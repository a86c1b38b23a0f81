//! Name resolution error types.

use thiserror::Error;

/// Errors that can occur while fetching a random name.
#[derive(Debug, Error)]
pub enum NameError {
    /// The server answered with an error status, or the transfer broke off.
    #[error("Name request failed: {0}")]
    RequestFailed(String),

    /// Response body was not the expected JSON shape.
    #[error("Failed to parse name response: {0}")]
    ParseError(String),

    /// No response within the per-request timeout.
    #[error("Name request timed out after {0}ms")]
    Timeout(u64),

    /// No provider is configured, or the server could not be reached.
    #[error("Name provider unavailable: {0}")]
    Unavailable(String),

    /// All retry attempts exhausted.
    #[error("All name requests failed after {attempts} tries: {last_error}")]
    RetriesExhausted {
        /// How many requests were sent.
        attempts: u32,
        /// Error from the final attempt.
        #[source]
        last_error: Box<NameError>,
    },
}

/// Timeouts are not mapped here: the caller knows the limit that was hit
/// and reports [`NameError::Timeout`] itself.
impl From<reqwest::Error> for NameError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            NameError::Unavailable(err.to_string())
        } else {
            NameError::RequestFailed(err.to_string())
        }
    }
}
