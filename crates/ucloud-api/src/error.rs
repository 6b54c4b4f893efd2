//! Error types for the API client.

use crate::params::EncodeError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while issuing an API call.
///
/// Nothing here is retried by the client itself: every variant is returned
/// to the immediate caller. Only the state waiter in [`crate::wait`] loops,
/// and only on its own "not yet converged" case.
#[derive(Debug, Error)]
pub enum Error {
    /// A required client configuration field is empty.
    #[error("invalid client field: {0}")]
    InvalidClientField(&'static str),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Failed to load configuration from the environment.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The request could not be encoded into wire parameters.
    #[error("cannot encode request: {0}")]
    Encode(#[from] EncodeError),

    /// Transport-level failure (connection, I/O), surfaced unmodified.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call transported and decoded fine but the remote side reported a
    /// failure through its status code.
    #[error("bad RetCode {ret_code} for {action}: {message}")]
    BadRetCode {
        /// Wire action the failure belongs to.
        action: String,
        /// Non-zero remote status code.
        ret_code: i64,
        /// Remote-supplied message, possibly empty.
        message: String,
    },
}
