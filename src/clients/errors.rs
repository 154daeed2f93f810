//! Error types for the request pipeline.
//!
//! # Error Handling
//!
//! Every failure of a single request is reported as a [`RequestError`]:
//!
//! - [`RequestError::InvalidMethod`]: a verb outside GET/POST/PUT/DELETE
//! - [`RequestError::InvalidExpectedStatus`]: an expected status missing from the catalog
//! - [`RequestError::Serialize`]: the request body could not be encoded as JSON
//! - [`RequestError::Transport`]: a network or TLS failure
//! - [`RequestError::Timeout`]: the exchange did not finish in time
//! - [`RequestError::UnexpectedStatus`]: the API answered with another status than expected
//!
//! The first three are detected before anything is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use urban_airship::clients::RequestError;
//!
//! match client.push().call("send", Some(&payload)).await {
//!     Ok(body) => println!("Accepted: {body}"),
//!     Err(ResourceError::Request(RequestError::UnexpectedStatus(e))) => {
//!         println!("API answered {}: {}", e.status, e.message);
//!     }
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::clients::http_response::ResponseBody;

/// Error returned when the API answers with a status other than the
/// operation's expected one.
///
/// # Example
///
/// ```rust
/// use urban_airship::clients::{ResponseBody, UnexpectedStatusError};
///
/// let error = UnexpectedStatusError {
///     status: 401,
///     expected: 202,
///     hint: None,
///     message: "Unauthorized".to_string(),
///     body: ResponseBody::Text("Unauthorized".to_string()),
/// };
///
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
#[error("Unexpected answer from Urban Airship: received status {status}, expected {expected}: {message}")]
pub struct UnexpectedStatusError {
    /// The status code that was received.
    pub status: u16,
    /// The status code the operation expected.
    pub expected: u16,
    /// The catalog hint for the received status, if documented.
    pub hint: Option<&'static str>,
    /// The `error` field of the response, or the raw body text.
    pub message: String,
    /// The full response body.
    pub body: ResponseBody,
}

/// Unified error type for a single request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The HTTP method is not one of GET, POST, PUT, DELETE.
    #[error("Incorrect method '{method}'. Supported methods are GET, POST, PUT and DELETE.")]
    InvalidMethod {
        /// The method that was provided.
        method: String,
    },

    /// The expected status code is not in the status catalog.
    #[error("Incorrect expected status code {code}. It is not a documented Urban Airship response status.")]
    InvalidExpectedStatus {
        /// The status code that was provided.
        code: u16,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Network, TLS or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange exceeded the configured timeout.
    #[error("Request to Urban Airship timed out after {after:?}")]
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },

    /// The response status did not match the expected status.
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatusError),
}

impl RequestError {
    /// Returns `true` if the error was detected before any network traffic.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMethod { .. } | Self::InvalidExpectedStatus { .. } | Self::Serialize(_)
        )
    }

    /// Returns the received status code, if the API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(e) => Some(e.status),
            _ => None,
        }
    }
}
