//! Error types for the Urban Airship client.
//!
//! This module contains the configuration errors raised while building an
//! [`AirshipConfig`](crate::AirshipConfig). Request-level failures live in
//! [`clients::RequestError`](crate::clients::RequestError) and resource-level
//! failures in [`resources::ResourceError`](crate::resources::ResourceError).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! incomplete credentials are rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use urban_airship::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant carries an actionable message. Missing or empty credentials
/// always fail here, at construction time, never during a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The application key cannot be empty.
    #[error("App key cannot be empty. Please provide your Urban Airship application key.")]
    EmptyAppKey,

    /// The application secret cannot be empty.
    #[error("App secret cannot be empty. Please provide your Urban Airship application secret.")]
    EmptyAppSecret,

    /// The master secret cannot be empty.
    #[error("Master secret cannot be empty. Please provide your Urban Airship master secret.")]
    EmptyMasterSecret,

    /// One of the three required credentials was never supplied.
    #[error("Missing access configuration parameter '{field}'. The key, secret and master secret are all required to communicate with Urban Airship.")]
    MissingCredentials {
        /// The name of the missing credential.
        field: &'static str,
    },

    /// The API base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://go.urbanairship.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The request timeout is invalid.
    #[error("Invalid request timeout '{value}'. Expected a positive number of seconds.")]
    InvalidTimeout {
        /// The invalid value that was provided.
        value: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {message}")]
    HttpClientBuild {
        /// The reason reported by the HTTP stack.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_app_key_error_message() {
        let error = ConfigError::EmptyAppKey;
        let message = error.to_string();
        assert!(message.contains("App key cannot be empty"));
        assert!(message.contains("application key"));
    }

    #[test]
    fn test_missing_credentials_error_names_field() {
        let error = ConfigError::MissingCredentials {
            field: "master_secret",
        };
        let message = error.to_string();
        assert!(message.contains("master_secret"));
        assert!(message.contains("all required"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyMasterSecret;
        let _: &dyn std::error::Error = &error;
    }
}
