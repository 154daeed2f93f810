//! Request descriptors for the Urban Airship API.
//!
//! This module provides the [`RequestDescriptor`] type and its builder. A
//! descriptor says everything the pipeline needs to know about one call:
//! the method, the path, the one status that counts as success, and which
//! secret to authenticate with.

use std::fmt;
use std::str::FromStr;

use crate::clients::errors::RequestError;
use crate::clients::status;
use crate::config::AuthTier;

/// HTTP methods accepted by the Urban Airship API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and sending pushes.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RequestError;

    /// Parses an upper-case method name.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidMethod`] for anything other than
    /// `GET`, `POST`, `PUT` or `DELETE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(RequestError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Describes one request to the Urban Airship API.
///
/// Use [`RequestDescriptor::builder`] to construct descriptors, or
/// [`RequestDescriptor::parse`] when the method comes in as text.
///
/// # Example
///
/// ```rust
/// use urban_airship::AuthTier;
/// use urban_airship::clients::{HttpMethod, RequestDescriptor};
///
/// let descriptor = RequestDescriptor::builder(HttpMethod::Post, "/api/push")
///     .expected_status(202)
///     .auth_tier(AuthTier::Master)
///     .build()
///     .unwrap();
///
/// assert_eq!(descriptor.expected_status, 202);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute API path (e.g., `/api/push`).
    pub path: String,
    /// The only status code treated as success.
    pub expected_status: u16,
    /// Which secret authenticates the request.
    pub auth_tier: AuthTier,
    /// Query parameters appended to the URL, in order.
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Creates a new builder for a descriptor.
    ///
    /// The builder defaults to an expected status of 200 and
    /// [`AuthTier::App`].
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> RequestDescriptorBuilder {
        RequestDescriptorBuilder::new(method, path)
    }

    /// Builds a descriptor from a textual method name.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidMethod`] if the method is not supported,
    /// or [`RequestError::InvalidExpectedStatus`] if the status is not in the
    /// catalog.
    pub fn parse(
        method: &str,
        path: impl Into<String>,
        expected_status: u16,
        auth_tier: AuthTier,
    ) -> Result<Self, RequestError> {
        let method = method.parse::<HttpMethod>()?;
        Self::builder(method, path)
            .expected_status(expected_status)
            .auth_tier(auth_tier)
            .build()
    }

    /// Validates the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidExpectedStatus`] if `expected_status`
    /// is not in the status catalog.
    pub fn verify(&self) -> Result<(), RequestError> {
        if !status::is_known(self.expected_status) {
            return Err(RequestError::InvalidExpectedStatus {
                code: self.expected_status,
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`RequestDescriptor`] instances.
#[derive(Debug)]
pub struct RequestDescriptorBuilder {
    method: HttpMethod,
    path: String,
    expected_status: u16,
    auth_tier: AuthTier,
    query: Vec<(String, String)>,
}

impl RequestDescriptorBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            expected_status: status::OK.code,
            auth_tier: AuthTier::App,
            query: Vec::new(),
        }
    }

    /// Sets the status code that counts as success.
    #[must_use]
    pub const fn expected_status(mut self, code: u16) -> Self {
        self.expected_status = code;
        self
    }

    /// Sets which secret authenticates the request.
    #[must_use]
    pub const fn auth_tier(mut self, tier: AuthTier) -> Self {
        self.auth_tier = tier;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`RequestDescriptor`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidExpectedStatus`] if the expected status
    /// is not in the catalog.
    pub fn build(self) -> Result<RequestDescriptor, RequestError> {
        let descriptor = RequestDescriptor {
            method: self.method,
            path: self.path,
            expected_status: self.expected_status,
            auth_tier: self.auth_tier,
            query: self.query,
        };
        descriptor.verify()?;
        Ok(descriptor)
    }
}
