//! HTTP response types for the Urban Airship API.
//!
//! This module provides the [`HttpResponse`] type and the [`ResponseBody`]
//! it carries. Bodies are parsed as JSON when possible and kept as raw text
//! otherwise.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The buffered body of a response.
///
/// # Example
///
/// ```rust
/// use urban_airship::clients::ResponseBody;
/// use serde_json::json;
///
/// let body = ResponseBody::Json(json!({"ok": true}));
/// assert_eq!(body.get("ok"), Some(&json!(true)));
///
/// let body = ResponseBody::Text("Service Unavailable".to_string());
/// assert!(body.as_json().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The raw body text, when it is empty or not valid JSON.
    Text(String),
}

impl ResponseBody {
    /// Parses buffered response text.
    ///
    /// Returns the body together with the parser's complaint when the text is
    /// non-empty but not valid JSON. An empty body is kept as empty text
    /// without a complaint.
    #[must_use]
    pub fn parse(text: String) -> (Self, Option<String>) {
        if text.trim().is_empty() {
            return (Self::Text(text), None);
        }
        match serde_json::from_str(&text) {
            Ok(value) => (Self::Json(value), None),
            Err(e) => (Self::Text(text), Some(e.to_string())),
        }
    }

    /// Returns the JSON value, if the body parsed.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body did not parse.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns a top-level field of a JSON object body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Deserializes a JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is raw text or does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        }
    }

    /// Returns the most useful description of an error body.
    ///
    /// Prefers the `error` field of a JSON body. Falls back to the whole
    /// JSON document, then to the raw text.
    #[must_use]
    pub fn error_detail(&self) -> String {
        match self {
            Self::Json(value) => match value.get("error") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => value.to_string(),
            },
            Self::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A response whose status matched the request's expected status.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The buffered body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: ResponseBody,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Consumes the response, returning its body.
    #[must_use]
    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}
