//! Error types for resource operations.

use thiserror::Error;

use crate::clients::RequestError;

/// Errors returned by [`ResourceClient`](crate::resources::ResourceClient)
/// operations and the typed resource helpers.
///
/// # Example
///
/// ```rust
/// use urban_airship::resources::ResourceError;
///
/// let error = ResourceError::UnknownOperation {
///     resource: "segments",
///     operation: "list".to_string(),
/// };
/// assert!(error.to_string().contains("segments"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The underlying request failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The resource has no operation with the given name.
    #[error("The {resource} resource has no operation named '{operation}'.")]
    UnknownOperation {
        /// The resource that was called.
        resource: &'static str,
        /// The operation name that was requested.
        operation: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Failed to decode the response of {resource}.{operation}: {message}")]
    Decode {
        /// The resource that was called.
        resource: &'static str,
        /// The operation that was called.
        operation: &'static str,
        /// The decoder's complaint.
        message: String,
    },
}

impl ResourceError {
    /// Returns the underlying request error, if any.
    #[must_use]
    pub const fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_message() {
        let error = ResourceError::UnknownOperation {
            resource: "push",
            operation: "cancel".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "The push resource has no operation named 'cancel'."
        );
        assert!(error.as_request_error().is_none());
    }

    #[test]
    fn test_request_error_is_transparent() {
        let error = ResourceError::from(RequestError::InvalidExpectedStatus { code: 418 });
        assert!(error.to_string().contains("418"));
        assert!(matches!(
            error.as_request_error(),
            Some(RequestError::InvalidExpectedStatus { code: 418 })
        ));
    }
}
