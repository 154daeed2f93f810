//! Structured diagnostics emitted by the request pipeline.
//!
//! The pipeline never writes to a console. It reports noteworthy events to
//! a [`DiagnosticSink`] supplied through the configuration, and the host
//! application decides where they go. The default sink, [`TracingSink`],
//! forwards them to `tracing`.

use std::fmt;

use crate::clients::http_request::HttpMethod;

/// An event worth reporting that does not by itself abort a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The response body was not valid JSON and is passed through as text.
    UnparseableBody {
        /// The request method.
        method: HttpMethod,
        /// The request path.
        path: String,
        /// The response status code.
        status: u16,
        /// The raw response body.
        raw: String,
        /// The JSON parser's complaint.
        reason: String,
    },

    /// The response status differs from the one the operation expects.
    UnexpectedStatus {
        /// The request method.
        method: HttpMethod,
        /// The request path.
        path: String,
        /// The status that was received.
        status: u16,
        /// The status the operation declared.
        expected: u16,
        /// The catalog hint for the received status, if it is documented.
        hint: Option<&'static str>,
        /// The `error` field of the body, or the raw body text.
        detail: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparseableBody {
                method,
                path,
                status,
                raw,
                reason,
            } => write!(
                f,
                "Error while parsing answer from Urban Airship for {method} {path} (status {status}): {reason}; raw body: {raw}"
            ),
            Self::UnexpectedStatus {
                method,
                path,
                status,
                expected,
                hint,
                detail,
            } => {
                write!(
                    f,
                    "Unexpected answer from Urban Airship for {method} {path}: status {status} (expected {expected}): {detail}"
                )?;
                if let Some(hint) = hint {
                    write!(f, " Hint: {hint}")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives diagnostics from the request pipeline.
///
/// Implementations must be cheap and must not block; they are called inline
/// while a request completes.
pub trait DiagnosticSink: Send + Sync {
    /// Handles one diagnostic event.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
///
/// Unparseable bodies are logged at `warn`, unexpected statuses at `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnparseableBody {
                method,
                path,
                status,
                reason,
                ..
            } => {
                tracing::warn!(
                    %method,
                    path = %path,
                    status = *status,
                    reason = %reason,
                    "{}",
                    diagnostic
                );
            }
            Diagnostic::UnexpectedStatus {
                method,
                path,
                status,
                expected,
                ..
            } => {
                tracing::error!(
                    %method,
                    path = %path,
                    status = *status,
                    expected = *expected,
                    "{}",
                    diagnostic
                );
            }
        }
    }
}
