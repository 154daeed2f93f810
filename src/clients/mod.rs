//! HTTP pipeline for Urban Airship API communication.
//!
//! This module provides the layer every resource operation funnels through.
//! It validates a [`RequestDescriptor`], authenticates with HTTP Basic,
//! serializes the JSON body, buffers and parses the response, and classifies
//! the outcome against the operation's expected status.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async pipeline
//! - [`RequestDescriptor`]: What to send, and which status counts as success
//! - [`HttpResponse`] and [`ResponseBody`]: A successful, buffered answer
//! - [`RequestError`]: Everything that can go wrong with one request
//! - [`status`]: The catalog of documented response statuses
//! - [`Diagnostic`] and [`DiagnosticSink`]: Structured reporting of anomalies
//!
//! # Retry Behavior
//!
//! There is none. Each call resolves exactly once, and a failed call must be
//! retried by the caller if desired.

mod diagnostics;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod status;

pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use errors::{RequestError, UnexpectedStatusError};
pub use http_client::{HttpClient, ACCEPT_V3, SDK_VERSION};
pub use http_request::{HttpMethod, RequestDescriptor, RequestDescriptorBuilder};
pub use http_response::{HttpResponse, ResponseBody};
pub use status::StatusEntry;
