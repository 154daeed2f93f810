//! # Urban Airship Push Client
//!
//! An async Rust client for the Urban Airship Push Notifications API v3.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AirshipConfig`] and [`AirshipConfigBuilder`]
//! - Validated newtypes for the application key and secrets
//! - HTTP Basic authentication with the application or master secret
//! - A request pipeline that checks every answer against one expected status
//! - One [`ResourceClient`] per API group, driven by static routing tables
//! - Typed payloads for pushes, schedules and device feedback
//! - Structured diagnostics through an injectable [`DiagnosticSink`]
//!
//! ## Quick Start
//!
//! ```rust
//! use urban_airship::{AirshipClient, AirshipConfig, Credentials};
//!
//! let config = AirshipConfig::builder()
//!     .credentials(Credentials::new("app-key", "app-secret", "master-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = AirshipClient::new(&config).unwrap();
//! assert_eq!(client.push().operations().len(), 2);
//! ```
//!
//! ## Sending a Push
//!
//! ```rust,ignore
//! use urban_airship::resources::{Audience, DeviceTypes, Notification, Push};
//!
//! let push = Push::new(
//!     Audience::Tag("sports".to_string()),
//!     Notification::alert("Kick-off in 10 minutes"),
//!     DeviceTypes::All,
//! );
//!
//! push.validate(&client).await?;
//! let sent = push.send(&client).await?;
//! ```
//!
//! ## Untyped Calls
//!
//! Every group can also be called by operation name with any serializable
//! body. The answer is the parsed JSON, or the raw text when the API does
//! not answer with JSON:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let body = json!({"audience": "all", "notification": {"alert": "Hi"}, "device_types": "all"});
//! let answer = client.push().call("validate", Some(&body)).await?;
//! ```
//!
//! ## Errors and Diagnostics
//!
//! A call fails with [`RequestError::UnexpectedStatus`] whenever the status
//! differs from the operation's expected status, including other 2xx codes.
//! The error carries the catalog hint for the status. The same event is
//! also emitted to the configured [`DiagnosticSink`], which defaults to
//! [`TracingSink`] and logs through `tracing`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Missing credentials are rejected at construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No retries**: Each call resolves exactly once

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::AirshipClient;
pub use config::{
    AirshipConfig, AirshipConfigBuilder, AppKey, AppSecret, AuthTier, BaseUrl, Credentials,
    MasterSecret,
};
pub use error::ConfigError;

// Re-export pipeline types
pub use clients::{
    Diagnostic, DiagnosticSink, HttpClient, HttpMethod, HttpResponse, RequestDescriptor,
    RequestError, ResponseBody, TracingSink, UnexpectedStatusError,
};

// Re-export resource types
pub use resources::{ResourceClient, ResourceError};
