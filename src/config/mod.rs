//! Configuration types for the Urban Airship client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AirshipConfig`]: The main configuration struct holding all client settings
//! - [`AirshipConfigBuilder`]: A builder for constructing [`AirshipConfig`] instances
//! - [`Credentials`]: The key, secret and master secret of an application
//! - [`AppKey`], [`AppSecret`], [`MasterSecret`]: Validated credential newtypes
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use urban_airship::{AirshipConfig, Credentials};
//!
//! let config = AirshipConfig::builder()
//!     .credentials(Credentials::new("app-key", "app-secret", "master-secret").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod credentials;
mod newtypes;

pub use credentials::{AuthTier, Credentials};
pub use newtypes::{AppKey, AppSecret, BaseUrl, MasterSecret};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{DiagnosticSink, TracingSink};
use crate::error::ConfigError;

/// Environment variable holding the application key.
pub const ENV_APP_KEY: &str = "AIRSHIP_APP_KEY";
/// Environment variable holding the application secret.
pub const ENV_APP_SECRET: &str = "AIRSHIP_APP_SECRET";
/// Environment variable holding the master secret.
pub const ENV_MASTER_SECRET: &str = "AIRSHIP_MASTER_SECRET";
/// Optional environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "AIRSHIP_BASE_URL";
/// Optional environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "AIRSHIP_TIMEOUT_SECS";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Urban Airship client.
///
/// # Thread Safety
///
/// `AirshipConfig` is `Clone`, `Send`, and `Sync`. Credentials and the
/// diagnostic sink are reference counted, so clones share them.
#[derive(Clone)]
pub struct AirshipConfig {
    credentials: Arc<Credentials>,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl AirshipConfig {
    /// Creates a new builder for constructing an `AirshipConfig`.
    #[must_use]
    pub fn builder() -> AirshipConfigBuilder {
        AirshipConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ENV_APP_KEY`], [`ENV_APP_SECRET`] and [`ENV_MASTER_SECRET`],
    /// plus the optional [`ENV_BASE_URL`] and [`ENV_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if a credential variable is
    /// unset or empty, and [`ConfigError::InvalidBaseUrl`] or
    /// [`ConfigError::InvalidTimeout`] for malformed optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let credentials = Credentials::new(
            lookup(ENV_APP_KEY).unwrap_or_default(),
            lookup(ENV_APP_SECRET).unwrap_or_default(),
            lookup(ENV_MASTER_SECRET).unwrap_or_default(),
        )?;

        let mut builder = Self::builder().credentials(credentials);

        if let Some(url) = lookup(ENV_BASE_URL).filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS).filter(|value| !value.trim().is_empty()) {
            let parsed = value.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
            let secs = parsed.ok_or(ConfigError::InvalidTimeout { value })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the shared credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the sink that receives request diagnostics.
    #[must_use]
    pub const fn diagnostics(&self) -> &Arc<dyn DiagnosticSink> {
        &self.diagnostics
    }
}

impl fmt::Debug for AirshipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirshipConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish_non_exhaustive()
    }
}

// Verify AirshipConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AirshipConfig>();
};

/// Builder for constructing [`AirshipConfig`] instances.
///
/// The key, secret and master secret are required, either all at once via
/// [`credentials`](Self::credentials) or one by one.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `user_agent_prefix`: `None`
/// - `diagnostics`: [`TracingSink`]
#[derive(Default)]
pub struct AirshipConfigBuilder {
    key: Option<AppKey>,
    secret: Option<AppSecret>,
    master_secret: Option<MasterSecret>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl AirshipConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three credentials at once.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.key = Some(credentials.key().clone());
        self.secret = Some(credentials.secret().clone());
        self.master_secret = Some(credentials.master_secret().clone());
        self
    }

    /// Sets the application key (required).
    #[must_use]
    pub fn key(mut self, key: AppKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn secret(mut self, secret: AppSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the master secret (required).
    #[must_use]
    pub fn master_secret(mut self, secret: MasterSecret) -> Self {
        self.master_secret = Some(secret);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the sink that receives request diagnostics.
    #[must_use]
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Builds the [`AirshipConfig`], validating that every credential is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming the first missing
    /// credential, or [`ConfigError::InvalidTimeout`] for a zero timeout.
    pub fn build(self) -> Result<AirshipConfig, ConfigError> {
        let key = self
            .key
            .ok_or(ConfigError::MissingCredentials { field: "key" })?;
        let secret = self
            .secret
            .ok_or(ConfigError::MissingCredentials { field: "secret" })?;
        let master_secret = self.master_secret.ok_or(ConfigError::MissingCredentials {
            field: "master_secret",
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: format!("{timeout:?}"),
            });
        }

        Ok(AirshipConfig {
            credentials: Arc::new(Credentials::from_parts(key, secret, master_secret)),
            base_url: self.base_url.unwrap_or_default(),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingSink)),
        })
    }
}

impl fmt::Debug for AirshipConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirshipConfigBuilder")
            .field("key", &self.key)
            .field("secret", &self.secret)
            .field("master_secret", &self.master_secret)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish_non_exhaustive()
    }
}
