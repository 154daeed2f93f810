//! The [`AirshipClient`] facade.
//!
//! One `AirshipClient` owns one [`HttpClient`] and hands out a
//! [`ResourceClient`] per resource group, all sharing that pipeline.

use std::sync::Arc;

use serde::Serialize;

use crate::clients::{HttpClient, RequestDescriptor, RequestError, ResponseBody};
use crate::config::{AirshipConfig, AuthTier};
use crate::error::ConfigError;
use crate::resources::{routes, ResourceClient};

/// Client for the Urban Airship API.
///
/// # Thread Safety
///
/// `AirshipClient` is `Send + Sync` and cheap to clone, so it can be shared
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use urban_airship::{AirshipClient, AirshipConfig, Credentials};
/// use serde_json::json;
///
/// let config = AirshipConfig::builder()
///     .credentials(Credentials::new("app-key", "app-secret", "master-secret")?)
///     .build()?;
/// let client = AirshipClient::new(&config)?;
///
/// let body = json!({
///     "audience": {"tag": "sports"},
///     "notification": {"alert": "Kick-off!"},
///     "device_types": "all"
/// });
/// client.push().call("send", Some(&body)).await?;
/// ```
#[derive(Clone, Debug)]
pub struct AirshipClient {
    http: Arc<HttpClient>,
    device_information: ResourceClient,
    device_registration: ResourceClient,
    feed: ResourceClient,
    location: ResourceClient,
    push: ResourceClient,
    reports: ResourceClient,
    schedule: ResourceClient,
    segments: ResourceClient,
    tag: ResourceClient,
}

// Verify AirshipClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AirshipClient>();
};

impl AirshipClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &AirshipConfig) -> Result<Self, ConfigError> {
        let http = Arc::new(HttpClient::new(config)?);
        let group = |resource| ResourceClient::new(Arc::clone(&http), resource);

        Ok(Self {
            device_information: group(&routes::DEVICE_INFORMATION),
            device_registration: group(&routes::DEVICE_REGISTRATION),
            feed: group(&routes::FEED),
            location: group(&routes::LOCATION),
            push: group(&routes::PUSH),
            reports: group(&routes::REPORTS),
            schedule: group(&routes::SCHEDULE),
            segments: group(&routes::SEGMENTS),
            tag: group(&routes::TAG),
            http,
        })
    }

    /// Creates a client configured from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AirshipConfig::from_env`] and [`AirshipClient::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&AirshipConfig::from_env()?)
    }

    /// Returns the shared request pipeline.
    #[must_use]
    pub const fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// The Device Information API.
    #[must_use]
    pub const fn device_information(&self) -> &ResourceClient {
        &self.device_information
    }

    /// The Device Registration API.
    #[must_use]
    pub const fn device_registration(&self) -> &ResourceClient {
        &self.device_registration
    }

    /// The Feed API.
    #[must_use]
    pub const fn feed(&self) -> &ResourceClient {
        &self.feed
    }

    /// The Location API.
    #[must_use]
    pub const fn location(&self) -> &ResourceClient {
        &self.location
    }

    /// The Push API.
    #[must_use]
    pub const fn push(&self) -> &ResourceClient {
        &self.push
    }

    /// The Reports API.
    #[must_use]
    pub const fn reports(&self) -> &ResourceClient {
        &self.reports
    }

    /// The Schedules API.
    #[must_use]
    pub const fn schedule(&self) -> &ResourceClient {
        &self.schedule
    }

    /// The Segments API.
    #[must_use]
    pub const fn segments(&self) -> &ResourceClient {
        &self.segments
    }

    /// The Tag API.
    #[must_use]
    pub const fn tag(&self) -> &ResourceClient {
        &self.tag
    }

    /// Every resource client, in a fixed order.
    #[must_use]
    pub fn resources(&self) -> [&ResourceClient; 9] {
        [
            &self.device_information,
            &self.device_registration,
            &self.feed,
            &self.location,
            &self.push,
            &self.reports,
            &self.schedule,
            &self.segments,
            &self.tag,
        ]
    }

    /// Sends a request to an endpoint that has no routing entry.
    ///
    /// The method is given as text and must be one of `GET`, `POST`, `PUT`
    /// or `DELETE`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidMethod`] or
    /// [`RequestError::InvalidExpectedStatus`] before any network call, or
    /// any error of [`HttpClient::request`].
    pub async fn custom_request<B>(
        &self,
        method: &str,
        path: &str,
        expected_status: u16,
        auth_tier: AuthTier,
        body: Option<&B>,
    ) -> Result<ResponseBody, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let descriptor = RequestDescriptor::parse(method, path, expected_status, auth_tier)?;
        let response = self.http.request(&descriptor, body).await?;
        Ok(response.into_body())
    }
}
