//! Typed payloads for the Device Information API.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::client::AirshipClient;
use crate::resources::ResourceError;

const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const INACTIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A device token that the push service reported as inactive.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use urban_airship::resources::DeviceFeedback;
///
/// let since = (Utc::now() - Duration::days(7)).naive_utc();
/// for entry in DeviceFeedback::since(&client, since).await? {
///     println!("{} went inactive", entry.device_token);
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeviceFeedback {
    /// The inactive device token.
    pub device_token: String,
    /// When the token was marked inactive, as sent by the API.
    pub marked_inactive_on: String,
    /// The alias the token was registered under.
    #[serde(default)]
    pub alias: Option<String>,
}

impl DeviceFeedback {
    /// Lists the tokens marked inactive since the given UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the answer is not a
    /// list of feedback entries.
    pub async fn since(client: &AirshipClient, since: NaiveDateTime) -> Result<Vec<Self>, ResourceError> {
        let since = since.format(QUERY_FORMAT).to_string();
        client
            .device_information()
            .call_typed::<_, ()>("feedback", &[("since", since.as_str())], None)
            .await
    }

    /// Parses [`marked_inactive_on`](Self::marked_inactive_on).
    #[must_use]
    pub fn marked_inactive_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.marked_inactive_on, INACTIVE_FORMAT).ok()
    }
}
