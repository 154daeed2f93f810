//! Typed payloads for the Push API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::client::AirshipClient;
use crate::resources::ResourceError;

/// Who receives a push.
///
/// Serializes to the Urban Airship selector format: `"all"` for
/// [`Audience::All`], and a single-key object such as `{"tag": "sports"}`
/// for every other selector. Selectors nest with `and`, `or` and `not`.
///
/// # Example
///
/// ```rust
/// use urban_airship::resources::Audience;
/// use serde_json::json;
///
/// let audience = Audience::Or(vec![
///     Audience::Tag("sports".to_string()),
///     Audience::Alias("bob".to_string()),
/// ]);
/// assert_eq!(
///     serde_json::to_value(&audience).unwrap(),
///     json!({"or": [{"tag": "sports"}, {"alias": "bob"}]})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Every device of the application.
    All,
    /// Devices carrying a tag.
    Tag(String),
    /// Devices registered under an alias.
    Alias(String),
    /// Members of a segment.
    Segment(String),
    /// A single iOS device token.
    DeviceToken(String),
    /// A single Android channel.
    Apid(String),
    /// A named user.
    NamedUser(String),
    /// Devices matching every selector.
    And(Vec<Audience>),
    /// Devices matching any selector.
    Or(Vec<Audience>),
    /// Devices not matching the selector.
    Not(Box<Audience>),
}

/// A platform a push may be delivered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Apple devices.
    Ios,
    /// Android devices.
    Android,
    /// Amazon devices.
    Amazon,
    /// Windows devices.
    Wns,
    /// Web browsers.
    Web,
}

/// The platforms a push targets: `"all"` or an explicit list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceTypes {
    /// Every platform.
    All,
    /// Only the listed platforms.
    Only(Vec<DeviceType>),
}

impl Serialize for DeviceTypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(types) => types.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DeviceTypes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Keyword(String),
            List(Vec<DeviceType>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Keyword(keyword) if keyword == "all" => Ok(Self::All),
            Repr::Keyword(other) => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&other),
                &"\"all\" or a list of device types",
            )),
            Repr::List(types) => Ok(Self::Only(types)),
        }
    }
}

/// What a push says.
///
/// `alert` is the cross-platform text. Platform overrides (`ios`,
/// `android`, ...) and any other notification fields go in `overrides` and
/// are sent as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The cross-platform alert text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// Additional notification fields.
    #[serde(flatten)]
    pub overrides: Map<String, Value>,
}

impl Notification {
    /// Creates a notification with only an alert.
    #[must_use]
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            alert: Some(text.into()),
            overrides: Map::new(),
        }
    }

    /// Adds a platform override or other notification field.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: Value) -> Self {
        self.overrides.insert(key.into(), value);
        self
    }
}

/// A push notification.
///
/// # Example
///
/// ```rust,ignore
/// use urban_airship::resources::{Audience, DeviceTypes, Notification, Push};
///
/// let push = Push::new(
///     Audience::Tag("sports".to_string()),
///     Notification::alert("Kick-off in 10 minutes"),
///     DeviceTypes::All,
/// );
///
/// push.validate(&client).await?;
/// let sent = push.send(&client).await?;
/// println!("operation {:?}", sent.operation_id);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Push {
    /// Who receives the push.
    pub audience: Audience,
    /// What the push says.
    pub notification: Notification,
    /// Which platforms it targets.
    pub device_types: DeviceTypes,
}

impl Push {
    /// Creates a new push.
    #[must_use]
    pub const fn new(audience: Audience, notification: Notification, device_types: DeviceTypes) -> Self {
        Self {
            audience,
            notification,
            device_types,
        }
    }

    /// Asks the API to validate this push without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API rejects the
    /// push.
    pub async fn validate(&self, client: &AirshipClient) -> Result<ValidateResponse, ResourceError> {
        client.push().call_typed("validate", &[], Some(self)).await
    }

    /// Sends this push.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API does not
    /// accept the push.
    pub async fn send(&self, client: &AirshipClient) -> Result<PushResponse, ResourceError> {
        client.push().call_typed("send", &[], Some(self)).await
    }
}

/// The answer to a validation request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ValidateResponse {
    /// Whether the push is valid.
    pub ok: bool,
}

/// The answer to an accepted push.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PushResponse {
    /// Whether the push was accepted.
    pub ok: bool,
    /// Identifies the send operation.
    #[serde(default)]
    pub operation_id: Option<String>,
    /// One identifier per accepted push.
    #[serde(default)]
    pub push_ids: Vec<String>,
}
