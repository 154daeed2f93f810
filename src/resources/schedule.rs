//! Typed payloads for the Schedules API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AirshipClient;
use crate::resources::{Push, ResourceError};

/// When a scheduled push goes out.
///
/// [`ScheduleTime::Utc`] is one instant for every device.
/// [`ScheduleTime::Local`] is a wall-clock time delivered in each device's
/// own time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleTime {
    /// Deliver at an absolute time.
    #[serde(rename = "scheduled_time", with = "wire_time::utc")]
    Utc(DateTime<Utc>),
    /// Deliver at a local time on each device.
    #[serde(rename = "local_scheduled_time", with = "wire_time::local")]
    Local(NaiveDateTime),
}

/// A push to send later.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{TimeZone, Utc};
/// use urban_airship::resources::{Audience, DeviceTypes, Notification, Push, Schedule, ScheduleTime};
///
/// let push = Push::new(Audience::All, Notification::alert("Good morning"), DeviceTypes::All);
/// let at = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();
///
/// let created = Schedule::new(ScheduleTime::Utc(at), push)
///     .named("new-year")
///     .create(&client)
///     .await?;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// A label for the schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When to send.
    pub schedule: ScheduleTime,
    /// What to send.
    pub push: Push,
}

impl Schedule {
    /// Creates an unnamed schedule.
    #[must_use]
    pub const fn new(schedule: ScheduleTime, push: Push) -> Self {
        Self {
            name: None,
            schedule,
            push,
        }
    }

    /// Sets the schedule's name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Creates this schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API does not
    /// create the schedule.
    pub async fn create(&self, client: &AirshipClient) -> Result<ScheduleResponse, ResourceError> {
        client.schedule().call_typed("push", &[], Some(self)).await
    }
}

/// The answer to a created schedule.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScheduleResponse {
    /// Whether the schedule was created.
    pub ok: bool,
    /// Identifies the create operation.
    #[serde(default)]
    pub operation_id: Option<String>,
    /// URLs of the created schedules.
    #[serde(default)]
    pub schedule_urls: Vec<String>,
    /// The created schedules, as returned by the API.
    #[serde(default)]
    pub schedules: Vec<Value>,
}

/// Urban Airship writes schedule times as `YYYY-MM-DDTHH:MM:SS`.
mod wire_time {
    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub mod utc {
        use chrono::{DateTime, NaiveDateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&time.format(super::FORMAT))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
            let text = String::deserialize(deserializer)?;
            if let Ok(time) = DateTime::parse_from_rfc3339(&text) {
                return Ok(time.with_timezone(&Utc));
            }
            NaiveDateTime::parse_from_str(&text, super::FORMAT)
                .map(|naive| naive.and_utc())
                .map_err(serde::de::Error::custom)
        }
    }

    pub mod local {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&time.format(super::FORMAT))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
            let text = String::deserialize(deserializer)?;
            NaiveDateTime::parse_from_str(&text, super::FORMAT).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Audience, DeviceTypes, Notification};
    use chrono::{NaiveDate, TimeZone};
    use serde_json::json;

    fn push() -> Push {
        Push::new(Audience::All, Notification::alert("Wake up"), DeviceTypes::All)
    }

    #[test]
    fn test_utc_schedule_body() {
        let at = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();
        let schedule = Schedule::new(ScheduleTime::Utc(at), push()).named("new-year");

        assert_eq!(
            serde_json::to_value(&schedule).unwrap(),
            json!({
                "name": "new-year",
                "schedule": {"scheduled_time": "2030-01-01T08:00:00"},
                "push": {
                    "audience": "all",
                    "notification": {"alert": "Wake up"},
                    "device_types": "all"
                }
            })
        );
    }

    #[test]
    fn test_local_schedule_omits_missing_name() {
        let at = NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let value = serde_json::to_value(Schedule::new(ScheduleTime::Local(at), push())).unwrap();

        assert!(value.get("name").is_none());
        assert_eq!(
            value["schedule"],
            json!({"local_scheduled_time": "2030-06-15T09:30:00"})
        );
    }

    #[test]
    fn test_schedule_time_reads_both_utc_forms() {
        let expected = ScheduleTime::Utc(Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap());

        let plain: ScheduleTime =
            serde_json::from_value(json!({"scheduled_time": "2030-01-01T08:00:00"})).unwrap();
        let zoned: ScheduleTime =
            serde_json::from_value(json!({"scheduled_time": "2030-01-01T08:00:00Z"})).unwrap();

        assert_eq!(plain, expected);
        assert_eq!(zoned, expected);
    }

    #[test]
    fn test_schedule_response_defaults() {
        let response: ScheduleResponse = serde_json::from_value(json!({
            "ok": true,
            "schedule_urls": ["https://go.urbanairship.com/api/schedules/abc"]
        }))
        .unwrap();

        assert!(response.ok);
        assert_eq!(response.schedule_urls.len(), 1);
        assert!(response.schedules.is_empty());
    }
}
