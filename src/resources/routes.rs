//! Routing tables for every Urban Airship resource group.
//!
//! Each table is plain data: the operation name, verb, path, the one status
//! that means success, and which secret to send. Groups without operations
//! are placeholders for endpoints that are not bound yet.

use crate::clients::{status, HttpMethod};
use crate::config::AuthTier;
use crate::resources::{Operation, Resource};

/// The Device Information API.
pub static DEVICE_INFORMATION: Resource = Resource::new(
    "device_information",
    &[Operation::new(
        "feedback",
        HttpMethod::Get,
        "/api/device_tokens/feedback",
        status::OK.code,
        AuthTier::Master,
    )],
);

/// The Device Registration API.
pub static DEVICE_REGISTRATION: Resource = Resource::new("device_registration", &[]);

/// The Feed API.
pub static FEED: Resource = Resource::new("feed", &[]);

/// The Location API.
pub static LOCATION: Resource = Resource::new("location", &[]);

/// The Push API.
pub static PUSH: Resource = Resource::new(
    "push",
    &[
        Operation::new(
            "validate",
            HttpMethod::Post,
            "/api/push/validate",
            status::OK.code,
            AuthTier::Master,
        ),
        Operation::new(
            "send",
            HttpMethod::Post,
            "/api/push",
            status::ACCEPTED.code,
            AuthTier::Master,
        ),
    ],
);

/// The Reports API.
pub static REPORTS: Resource = Resource::new("reports", &[]);

/// The Schedules API.
pub static SCHEDULE: Resource = Resource::new(
    "schedule",
    &[Operation::new(
        "push",
        HttpMethod::Post,
        "/api/schedules",
        status::CREATED.code,
        AuthTier::Master,
    )],
);

/// The Segments API.
pub static SEGMENTS: Resource = Resource::new("segments", &[]);

/// The Tag API.
pub static TAG: Resource = Resource::new("tag", &[]);

/// Every resource group, in the order the facade exposes them.
pub static ALL: [&Resource; 9] = [
    &DEVICE_INFORMATION,
    &DEVICE_REGISTRATION,
    &FEED,
    &LOCATION,
    &PUSH,
    &REPORTS,
    &SCHEDULE,
    &SEGMENTS,
    &TAG,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_routes() {
        let validate = PUSH.operation("validate").unwrap();
        assert_eq!(validate.method, HttpMethod::Post);
        assert_eq!(validate.path, "/api/push/validate");
        assert_eq!(validate.expected_status, 200);
        assert_eq!(validate.auth_tier, AuthTier::Master);

        let send = PUSH.operation("send").unwrap();
        assert_eq!(send.method, HttpMethod::Post);
        assert_eq!(send.path, "/api/push");
        assert_eq!(send.expected_status, 202);
        assert_eq!(send.auth_tier, AuthTier::Master);
    }

    #[test]
    fn test_schedule_route() {
        let push = SCHEDULE.operation("push").unwrap();
        assert_eq!(push.method, HttpMethod::Post);
        assert_eq!(push.path, "/api/schedules");
        assert_eq!(push.expected_status, 201);
        assert_eq!(push.auth_tier, AuthTier::Master);
    }

    #[test]
    fn test_placeholders_have_no_operations() {
        for resource in [
            &DEVICE_REGISTRATION,
            &FEED,
            &LOCATION,
            &REPORTS,
            &SEGMENTS,
            &TAG,
        ] {
            assert!(resource.operations.is_empty(), "{}", resource.name);
        }
    }

    #[test]
    fn test_every_route_expects_a_catalogued_status() {
        for resource in ALL {
            for operation in resource.operations {
                assert!(
                    status::is_known(operation.expected_status),
                    "{}.{}",
                    resource.name,
                    operation.name
                );
                assert!(operation.path.starts_with("/api/"));
            }
        }
    }

    #[test]
    fn test_resource_names_are_unique() {
        let mut names: Vec<&str> = ALL.iter().map(|resource| resource.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
