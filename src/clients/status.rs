//! Catalog of the HTTP status codes documented by the Urban Airship API.
//!
//! Every operation declares exactly one expected status from this catalog.
//! The hints are attached to diagnostics when a response comes back with a
//! different status.
//!
//! # Example
//!
//! ```rust
//! use urban_airship::clients::status;
//!
//! let entry = status::lookup(202).unwrap();
//! assert_eq!(entry.name, "ACCEPTED");
//! assert!(status::is_known(404));
//! assert!(!status::is_known(500));
//! ```

/// A documented response status with its symbolic name and a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusEntry {
    /// The numeric HTTP status code.
    pub code: u16,
    /// The symbolic name (e.g., `"NOT_FOUND"`).
    pub name: &'static str,
    /// What the status means in Urban Airship terms.
    pub hint: &'static str,
}

/// 200: the request succeeded.
pub const OK: StatusEntry = StatusEntry {
    code: 200,
    name: "OK",
    hint: "Nice work!",
};

/// 201: the request created one or more entities.
pub const CREATED: StatusEntry = StatusEntry {
    code: 201,
    name: "CREATED",
    hint: "An API request to create a new entity or entities was succesful, the entities were created.",
};

/// 202: the request was queued for later processing.
pub const ACCEPTED: StatusEntry = StatusEntry {
    code: 202,
    name: "ACCEPTED",
    hint: "An API request has been succesfully accepted into a processing queue to be acted on later.",
};

/// 204: the request succeeded with no body.
pub const NO_CONTENT: StatusEntry = StatusEntry {
    code: 204,
    name: "NO_CONTENT",
    hint: "An API request was successful, but there’s no response body to return. Often seen on successful DELETE calls.",
};

/// 400: the request could not be parsed or validated.
pub const BAD_REQUEST: StatusEntry = StatusEntry {
    code: 400,
    name: "BAD_REQUEST",
    hint: "Parsing or validating the request failed",
};

/// 401: the credentials were missing or wrong.
pub const UNAUTHORIZED: StatusEntry = StatusEntry {
    code: 401,
    name: "UNAUTHORIZED",
    hint: "Authentication information (the app key & secret) was either incorrect or missing",
};

/// 403: the credentials lack permission for the endpoint.
pub const FORBIDDEN: StatusEntry = StatusEntry {
    code: 403,
    name: "FORBIDDEN",
    hint: "Authentication was correct, but the user does not have permission to access the requested API",
};

/// 404: the entity does not exist.
pub const NOT_FOUND: StatusEntry = StatusEntry {
    code: 404,
    name: "NOT_FOUND",
    hint: "Returned when a request is made for a non-existent entity.",
};

/// 405: the endpoint does not support the method.
pub const METHOD_NOT_ALLOWED: StatusEntry = StatusEntry {
    code: 405,
    name: "METHOD_NOT_ALLOWED",
    hint: "Returned when a request is made using an HTTP method not supported by the endpoint. For example, sending a DELETE to /api/schedules.",
};

/// 406: the requested API version is not available.
pub const UNACCEPTABLE: StatusEntry = StatusEntry {
    code: 406,
    name: "UNACCEPTABLE",
    hint: "Return when the client requests a version of the API which cannot be satisfied, because no compatible version is currently deployed.",
};

static CATALOG: [StatusEntry; 10] = [
    OK,
    CREATED,
    ACCEPTED,
    NO_CONTENT,
    BAD_REQUEST,
    UNAUTHORIZED,
    FORBIDDEN,
    NOT_FOUND,
    METHOD_NOT_ALLOWED,
    UNACCEPTABLE,
];

/// Looks up the catalog entry for a status code.
#[must_use]
pub fn lookup(code: u16) -> Option<&'static StatusEntry> {
    CATALOG.iter().find(|entry| entry.code == code)
}

/// Returns `true` if the status code is documented in the catalog.
#[must_use]
pub fn is_known(code: u16) -> bool {
    lookup(code).is_some()
}

/// Returns every catalog entry, ordered by status code.
#[must_use]
pub fn entries() -> &'static [StatusEntry] {
    &CATALOG
}
