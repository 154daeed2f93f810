//! Resource groups of the Urban Airship API.
//!
//! Every group is served by one generic [`ResourceClient`] driven by a
//! routing table ([`Resource`]). Calling an operation looks up its
//! [`Operation`] entry, builds a [`RequestDescriptor`] from it, and hands it
//! to the shared [`HttpClient`].
//!
//! The typed helpers ([`Push`], [`Schedule`], [`DeviceFeedback`]) are thin
//! wrappers over the same routing tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let body = json!({
//!     "audience": "all",
//!     "notification": {"alert": "Hello"},
//!     "device_types": "all"
//! });
//!
//! let answer = client.push().call("validate", Some(&body)).await?;
//! assert_eq!(answer.get("ok"), Some(&json!(true)));
//! ```

mod device_information;
mod errors;
mod push;
pub mod routes;
mod schedule;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpMethod, RequestDescriptor, ResponseBody};
use crate::config::AuthTier;

pub use device_information::DeviceFeedback;
pub use errors::ResourceError;
pub use push::{
    Audience, DeviceType, DeviceTypes, Notification, Push, PushResponse, ValidateResponse,
};
pub use schedule::{Schedule, ScheduleResponse, ScheduleTime};

/// One named operation of a resource group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The operation's name within its group.
    pub name: &'static str,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path, relative to the base URL.
    pub path: &'static str,
    /// The only status that counts as success.
    pub expected_status: u16,
    /// Which secret authenticates the call.
    pub auth_tier: AuthTier,
}

impl Operation {
    /// Creates a new routing entry.
    #[must_use]
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        expected_status: u16,
        auth_tier: AuthTier,
    ) -> Self {
        Self {
            name,
            method,
            path,
            expected_status,
            auth_tier,
        }
    }

    /// Builds the request descriptor for one call of this operation.
    fn descriptor(&self, query: &[(&str, &str)]) -> Result<RequestDescriptor, ResourceError> {
        let builder = query.iter().fold(
            RequestDescriptor::builder(self.method, self.path)
                .expected_status(self.expected_status)
                .auth_tier(self.auth_tier),
            |builder, (key, value)| builder.query_param(*key, *value),
        );
        builder.build().map_err(ResourceError::from)
    }
}

/// A resource group: a name and its routing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    /// The group name.
    pub name: &'static str,
    /// The operations the group supports.
    pub operations: &'static [Operation],
}

impl Resource {
    /// Creates a new resource group.
    #[must_use]
    pub const fn new(name: &'static str, operations: &'static [Operation]) -> Self {
        Self { name, operations }
    }

    /// Finds an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&'static Operation> {
        let operations: &'static [Operation] = self.operations;
        operations.iter().find(|operation| operation.name == name)
    }
}

/// Generic client for one resource group.
///
/// Cloning is cheap; all clones share the same [`HttpClient`].
#[derive(Clone, Debug)]
pub struct ResourceClient {
    http: Arc<HttpClient>,
    resource: &'static Resource,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client for `resource` over a shared pipeline.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>, resource: &'static Resource) -> Self {
        Self { http, resource }
    }

    /// Returns the resource group this client serves.
    #[must_use]
    pub const fn resource(&self) -> &'static Resource {
        self.resource
    }

    /// Returns the operations this client supports.
    #[must_use]
    pub const fn operations(&self) -> &'static [Operation] {
        self.resource.operations
    }

    /// Invokes a named operation.
    ///
    /// `body` is serialized to JSON when present. Resolves with the parsed
    /// JSON body, or the raw text when the body is not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownOperation`] if the group has no such
    /// operation (no request is sent), or [`ResourceError::Request`] if the
    /// request fails.
    pub async fn call<B>(&self, operation: &str, body: Option<&B>) -> Result<ResponseBody, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        self.call_with_query(operation, &[], body).await
    }

    /// Invokes a named operation with query parameters.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    pub async fn call_with_query<B>(
        &self,
        operation: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ResponseBody, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        let entry = self.lookup(operation)?;
        self.invoke(entry, query, body).await
    }

    /// Invokes a named operation and decodes the answer into `T`.
    pub(crate) async fn call_typed<T, B>(
        &self,
        operation: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let entry = self.lookup(operation)?;
        let body = self.invoke(entry, query, body).await?;
        body.deserialize().map_err(|e| ResourceError::Decode {
            resource: self.resource.name,
            operation: entry.name,
            message: e.to_string(),
        })
    }

    async fn invoke<B>(
        &self,
        entry: &Operation,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ResponseBody, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        let descriptor = entry.descriptor(query)?;
        let response = self.http.request(&descriptor, body).await?;
        Ok(response.into_body())
    }

    fn lookup(&self, operation: &str) -> Result<&'static Operation, ResourceError> {
        self.resource
            .operation(operation)
            .ok_or_else(|| ResourceError::UnknownOperation {
                resource: self.resource.name,
                operation: operation.to_string(),
            })
    }
}
