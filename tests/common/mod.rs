//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use urban_airship::{AirshipClient, AirshipConfig, BaseUrl, Credentials, Diagnostic, DiagnosticSink};

/// `Basic base64("app-key:app-secret")`.
pub const APP_AUTH: &str = "Basic YXBwLWtleTphcHAtc2VjcmV0";

/// `Basic base64("app-key:master-secret")`.
pub const MASTER_AUTH: &str = "Basic YXBwLWtleTptYXN0ZXItc2VjcmV0";

/// A sink that records every diagnostic it receives.
#[derive(Default)]
pub struct CollectingSink(Mutex<Vec<Diagnostic>>);

impl CollectingSink {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.0.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.0.lock().unwrap().push(diagnostic.clone());
    }
}

/// Creates a client pointed at a mock server, with a collecting sink.
pub fn create_client(base_url: &str) -> (AirshipClient, Arc<CollectingSink>) {
    create_client_with_timeout(base_url, Duration::from_secs(5))
}

/// Same as [`create_client`], with a custom timeout.
pub fn create_client_with_timeout(
    base_url: &str,
    timeout: Duration,
) -> (AirshipClient, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::default());
    let config = AirshipConfig::builder()
        .credentials(Credentials::new("app-key", "app-secret", "master-secret").unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .timeout(timeout)
        .diagnostics(sink.clone())
        .build()
        .unwrap();
    (AirshipClient::new(&config).unwrap(), sink)
}
