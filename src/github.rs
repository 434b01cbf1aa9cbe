//! # API Client Stub
//!
//! Trait seam for the hosted-API client the CI tool reports through, plus
//! a debug factory whose clients log each request instead of performing
//! it. Code written against the real client's shape runs unchanged with
//! no network dependency; the log output is the inspection surface.

use std::sync::Arc;

use serde_json::Value;

use crate::diag::Diagnostics;

/// Minimal API client surface: fire a request, consume nothing back.
pub trait ApiClient {
    /// Issue a request for `route` with a JSON `options` payload.
    fn request(&self, route: &str, options: &Value);
}

/// Produces [`ApiClient`] instances for an authentication token.
pub trait ApiClientFactory: Send + Sync {
    /// Build a client authenticated as `token`.
    fn client(&self, token: &str) -> Box<dyn ApiClient>;
}

/// Factory for clients that log requests instead of sending them.
pub struct DebugApiFactory {
    diag: Arc<dyn Diagnostics>,
}

impl DebugApiFactory {
    /// Create a debug factory reporting through `diag`.
    pub fn new(diag: Arc<dyn Diagnostics>) -> Self {
        Self { diag }
    }
}

impl ApiClientFactory for DebugApiFactory {
    fn client(&self, _token: &str) -> Box<dyn ApiClient> {
        Box::new(DebugApiClient {
            diag: self.diag.clone(),
        })
    }
}

struct DebugApiClient {
    diag: Arc<dyn Diagnostics>,
}

impl ApiClient for DebugApiClient {
    fn request(&self, route: &str, options: &Value) {
        self.diag.info("Debug api request:");
        self.diag.info(&format!("  route: {route}"));
        self.diag.info(&format!("  options: {options}"));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::diag::{MemoryDiagnostics, Severity};

    use super::*;

    #[test]
    fn test_debug_client_logs_route_and_options() {
        let diag = Arc::new(MemoryDiagnostics::new());
        let factory = DebugApiFactory::new(diag.clone());

        let client = factory.client("token-ignored");
        client.request(
            "POST /repos/{owner}/{repo}/statuses/{sha}",
            &json!({"state": "success", "context": "build"}),
        );

        let info = diag.messages_at(Severity::Info);
        assert_eq!(info.len(), 3);
        assert_eq!(info[0], "Debug api request:");
        assert!(info[1].contains("POST /repos/{owner}/{repo}/statuses/{sha}"));
        assert!(info[2].contains("\"state\":\"success\""));
    }

    #[test]
    fn test_debug_client_performs_no_side_effects_beyond_logging() {
        let diag = Arc::new(MemoryDiagnostics::new());
        let factory = DebugApiFactory::new(diag.clone());

        let client = factory.client("");
        client.request("GET /rate_limit", &json!({}));

        assert!(diag.messages_at(Severity::Error).is_empty());
        assert_eq!(diag.messages_at(Severity::Info).len(), 3);
    }
}
