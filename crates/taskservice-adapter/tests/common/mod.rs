/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskservice-adapter tests

use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing.
///
/// Uses a dedicated (non-pooled) server so that dropping the returned
/// `MockServer` closes its listener; `MockServer::start()` hands out pooled
/// servers whose port stays open after drop.
pub async fn setup_mock_server() -> MockServer {
    MockServer::builder().start().await
}

/// A full task body as the backend returns it
pub fn task_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "url": "https://boards.example/listings",
        "site_type": "classifieds",
        "status": status,
        "criteria": {"selectors": [".row"]},
        "created_at": "2026-03-05T12:00:00Z",
        "updated_at": "2026-03-05T12:00:00Z"
    })
}

/// A listing page wrapping the given items
pub fn page_json(items: Vec<Value>, total: u64) -> Value {
    json!({
        "items": items,
        "total": total,
        "limit": 50,
        "offset": 0
    })
}
