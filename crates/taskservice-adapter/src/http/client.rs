/*
[INPUT]:  Backend base address
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation and shared send helpers
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{RequestError, Result};
use crate::types::{ErrorBody, HealthStatus};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Default base address of a locally run backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main HTTP client for the TaskService API.
///
/// The base address is fixed at construction. Requests carry no timeout and
/// are never retried: a stalled backend is visible to the caller as a future
/// that stays pending.
#[derive(Debug, Clone)]
pub struct TaskServiceClient {
    http_client: Client,
    base_url: Url,
}

impl TaskServiceClient {
    /// Create a client for the given base address
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http_client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build full URL for an endpoint path
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint path
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        debug!(method = %method, url = %url, "api request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON body on success
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error_from_body(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request whose success response carries no body (204)
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error_from_body(status, &body));
        }
        Ok(())
    }

    /// Check backend liveness
    ///
    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus> {
        let builder = self.api_request(Method::GET, "/health")?;
        self.send_json(builder).await
    }
}

/// Normalize a non-success response into an API error. The message is the
/// body's `detail` string when it decodes as one, otherwise `HTTP <status>`.
fn api_error_from_body(status: StatusCode, body: &str) -> RequestError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    warn!(status = status.as_u16(), message = %message, "api error response");
    RequestError::api(status, message)
}
