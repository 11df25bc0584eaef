//! HTTP transport seam for the device flow.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::{DeviceFlowError, Result};

/// Transport consumed by the device flow engine.
///
/// The engine only needs two primitives: a single form-encoded POST that
/// returns the decoded JSON body, and a sleep. Sleep lives on the transport
/// so tests can run the polling loop without wall-clock time, and so a
/// deployment can inject cancellation by making either primitive observe an
/// external signal and return an error.
pub trait DeviceFlowTransport: Send + Sync {
    /// POST `params` form-encoded to `url` and decode the JSON body.
    ///
    /// Implementations must fail with [`DeviceFlowError::Network`] on
    /// connection failure. A body that is not valid JSON decodes to an
    /// empty object, which the engine treats as silent non-progress.
    fn post_form(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> impl std::future::Future<Output = Result<Value>> + Send;

    /// Wait before the next poll.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Default transport backed by [`reqwest`] and [`tokio::time::sleep`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with `Accept: application/json` installed.
    ///
    /// GitHub's OAuth endpoints answer form-encoded by default; the accept
    /// header switches them to JSON.
    ///
    /// # Errors
    /// Returns [`DeviceFlowError::Network`] if the underlying HTTP client
    /// cannot be built.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DeviceFlowError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl DeviceFlowTransport for HttpTransport {
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| DeviceFlowError::network(format!("Failed to connect to GitHub: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| DeviceFlowError::network(format!("Failed to read response body: {e}")))?;

        // The OAuth endpoints report protocol errors in the body, so the
        // HTTP status is not inspected here. An undecodable body reads as
        // an empty object.
        Ok(serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new())))
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
