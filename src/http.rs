//! Shared HTTP plumbing for the SharePoint and Graph clients

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::defaults;
use crate::error::{Result, SpoError};

/// Build a reqwest client with the connection settings used by all API clients
pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Parse a JSON response, returning an API error for non-success status codes
pub(crate) async fn parse_api_response<T>(
    response: reqwest::Response,
    error_context: &str,
) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(api_error(response, error_context).await);
    }
    Ok(response.json().await?)
}

/// Turn a failed response into `SpoError::Api`, keeping the service's own
/// error text when the body carries one
pub(crate) async fn api_error(response: reqwest::Response, error_context: &str) -> SpoError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!("{} failed with status {}: {}", error_context, status, body);

    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| extract_error_message(&v));

    let message = match detail {
        Some(detail) => format!("Failed to {}: {}", error_context, detail),
        None => format!("Failed to {}", error_context),
    };
    SpoError::Api { status, message }
}

/// Extract the error text from SharePoint (OData) or Graph error bodies
///
/// Handles `odata.error.message.value` (minimal metadata),
/// `error.message.value` (verbose) and `error.message` (Graph).
pub fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    let error = body.get("odata.error").or_else(|| body.get("error"))?;
    let message = error.get("message")?;
    message
        .get("value")
        .and_then(|v| v.as_str())
        .or_else(|| message.as_str())
        .map(str::to_string)
}
