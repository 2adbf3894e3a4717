//! Microsoft Graph HTTP client

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::http::build_http_client;

/// Microsoft Graph API client (directory lookups only)
pub struct GraphClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl GraphClient {
    /// Create a new Graph client for the given endpoint (e.g. `https://graph.microsoft.com/v1.0`)
    pub fn new(token: String, endpoint: &str) -> Self {
        Self {
            client: build_http_client(),
            token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint all request paths are relative to
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
    }
}

#[cfg(test)]
impl GraphClient {
    /// Client with a dummy token pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-graph-token".to_string(), base_url)
    }
}
