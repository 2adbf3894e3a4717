//! SharePoint REST client

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::api;
use crate::http::build_http_client;

/// SharePoint REST API client
///
/// Endpoints are addressed relative to a site URL supplied per call, so one
/// client serves every site the token is valid for.
pub struct SpoClient {
    client: Client,
    token: String,
}

impl SpoClient {
    /// Create a new SharePoint client with the given access token
    pub fn new(token: String) -> Self {
        Self {
            client: build_http_client(),
            token,
        }
    }

    /// Build an endpoint URL below a site URL
    pub(crate) fn site_url(web_url: &str, path: &str) -> String {
        format!(
            "{}/{}",
            web_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(ACCEPT, api::ACCEPT_JSON)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }
}

#[cfg(test)]
impl SpoClient {
    /// Client with a dummy token for mock-server tests
    pub fn test_client() -> Self {
        Self::new("test-spo-token".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_joins_with_single_slash() {
        assert_eq!(
            SpoClient::site_url("https://contoso.sharepoint.com/sites/SiteA", api::SHARE_OBJECT),
            "https://contoso.sharepoint.com/sites/SiteA/_api/SP.Web.ShareObject"
        );
        assert_eq!(
            SpoClient::site_url("https://contoso.sharepoint.com/sites/SiteA/", "/_api/web"),
            "https://contoso.sharepoint.com/sites/SiteA/_api/web"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = SpoClient::new("my-token".to_string());
        assert_eq!(client.token, "my-token");
    }
}
