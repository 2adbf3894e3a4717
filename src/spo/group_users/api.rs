//! ShareObject API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::http::parse_api_response;
use crate::spo::SpoClient;

use super::models::{ShareObjectRequest, ShareResponse, UserSharingResult};

impl SpoClient {
    /// POST to `SP.Web.ShareObject` and return the raw response
    pub async fn share_object(
        &self,
        web_url: &str,
        request: &ShareObjectRequest,
    ) -> Result<ShareResponse> {
        let url = Self::site_url(web_url, api::SHARE_OBJECT);

        debug!(
            "Sharing with {} via {} (roleValue={})",
            request.people_picker_input, url, request.role_value
        );

        let response = self.post(&url).json(request).send().await?;
        parse_api_response(response, "share object").await
    }

    /// Add principals to a site group
    ///
    /// Fails with `SpoError::Share` when ShareObject reports a non-zero status code.
    pub async fn add_users_to_group(
        &self,
        web_url: &str,
        group_id: u64,
        principals: &[String],
    ) -> Result<Vec<UserSharingResult>> {
        let request = ShareObjectRequest::for_group(web_url, group_id, principals)?;
        let response = self.share_object(web_url, &request).await?;

        debug!(
            "ShareObject returned status code {} for group {} on site '{}'",
            response.status_code,
            group_id,
            response.name.as_deref().unwrap_or(web_url)
        );

        response.into_result()
    }
}
