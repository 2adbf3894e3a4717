//! Site group API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, SpoError};
use crate::http::api_error;
use crate::spo::SpoClient;

use super::models::{GroupRef, SiteGroup};

/// Error text when a group name does not resolve to a group
pub const GROUP_NOT_FOUND: &str = "The specified group not exist in the SharePoint site";

/// Quote a value as an OData string literal for use inside a URL path
fn odata_string_literal(value: &str) -> String {
    format!("'{}'", urlencoding::encode(&value.replace('\'', "''")))
}

impl SpoClient {
    /// Get a site group by name
    ///
    /// Returns `None` when SharePoint answers 404.
    pub async fn get_site_group_by_name(
        &self,
        web_url: &str,
        name: &str,
    ) -> Result<Option<SiteGroup>> {
        let url = format!(
            "{}({})",
            Self::site_url(web_url, api::SITE_GROUP_BY_NAME),
            odata_string_literal(name)
        );

        debug!("Retrieving site group '{}' from: {}", name, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => Ok(Some(response.json().await?)),
            404 => Ok(None),
            _ => Err(api_error(response, &format!("retrieve group '{}'", name)).await),
        }
    }

    /// Resolve a group reference to its numeric ID
    pub async fn resolve_group_id(&self, web_url: &str, group: &GroupRef) -> Result<u64> {
        match group {
            GroupRef::Id(id) => {
                debug!("Using group ID {} as given", id);
                Ok(*id)
            }
            GroupRef::Name(name) => match self.get_site_group_by_name(web_url, name).await? {
                Some(SiteGroup {
                    id: Some(id),
                    title,
                }) => {
                    debug!(
                        "Resolved group '{}' to ID {} (title '{}')",
                        name,
                        id,
                        title.as_deref().unwrap_or(name)
                    );
                    Ok(id)
                }
                _ => Err(SpoError::Resolution(GROUP_NOT_FOUND.to_string())),
            },
        }
    }
}
