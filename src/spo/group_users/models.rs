//! ShareObject request/response models

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{Result, SpoError};
use crate::graph::UserIdentity;
use crate::spo::groups::GroupRef;

/// Validated input for adding users to a site group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserRequest {
    /// Site URL without trailing slash
    pub web_url: String,
    pub group: GroupRef,
    /// Users to add; all entries are of the same kind
    pub users: Vec<UserIdentity>,
}

/// One entry of the people picker input
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct PeoplePickerEntry<'a> {
    key: &'a str,
}

/// Body of `POST _api/SP.Web.ShareObject`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareObjectRequest {
    pub url: String,
    /// JSON-encoded array of `{"Key": principal}` (a string, not an array)
    pub people_picker_input: String,
    pub role_value: String,
}

impl ShareObjectRequest {
    /// Build a request that adds `principals` to the site group `group_id`
    pub fn for_group(web_url: &str, group_id: u64, principals: &[String]) -> Result<Self> {
        let entries: Vec<PeoplePickerEntry<'_>> = principals
            .iter()
            .map(|p| PeoplePickerEntry { key: p.trim() })
            .collect();

        Ok(Self {
            url: web_url.to_string(),
            people_picker_input: serde_json::to_string(&entries)?,
            role_value: format!("{}{}", api::GROUP_ROLE_PREFIX, group_id),
        })
    }
}

/// Per-user outcome reported by ShareObject
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserSharingResult {
    #[serde(default)]
    pub allowed_roles: Vec<i64>,
    #[serde(default)]
    pub current_role: i64,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub invitation_link: Option<String>,
    #[serde(default)]
    pub is_user_known: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub user: String,
}

impl UserSharingResult {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Response of ShareObject
///
/// Success and failure are both HTTP 200; the outcome is in `StatusCode`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ShareResponse {
    pub status_code: i32,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Title of the shared site
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub users_added_to_group: Option<Vec<UserSharingResult>>,
}

impl ShareResponse {
    pub fn is_success(&self) -> bool {
        self.status_code == 0
    }

    /// Users added on success, `SpoError::Share` carrying `ErrorMessage` otherwise
    pub fn into_result(self) -> Result<Vec<UserSharingResult>> {
        if self.is_success() {
            return Ok(self.users_added_to_group.unwrap_or_default());
        }
        let message = self.error_message.unwrap_or_else(|| {
            format!("ShareObject failed with status code {}", self.status_code)
        });
        Err(SpoError::Share(message))
    }
}
