//! User lookups that translate login names and emails into principals

use log::{debug, warn};
use serde::Deserialize;

use crate::config::graph;
use crate::error::{Result, SpoError};
use crate::http::{api_error, parse_api_response};

use super::GraphClient;

/// Properties requested from the directory
const USER_SELECT: &str = "id,displayName,mail,userPrincipalName";

/// A user as the caller identified them on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdentity {
    /// Login name (user principal name)
    UserName(String),
    /// Primary email address
    Email(String),
}

impl UserIdentity {
    /// The value the user typed
    pub fn value(&self) -> &str {
        match self {
            UserIdentity::UserName(v) | UserIdentity::Email(v) => v,
        }
    }
}

/// Directory user record (subset of the Graph `user` resource)
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
    pub user_principal_name: String,
}

/// Graph collection envelope
#[derive(Deserialize, Debug)]
struct GraphCollection<T> {
    value: Vec<T>,
}

/// Directory lookup used to resolve users before sharing
#[allow(async_fn_in_trait)]
pub trait UserLookup {
    /// Find a user by login name or email; `Ok(None)` if the directory has no match
    async fn find_user(&self, identity: &UserIdentity) -> Result<Option<GraphUser>>;
}

impl GraphClient {
    /// Get a user by user principal name (or object ID)
    pub async fn get_user_by_name(&self, user_name: &str) -> Result<Option<GraphUser>> {
        let url = format!(
            "{}/{}/{}?$select={}",
            self.endpoint(),
            graph::USERS,
            urlencoding::encode(user_name),
            USER_SELECT
        );

        debug!("Looking up user '{}' at: {}", user_name, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => Ok(Some(response.json().await?)),
            404 => Ok(None),
            _ => Err(api_error(response, &format!("retrieve user '{}'", user_name)).await),
        }
    }

    /// Get a user by primary email address
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<GraphUser>> {
        let filter = format!("mail eq '{}'", email.replace('\'', "''"));
        let url = format!(
            "{}/{}?$filter={}&$select={}",
            self.endpoint(),
            graph::USERS,
            urlencoding::encode(&filter),
            USER_SELECT
        );

        debug!("Looking up user with email '{}' at: {}", email, url);

        let response = self.get(&url).send().await?;
        let users: GraphCollection<GraphUser> =
            parse_api_response(response, &format!("retrieve user with email '{}'", email))
                .await?;

        let mut matches = users.value.into_iter();
        match (matches.next(), matches.next()) {
            (None, _) => Ok(None),
            (Some(user), None) => Ok(Some(user)),
            (Some(_), Some(_)) => Err(SpoError::Resolution(format!(
                "Multiple users with email '{}' found",
                email
            ))),
        }
    }
}

impl UserLookup for GraphClient {
    async fn find_user(&self, identity: &UserIdentity) -> Result<Option<GraphUser>> {
        match identity {
            UserIdentity::UserName(name) => self.get_user_by_name(name).await,
            UserIdentity::Email(email) => self.get_user_by_email(email).await,
        }
    }
}

/// Resolve every identity to its principal (user principal name), one at a time
///
/// Unknown users are collected and reported together; any other failure
/// aborts immediately.
pub async fn resolve_principals<L>(lookup: &L, identities: &[UserIdentity]) -> Result<Vec<String>>
where
    L: UserLookup,
{
    let mut principals = Vec::with_capacity(identities.len());
    let mut missing = Vec::new();

    for identity in identities {
        match lookup.find_user(identity).await? {
            Some(user) => {
                debug!(
                    "Resolved '{}' to principal '{}'",
                    identity.value(),
                    user.user_principal_name
                );
                principals.push(user.user_principal_name);
            }
            None => {
                warn!("User '{}' does not exist", identity.value());
                missing.push(identity.value().to_string());
            }
        }
    }

    if !missing.is_empty() {
        return Err(SpoError::Resolution(format!(
            "Users not added to the group because the following users don't exist: {}",
            missing.join(", ")
        )));
    }

    Ok(principals)
}
