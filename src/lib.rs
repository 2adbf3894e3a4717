//! spoctl - Manage SharePoint Online site group membership
//!
//! Adds users to a SharePoint site group. The group is given by ID or name,
//! the users by login name or email; users are resolved through Microsoft
//! Graph and then added with the `SP.Web.ShareObject` endpoint.
//!
//! # Example
//!
//! ```bash
//! # Add a user to group 32 by login name
//! spoctl group user add --webUrl https://contoso.sharepoint.com/sites/SiteA \
//!     --groupId 32 --userName Alex.Wilber@contoso.com
//!
//! # Add users to a group by name, looked up by email, output as JSON
//! spoctl group user add --webUrl https://contoso.sharepoint.com/sites/SiteA \
//!     --groupName "Contoso Site Owners" --email alex@contoso.com,megan@contoso.com -o json
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod graph;
mod http;
pub mod output;
pub mod spo;
pub mod ui;

pub use cli::{Cli, Command, GroupResource, GroupUserAction, GroupUserAddArgs, OutputFormat};
pub use credentials::TokenResolver;
pub use error::{Result, SpoError};
pub use graph::{GraphClient, GraphUser, UserIdentity, UserLookup};
pub use http::extract_error_message;
pub use spo::{
    add_user_to_group, run_group_user_add_command, validate, AddUserRequest, GroupRef, SiteGroup,
    SpoClient, UserSharingResult,
};
