//! SharePoint Online API client and commands

mod client;
pub mod group_users;
pub mod groups;

pub use client::SpoClient;
pub use group_users::{
    add_user_to_group, run_group_user_add_command, validate, AddUserRequest, ShareObjectRequest,
    ShareResponse, UserSharingResult,
};
pub use groups::{GroupRef, SiteGroup};
