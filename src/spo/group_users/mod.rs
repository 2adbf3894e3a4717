//! Site group users module - add users to a site group through ShareObject

mod api;
mod commands;
mod models;
mod validate;

pub use commands::{add_user_to_group, run_group_user_add_command};
pub use models::{AddUserRequest, ShareObjectRequest, ShareResponse, UserSharingResult};
pub use validate::validate;
