//! Site group command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resources under the 'group' command
#[derive(Subcommand, Debug)]
pub enum GroupResource {
    /// Manage the users of a site group
    #[command(visible_alias = "users")]
    User {
        #[command(subcommand)]
        action: GroupUserAction,
    },
}

/// Actions under 'group user'
#[derive(Subcommand, Debug)]
pub enum GroupUserAction {
    /// Add a user to a SharePoint site group
    Add(GroupUserAddArgs),
}

/// Arguments for 'group user add'
///
/// The groupId/groupName and userName/email pairs are mutually exclusive.
/// Both pairs are checked in `spo::validate`, not by clap.
#[derive(Parser, Debug, Clone)]
pub struct GroupUserAddArgs {
    /// Absolute URL of the SharePoint site
    #[arg(short = 'u', long = "webUrl", visible_alias = "web-url")]
    pub web_url: String,

    /// Numeric ID of the site group
    #[arg(long = "groupId", visible_alias = "group-id")]
    pub group_id: Option<String>,

    /// Name of the site group
    #[arg(long = "groupName", visible_alias = "group-name")]
    pub group_name: Option<String>,

    /// Login name(s) of the user(s) to add (comma-separated)
    #[arg(long = "userName", visible_alias = "user-name")]
    pub user_name: Option<String>,

    /// Email address(es) of the user(s) to add (comma-separated)
    #[arg(long)]
    pub email: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
