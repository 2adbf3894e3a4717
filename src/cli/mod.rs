//! CLI argument parsing

mod common;
mod group;

use clap::{Parser, Subcommand};

use crate::config::{defaults, graph};

pub use common::OutputFormat;
pub use group::{GroupResource, GroupUserAction, GroupUserAddArgs};

/// SharePoint Online site group CLI
#[derive(Parser, Debug)]
#[command(name = "spoctl")]
#[command(version)]
#[command(about = "Manage SharePoint Online site group membership", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output (shortcut for --log-level debug)
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// SharePoint access token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Microsoft Graph access token (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub graph_token: Option<String>,

    /// Microsoft Graph endpoint used for user lookups
    #[arg(long, global = true, env = graph::ENDPOINT_ENV_VAR, default_value = graph::DEFAULT_ENDPOINT)]
    pub graph_endpoint: String,

    /// Batch mode - no spinners or interactive output
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

impl Cli {
    /// Log level after applying --debug
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// Spinners are hidden in batch and debug mode (they garble log output)
    pub fn quiet(&self) -> bool {
        self.batch || self.debug
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage SharePoint site groups
    #[command(visible_alias = "groups")]
    Group {
        #[command(subcommand)]
        resource: GroupResource,
    },
}
