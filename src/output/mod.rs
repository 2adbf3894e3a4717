//! Output formatting module
//!
//! Renders command results as table, CSV, JSON or YAML.

mod common;
mod group_users;

pub use group_users::{output_group_users, DEFAULT_PROPERTIES};
