//! Microsoft Graph directory lookups
//!
//! SharePoint's share endpoint wants principals, while users type login names
//! or email addresses. This module bridges the two.

mod client;
mod users;

pub use client::GraphClient;
pub use users::{resolve_principals, GraphUser, UserIdentity, UserLookup};
