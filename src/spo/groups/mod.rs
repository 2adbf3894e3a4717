//! Site groups module - resolve groups by ID or name

mod api;
mod models;

pub use api::GROUP_NOT_FOUND;
pub use models::{GroupRef, SiteGroup};
