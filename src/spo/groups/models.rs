//! Site group models

use serde::Deserialize;

/// How the target site group was specified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    /// Numeric group ID, used without a lookup
    Id(u64),
    /// Group name, resolved through GetByName
    Name(String),
}

impl std::fmt::Display for GroupRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupRef::Id(id) => write!(f, "{}", id),
            GroupRef::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// SharePoint site group as returned by the REST API
///
/// Every field is optional: a lookup that yields an object without `Id`
/// is treated as "group not found" by the resolver.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SiteGroup {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}
