/// Configuration constants for SharePoint REST API
pub mod api {
    /// Site group lookup by name (relative to the site URL)
    pub const SITE_GROUP_BY_NAME: &str = "_api/web/sitegroups/GetByName";

    /// Share endpoint used to add principals to a site group
    pub const SHARE_OBJECT: &str = "_api/SP.Web.ShareObject";

    /// Accept header for SharePoint JSON (minimal metadata) responses
    pub const ACCEPT_JSON: &str = "application/json;odata=json";

    /// ShareObject role value prefix for site group targets
    pub const GROUP_ROLE_PREFIX: &str = "group:";
}

/// Configuration constants for Microsoft Graph
pub mod graph {
    /// Default Graph endpoint (v1.0)
    pub const DEFAULT_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";

    /// Environment variable overriding the Graph endpoint
    pub const ENDPOINT_ENV_VAR: &str = "SPOCTL_GRAPH_ENDPOINT";

    /// Users collection
    pub const USERS: &str = "users";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file path (relative to HOME)
    pub const FILE_PATH: &str = ".spoctl/credentials.json";

    /// Environment variable pointing at an alternate credentials file
    pub const FILE_ENV_VAR: &str = "SPOCTL_CREDENTIALS_FILE";

    /// Environment variable names for the SharePoint token (checked in order)
    pub const SPO_TOKEN_ENV_VARS: &[&str] = &["SPO_ACCESS_TOKEN", "M365_ACCESS_TOKEN"];

    /// Environment variable names for the Graph token (checked in order)
    pub const GRAPH_TOKEN_ENV_VARS: &[&str] = &["GRAPH_ACCESS_TOKEN", "M365_ACCESS_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Connect timeout for HTTP requests (seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_relative() {
        assert!(!api::SITE_GROUP_BY_NAME.starts_with('/'));
        assert!(!api::SHARE_OBJECT.starts_with('/'));
    }

    #[test]
    fn test_token_env_vars() {
        assert_eq!(
            credentials::SPO_TOKEN_ENV_VARS,
            &["SPO_ACCESS_TOKEN", "M365_ACCESS_TOKEN"]
        );
        assert_eq!(credentials::GRAPH_TOKEN_ENV_VARS[0], "GRAPH_ACCESS_TOKEN");
    }

    #[test]
    fn test_default_graph_endpoint() {
        assert!(graph::DEFAULT_ENDPOINT.starts_with("https://"));
        assert!(!graph::DEFAULT_ENDPOINT.ends_with('/'));
    }
}
