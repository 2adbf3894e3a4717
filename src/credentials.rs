//! Access token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, SpoError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct StoredCredentials {
    credentials: HashMap<String, StoredCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct StoredCredential {
    token: String,
}

/// Token resolution with fallback logic, for one API host
pub struct TokenResolver {
    host: String,
    env_vars: &'static [&'static str],
    cli_flag: &'static str,
}

impl TokenResolver {
    /// Resolver for a SharePoint tenant host (e.g. `contoso.sharepoint.com`)
    pub fn sharepoint(host: &str) -> Self {
        Self {
            host: host.to_string(),
            env_vars: credentials::SPO_TOKEN_ENV_VARS,
            cli_flag: "--token",
        }
    }

    /// Resolver for the Microsoft Graph host
    pub fn graph(host: &str) -> Self {
        Self {
            host: host.to_string(),
            env_vars: credentials::GRAPH_TOKEN_ENV_VARS,
            cli_flag: "--graph-token",
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (in order)
    /// 3. Credentials file entry for the host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using {} token from CLI argument", self.host);
            return Ok(token.to_string());
        }

        for env_var in self.env_vars {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using {} token from {} environment variable", self.host, env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            self.env_vars
        );
        let path = Self::get_credentials_path()
            .ok_or_else(|| SpoError::TokenNotFound(self.token_not_found_message(None)))?;
        self.read_from_credentials_file(&path)
    }

    /// Read the token for this host from a credentials file
    fn read_from_credentials_file(&self, credentials_path: &Path) -> Result<String> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = fs::read_to_string(credentials_path).map_err(|_| {
            SpoError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
        })?;

        let creds: StoredCredentials = serde_json::from_str(&content).map_err(|e| {
            SpoError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| {
                SpoError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
            })
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No access token found for host '{}'. Provide a token using one of:\n\
             \n\
             1. CLI argument:      spoctl {} <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Credentials file:  {{\"credentials\": {{\"{}\": {{\"token\": \"<TOKEN>\"}}}}}}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            self.cli_flag,
            self.env_vars.first().copied().unwrap_or_default(),
            self.host,
            self.env_vars.join(", "),
            creds_info
        )
    }

    /// Credentials file path: `$SPOCTL_CREDENTIALS_FILE` or `~/.spoctl/credentials.json`
    fn get_credentials_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(credentials::FILE_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credentials_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::sharepoint("contoso.sharepoint.com");
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_resolvers_use_distinct_env_vars() {
        let spo = TokenResolver::sharepoint("contoso.sharepoint.com");
        let graph = TokenResolver::graph("graph.microsoft.com");
        assert_eq!(spo.env_vars[0], "SPO_ACCESS_TOKEN");
        assert_eq!(graph.env_vars[0], "GRAPH_ACCESS_TOKEN");
    }

    #[test]
    fn test_read_token_for_host_from_file() {
        let file = credentials_file(
            r#"{
                "credentials": {
                    "contoso.sharepoint.com": { "token": "spo-token-123" },
                    "graph.microsoft.com": { "token": "graph-token-456" }
                }
            }"#,
        );

        let spo = TokenResolver::sharepoint("contoso.sharepoint.com");
        assert_eq!(
            spo.read_from_credentials_file(file.path()).unwrap(),
            "spo-token-123"
        );

        let graph = TokenResolver::graph("graph.microsoft.com");
        assert_eq!(
            graph.read_from_credentials_file(file.path()).unwrap(),
            "graph-token-456"
        );
    }

    #[test]
    fn test_read_token_host_missing_from_file() {
        let file = credentials_file(r#"{"credentials": {}}"#);
        let resolver = TokenResolver::sharepoint("fabrikam.sharepoint.com");

        match resolver.read_from_credentials_file(file.path()) {
            Err(SpoError::TokenNotFound(msg)) => {
                assert!(msg.contains("fabrikam.sharepoint.com"));
                assert!(msg.contains(&file.path().display().to_string()));
            }
            other => panic!("Expected SpoError::TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_token_malformed_file() {
        let file = credentials_file("not json");
        let resolver = TokenResolver::sharepoint("contoso.sharepoint.com");

        match resolver.read_from_credentials_file(file.path()) {
            Err(SpoError::Credentials(msg)) => assert!(msg.contains("Could not parse")),
            other => panic!("Expected SpoError::Credentials, got {:?}", other),
        }
    }

    #[test]
    fn test_read_token_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = TokenResolver::graph("graph.microsoft.com");
        let result = resolver.read_from_credentials_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SpoError::TokenNotFound(_))));
    }

    #[test]
    fn test_token_not_found_message_format() {
        let resolver = TokenResolver::graph("graph.microsoft.com");
        let msg = resolver.token_not_found_message(None);
        assert!(msg.contains("graph.microsoft.com"));
        assert!(msg.contains("spoctl --graph-token"));
        assert!(msg.contains("GRAPH_ACCESS_TOKEN"));
        assert!(msg.contains("M365_ACCESS_TOKEN"));
    }
}
