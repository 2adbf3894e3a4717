use std::fmt;

/// Custom error type for SharePoint operations
#[derive(Debug)]
pub enum SpoError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Command options failed validation
    Validation(String),
    /// Group or user could not be resolved
    Resolution(String),
    /// ShareObject returned a non-zero status code
    Share(String),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SpoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpoError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SpoError::Validation(msg) => write!(f, "{}", msg),
            SpoError::Resolution(msg) => write!(f, "{}", msg),
            SpoError::Share(msg) => write!(f, "{}", msg),
            SpoError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            SpoError::TokenNotFound(msg) => write!(f, "{}", msg),
            SpoError::Credentials(msg) => write!(f, "{}", msg),
            SpoError::Json(msg) => write!(f, "JSON error: {}", msg),
            SpoError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SpoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpoError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpoError {
    fn from(err: reqwest::Error) -> Self {
        SpoError::Http(err)
    }
}

impl From<serde_json::Error> for SpoError {
    fn from(err: serde_json::Error) -> Self {
        SpoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for SpoError {
    fn from(err: std::io::Error) -> Self {
        SpoError::Credentials(err.to_string())
    }
}

/// Result type alias for SharePoint operations
pub type Result<T> = std::result::Result<T, SpoError>;
