//! Outline API error definitions

use std::fmt;

/// Outline API error types
#[derive(Debug)]
pub enum OutlineError {
    /// Port outside 1..=65535, rejected before any request is sent
    InvalidPort(i64),
    /// Server refused the port because it is already bound
    PortInUse,
    /// Hostname or IP address rejected by the server
    InvalidHostname,
    /// Server failed internally while validating the hostname
    HostnameChangeFailed,
    /// Server name rejected
    InvalidName,
    /// No access key with this identifier
    AccessKeyNotFound(String),
    /// Data limit rejected by the server
    InvalidDataLimit,
    /// Transport failure or unexpected HTTP status
    Http(reqwest::Error),
}

impl std::error::Error for OutlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(port) => {
                write!(f, "Invalid port number {}, must be between 1 and 65535", port)
            }
            Self::PortInUse => write!(f, "Port already in use"),
            Self::InvalidHostname => write!(f, "An invalid hostname or IP address was provided"),
            Self::HostnameChangeFailed => write!(
                f,
                "An internal error occurred. This could be thrown if there were network errors while validating the hostname"
            ),
            Self::InvalidName => write!(f, "Invalid name"),
            Self::AccessKeyNotFound(id) => write!(f, "Access key not found: {}", id),
            Self::InvalidDataLimit => write!(f, "Invalid data limit"),
            Self::Http(e) => write!(f, "HTTP error: {}", e),
        }
    }
}

impl From<reqwest::Error> for OutlineError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs embed the secret API path
        Self::Http(e.without_url())
    }
}

impl OutlineError {
    /// HTTP status attached to a transport error, if any
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Outline API result type
pub type OutlineResult<T> = Result<T, OutlineError>;
