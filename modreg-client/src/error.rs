//! Error types for the registry client
//!
//! Two layers: [`TransportError`] is what the HTTP layer reports, and
//! [`CatalogError`] is what catalog operations hand to callers. The display
//! text of a `CatalogError` is shown to users verbatim, so its messages are
//! fixed strings.

use modreg_core::ValidationError;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Message for failed searches and version listings
pub const FETCH_MODULES_FAILED: &str = "Failed to fetch modules";

/// Message for a failed source download while loading details
pub const LOAD_DETAILS_FAILED: &str = "Failed to load module details";

/// Message for a failed registration request
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Message when the versions endpoint returns no module record
pub const MODULE_NOT_FOUND: &str = "Module not found";

/// Message when the module record lists no usable version
pub const NO_VERSIONS_FOUND: &str = "No versions found for module";

/// Network failure, non-2xx status, or unreadable body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(*status, message))]
pub struct TransportError {
    /// HTTP status code, when a response was received
    pub status: Option<u16>,
    /// Human-readable description
    pub message: String,
}

fn describe(status: Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("request failed (status {}): {}", status, message),
        None => format!("request failed: {}", message),
    }
}

impl TransportError {
    /// Create an error for a response with the given status
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create an error that carries no status
    ///
    /// Used when no response was received or when a response could not be used.
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Errors surfaced by catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The registry could not be reached or answered with an error.
    /// Only the fixed message is displayed; the cause is kept as the source.
    #[error("{message}")]
    Fetch {
        message: &'static str,
        #[source]
        source: TransportError,
    },

    /// The registry answered, but the expected record is absent
    #[error("{0}")]
    NotFound(&'static str),

    /// The request was rejected before being sent
    #[error("{0}")]
    InvalidRequest(#[from] ValidationError),
}

impl CatalogError {
    pub(crate) fn fetch(message: &'static str, source: TransportError) -> Self {
        Self::Fetch { message, source }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
            || matches!(
                self,
                Self::Fetch {
                    source: TransportError {
                        status: Some(404),
                        ..
                    },
                    ..
                }
            )
    }

    /// HTTP status of the underlying transport failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { source, .. } => source.status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(
            TransportError::with_status(502, "Bad Gateway").to_string(),
            "request failed (status 502): Bad Gateway"
        );
        assert_eq!(
            TransportError::other("connection refused").to_string(),
            "request failed: connection refused"
        );
    }

    #[test]
    fn test_fetch_error_hides_cause() {
        let err = CatalogError::fetch(
            FETCH_MODULES_FAILED,
            TransportError::with_status(500, "database exploded"),
        );
        assert_eq!(err.to_string(), "Failed to fetch modules");
        assert_eq!(err.status(), Some(500));
        assert!(
            err.source()
                .map(|s| s.to_string().contains("database exploded"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(CatalogError::NotFound(MODULE_NOT_FOUND).is_not_found());
        assert!(
            CatalogError::fetch(LOAD_DETAILS_FAILED, TransportError::with_status(404, ""))
                .is_not_found()
        );
        assert!(
            !CatalogError::fetch(FETCH_MODULES_FAILED, TransportError::other("timeout"))
                .is_not_found()
        );
        assert_eq!(
            CatalogError::NotFound(NO_VERSIONS_FOUND).to_string(),
            "No versions found for module"
        );
    }

    #[test]
    fn test_invalid_request_display() {
        let err = CatalogError::from(ValidationError::Missing("email"));
        assert_eq!(err.to_string(), "email is required");
        assert_eq!(err.status(), None);
    }
}
