//! Validation errors for locally checked input

use thiserror::Error;

/// A value was rejected before any request was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty
    #[error("{0} is required")]
    Missing(&'static str),

    /// A field is present but malformed
    #[error("{0}")]
    Invalid(String),
}
