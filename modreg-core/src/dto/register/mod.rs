//! Account registration DTOs

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest password the registration form accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// Request to register a new account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form before it is sent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Missing("username"));
        }

        if self.email.trim().is_empty() {
            return Err(ValidationError::Missing("email"));
        }

        let well_formed = self
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !well_formed {
            return Err(ValidationError::Invalid(
                "email must be a valid address".to_string(),
            ));
        }

        if self.password.is_empty() {
            return Err(ValidationError::Missing("password"));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::Invalid(format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(())
    }
}
