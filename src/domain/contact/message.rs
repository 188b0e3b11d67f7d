//! Contact form message value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Maximum accepted length of the free-text message.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// A validated message from the contact form.
///
/// # Invariants
///
/// - `name`, `email` and `message` are non-blank after trimming
/// - `email` has a non-empty local part and domain around a single `@`
/// - `message` is at most 5000 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
    received_at: Timestamp,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        let message = message.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Self::validate_email(&email)?;
        if message.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(ValidationError::out_of_range(
                "message",
                1,
                MAX_MESSAGE_LENGTH as i64,
                length as i64,
            ));
        }

        Ok(Self {
            name,
            email,
            message,
            received_at: Timestamp::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn received_at(&self) -> &Timestamp {
        &self.received_at
    }

    fn validate_email(email: &str) -> Result<(), ValidationError> {
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ValidationError::invalid_format(
                "email",
                "expected an address like name@example.com",
            )),
        }
    }
}
