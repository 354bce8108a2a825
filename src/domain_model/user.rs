use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// A directory entry. Records are never removed; `is_deleted` marks a soft delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    #[validate(range(min = 4, max = 130, message = "age must be between 4 and 130"))]
    pub age: i64,
    pub is_deleted: bool,
}

impl User {
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

/// ASCII letters and digits only, at least two characters, at least one of each.
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let alphanumeric = password.len() >= 2 && password.bytes().all(|b| b.is_ascii_alphanumeric());
    let has_letter = password.bytes().any(|b| b.is_ascii_alphabetic());
    let has_digit = password.bytes().any(|b| b.is_ascii_digit());

    if alphanumeric && has_letter && has_digit {
        return Ok(());
    }
    Err(ValidationError::new("password_pattern")
        .with_message(Cow::Borrowed("Password must contain letters and numbers")))
}
