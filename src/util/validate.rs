//! Form validation run before any auth request is issued.
//!
//! Checks are ordered name → email → password and stop at the first failure,
//! so one attempt surfaces exactly one message.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::Credentials;

/// Field-level problem that blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter the password")]
    MissingPassword,
}

/// `true` for a conventional `local@domain.tld` address.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// at least one `.` that has text on both sides.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Email first, then password.
///
/// # Errors
///
/// Returns the first failing field's `ValidationError`.
pub fn validate_login(credentials: &Credentials) -> Result<(), ValidationError> {
    if !is_valid_email(&credentials.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if credentials.password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

/// Full name, then email, then password.
///
/// # Errors
///
/// Returns the first failing field's `ValidationError`.
pub fn validate_registration(full_name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if full_name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}
