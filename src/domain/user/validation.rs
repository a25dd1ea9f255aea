//! User validation utilities

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters are allowed")]
    InvalidUsernameCharacter(char),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} bytes")]
    PasswordTooLong(usize),

    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email '{0}' is not a valid address")]
    InvalidEmail(String),
}

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Upper bound on the password size accepted for hashing, in bytes.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Only ASCII letters and digits
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if let Some(c) = username.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(UserValidationError::InvalidUsernameCharacter(c));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 6 characters
/// - Maximum 128 bytes
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), UserValidationError> {
    if full_name.is_empty() {
        return Err(UserValidationError::EmptyFullName);
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !email.validate_email() {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validate every field of a registration, collecting all violations
pub fn validate_registration(
    username: &str,
    password: &str,
    full_name: &str,
    email: &str,
) -> Result<(), Vec<UserValidationError>> {
    let errors: Vec<UserValidationError> = [
        validate_username(username),
        validate_password(password),
        validate_full_name(full_name),
        validate_email(email),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
