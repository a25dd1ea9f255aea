//! User entity and related types

use chrono::{DateTime, Utc};

/// Input to the store's create operation.
///
/// Built only after the plaintext password has been replaced by its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub username: String,
    pub hashed_password: String,
    pub full_name: String,
    pub email: String,
}

/// Persisted bank user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique login name
    username: String,
    /// Argon2 password hash in PHC format
    hashed_password: String,
    full_name: String,
    /// Unique contact address
    email: String,
    /// Last password change; the Unix epoch until the first change
    password_changed_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a create command, stamped with the current time
    pub fn new(command: CreateUserCommand) -> Self {
        Self::restore(command, DateTime::<Utc>::UNIX_EPOCH, Utc::now())
    }

    /// Rebuild a user from stored values
    pub fn restore(
        command: CreateUserCommand,
        password_changed_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: command.username,
            hashed_password: command.hashed_password,
            full_name: command.full_name,
            email: command.email,
            password_changed_at,
            created_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_changed_at(&self) -> DateTime<Utc> {
        self.password_changed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
