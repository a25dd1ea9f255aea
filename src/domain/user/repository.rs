//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{CreateUserCommand, User};
use crate::domain::StoreError;

/// Repository trait for user storage
///
/// Implementations enforce username and email uniqueness and report a
/// duplicate with [`StoreErrorKind::UniqueViolation`](crate::domain::StoreErrorKind).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, command: CreateUserCommand) -> Result<User, StoreError>;

    /// Get a user by username
    async fn get(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
