//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{CreateUserCommand, User, UserRepository};
use crate::domain::StoreError;

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<String, User>,
    /// Index for email -> username lookup
    email_index: HashMap<String, String>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, command: CreateUserCommand) -> Result<User, StoreError> {
        // Both uniqueness checks and the insert happen under one write lock
        let mut table = self.table.write().await;

        if table.users.contains_key(&command.username) {
            return Err(StoreError::unique_violation(format!(
                "Username '{}' already exists",
                command.username
            )));
        }

        if table.email_index.contains_key(&command.email) {
            return Err(StoreError::unique_violation(format!(
                "Email '{}' already exists",
                command.email
            )));
        }

        let user = User::new(command);
        table
            .email_index
            .insert(user.email().to_string(), user.username().to_string());
        table.users.insert(user.username().to_string(), user.clone());

        Ok(user)
    }

    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.users.get(username).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
