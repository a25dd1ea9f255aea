//! Simplebank API
//!
//! A minimal banking backend exposing user registration over HTTP:
//! - Field validation before any side effect
//! - Argon2id password hashing
//! - PostgreSQL or in-memory user storage with uniqueness classification
//! - Random value helpers for tests and seed data

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use crate::config::StorageBackend;
use domain::DomainError;
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};
use tracing::{info, warn};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let user_service = create_user_service(config).await?;
    Ok(AppState::new(user_service))
}

/// Build the user service for the configured storage backend
pub async fn create_user_service(config: &AppConfig) -> anyhow::Result<Arc<dyn UserServiceTrait>> {
    let hasher = Arc::new(Argon2Hasher::new());

    info!("Storage backend: {:?}", config.storage.backend);

    match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = config.database.resolve_url().ok_or_else(|| {
                DomainError::configuration(
                    "database.url or DATABASE_URL is required for the postgres backend",
                )
            })?;

            let repository =
                PostgresUserRepository::connect(&database_url, config.database.max_connections)
                    .await?;
            repository.migrate().await?;

            Ok(Arc::new(UserService::new(Arc::new(repository), hasher)))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory user storage; users are lost on restart");

            Ok(Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                hasher,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    #[tokio::test]
    async fn test_memory_backend_state() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();
        assert!(state.user_service.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_postgres_backend_requires_url() {
        // SAFETY: no other test in this crate reads or writes DATABASE_URL
        unsafe { std::env::remove_var("DATABASE_URL") };

        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Postgres,
            },
            ..AppConfig::default()
        };

        let err = create_app_state(&config).await.err().unwrap();
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
