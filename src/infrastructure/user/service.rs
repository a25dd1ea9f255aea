//! User service for registration

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{validate_registration, CreateUserCommand, User, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .finish()
    }
}

/// User service: validates, hashes and persists new users
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher + 'static> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    ///
    /// Validation failures return before the hasher or the repository is
    /// touched. The repository is called at most once.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let CreateUserRequest {
            username,
            password,
            full_name,
            email,
        } = request;

        validate_registration(&username, &password, &full_name, &email).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            DomainError::validation(messages.join("; "))
        })?;

        // Argon2 is CPU-bound; keep it off the async workers
        let hasher = Arc::clone(&self.hasher);
        let hashed_password = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))??;

        debug!(username = %username, "Persisting new user");

        let command = CreateUserCommand {
            username,
            hashed_password,
            full_name,
            email,
        };

        self.repository
            .create(command)
            .await
            .map_err(DomainError::from)
    }

    /// Get a user by username
    pub async fn get(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository
            .get(username)
            .await
            .map_err(DomainError::from)
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await.map_err(DomainError::from)
    }

    /// Verify a plaintext password against a stored user's hash
    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        self.hasher.verify(password, user.hashed_password())
    }
}
