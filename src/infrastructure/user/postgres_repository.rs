//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::{debug, info};

use crate::domain::user::{CreateUserCommand, User, UserRepository};
use crate::domain::{StoreError, StoreErrorKind};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        username            VARCHAR PRIMARY KEY,
        hashed_password     VARCHAR NOT NULL,
        full_name           VARCHAR NOT NULL,
        email               VARCHAR UNIQUE NOT NULL,
        password_changed_at TIMESTAMPTZ NOT NULL DEFAULT '1970-01-01 00:00:00Z',
        created_at          TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `database_url`
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::other(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!("PostgreSQL connection established");
        Ok(Self::new(pool))
    }

    /// Create the users table if it does not exist yet
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to create users table", e))?;

        debug!("users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, command: CreateUserCommand) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, hashed_password, full_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING username, hashed_password, full_name, email,
                      password_changed_at, created_at
            "#,
        )
        .bind(&command.username)
        .bind(&command.hashed_password)
        .bind(&command.full_name)
        .bind(&command.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let err = map_sqlx_error("Failed to create user", e);

            match err.kind() {
                StoreErrorKind::UniqueViolation if err.message().contains("email") => {
                    StoreError::unique_violation(format!("Email '{}' already exists", command.email))
                }
                StoreErrorKind::UniqueViolation => StoreError::unique_violation(format!(
                    "Username '{}' already exists",
                    command.username
                )),
                StoreErrorKind::Other => err,
            }
        })?;

        row_to_user(&row)
    }

    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT username, hashed_password, full_name, email,
                   password_changed_at, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to get user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Database ping failed", e))?;

        Ok(())
    }
}

/// Map a driver error onto the store's classification.
///
/// Only SQLSTATE 23505 (unique_violation) is treated as a duplicate.
fn map_sqlx_error(context: &str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            let constraint = db_err.constraint().unwrap_or("unique constraint");
            StoreError::unique_violation(format!("{}: duplicate value violates {}", context, constraint))
        }
        _ => StoreError::other(format!("{}: {}", context, err)),
    }
}

fn row_to_user(row: &PgRow) -> Result<User, StoreError> {
    let column_error = |e: sqlx::Error| StoreError::other(format!("Invalid user row in database: {}", e));

    let command = CreateUserCommand {
        username: row.try_get("username").map_err(column_error)?,
        hashed_password: row.try_get("hashed_password").map_err(column_error)?,
        full_name: row.try_get("full_name").map_err(column_error)?,
        email: row.try_get("email").map_err(column_error)?,
    };
    let password_changed_at: DateTime<Utc> =
        row.try_get("password_changed_at").map_err(column_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column_error)?;

    Ok(User::restore(command, password_changed_at, created_at))
}
