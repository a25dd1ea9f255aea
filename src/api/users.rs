//! User registration endpoint

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{DomainError, User};
use crate::infrastructure::observability::{record_registration, RegistrationOutcome};
use crate::infrastructure::user::CreateUserRequest;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

/// Registration payload; every field is required
#[derive(Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

impl From<RegistrationRequest> for CreateUserRequest {
    fn from(request: RegistrationRequest) -> Self {
        Self {
            username: request.username,
            password: request.password,
            full_name: request.full_name,
            email: request.email,
        }
    }
}

/// User response; the only serialized form of a user, without the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_changed_at: String,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            full_name: user.full_name().to_string(),
            email: user.email().to_string(),
            password_changed_at: user.password_changed_at().to_rfc3339(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

fn outcome_for(err: &DomainError) -> RegistrationOutcome {
    match err {
        DomainError::Validation { .. } => RegistrationOutcome::Invalid,
        DomainError::Conflict { .. } => RegistrationOutcome::Conflict,
        _ => RegistrationOutcome::Failed,
    }
}

/// Register a new user
///
/// POST /users
///
/// Returns the created user without its password hash. Invalid input is a
/// 400, a duplicate username or email a 403, anything else a 500.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(username = %request.username, "Registering user");

    match state.user_service.create(request.into()).await {
        Ok(user) => {
            record_registration(RegistrationOutcome::Created);
            info!(username = %user.username(), "User created");

            Ok(Json(UserResponse::from(&user)))
        }
        Err(err) => {
            record_registration(outcome_for(&err));

            if err.is_client_error() {
                debug!(error = %err, "Registration rejected");
            }

            Err(ApiError::from(err))
        }
    }
}
