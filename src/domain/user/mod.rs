//! User domain
//!
//! Domain types and traits for bank users: the persisted entity, the create
//! command handed to storage, field validation and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{CreateUserCommand, User};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_full_name, validate_password, validate_registration,
    validate_username, UserValidationError, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserRepository;
