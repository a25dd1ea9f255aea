//! Infrastructure layer - storage, hashing, logging and metrics

pub mod logging;
pub mod observability;
pub mod user;
