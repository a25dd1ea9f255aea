//! Helpers for generating test and seed data

pub mod currency;
pub mod random;

pub use currency::Currency;
pub use random::RandomGenerator;
