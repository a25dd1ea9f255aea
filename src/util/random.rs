//! Random value generation for tests and seed data.
//!
//! Values come from an explicit generator instance rather than a process-wide
//! source, so a fixed seed reproduces the same sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::Currency;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const OWNER_LENGTH: usize = 6;
const MAX_MONEY: i64 = 1000;

/// Uniform random generator for test data
#[derive(Debug, Clone)]
pub struct RandomGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same values
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random integer in `[min, max]`, both inclusive
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Random lowercase ASCII string of `length` letters
    pub fn random_string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ALPHABET[self.rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }

    /// Random account owner name
    pub fn random_owner(&mut self) -> String {
        self.random_string(OWNER_LENGTH)
    }

    /// Random amount of money in `[0, 1000]`
    pub fn random_money(&mut self) -> i64 {
        self.random_int(0, MAX_MONEY)
    }

    /// Random supported currency
    pub fn random_currency(&mut self) -> Currency {
        *Currency::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Currency::Usd)
    }

    /// Random address under `email.com`
    pub fn random_email(&mut self) -> String {
        format!("{}@email.com", self.random_string(8))
    }

    /// Random two-word name with capitalized words
    pub fn random_full_name(&mut self) -> String {
        let first = capitalize(&self.random_string(5));
        let last = capitalize(&self.random_string(7));
        format!("{} {}", first, last)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_int_in_range() {
        let mut generator = RandomGenerator::seeded(7);

        for _ in 0..1000 {
            let value = generator.random_int(-5, 5);
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    fn test_random_int_covers_bounds() {
        let mut generator = RandomGenerator::seeded(11);

        let seen: HashSet<i64> = (0..1000).map(|_| generator.random_int(1, 3)).collect();
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_random_int_single_value_range() {
        let mut generator = RandomGenerator::seeded(1);
        assert_eq!(generator.random_int(42, 42), 42);
    }

    #[test]
    fn test_random_string() {
        let mut generator = RandomGenerator::seeded(3);

        let value = generator.random_string(32);
        assert_eq!(value.len(), 32);
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(generator.random_string(0), "");
    }

    #[test]
    fn test_random_owner() {
        let mut generator = RandomGenerator::seeded(5);

        let owner = generator.random_owner();
        assert_eq!(owner.len(), 6);
        assert!(owner.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_random_money() {
        let mut generator = RandomGenerator::seeded(9);

        for _ in 0..1000 {
            let money = generator.random_money();
            assert!((0..=1000).contains(&money));
        }
    }

    #[test]
    fn test_random_currency_covers_all() {
        let mut generator = RandomGenerator::seeded(13);

        let seen: HashSet<Currency> = (0..300).map(|_| generator.random_currency()).collect();
        assert_eq!(seen.len(), Currency::ALL.len());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomGenerator::seeded(2024);
        let mut b = RandomGenerator::seeded(2024);

        for _ in 0..20 {
            assert_eq!(a.random_owner(), b.random_owner());
            assert_eq!(a.random_money(), b.random_money());
            assert_eq!(a.random_currency(), b.random_currency());
        }
    }

    #[test]
    fn test_random_registration_fields_are_valid() {
        use crate::domain::user::{validate_email, validate_full_name, validate_username};

        let mut generator = RandomGenerator::from_entropy();

        for _ in 0..50 {
            assert!(validate_username(&generator.random_owner()).is_ok());
            assert!(validate_email(&generator.random_email()).is_ok());
            assert!(validate_full_name(&generator.random_full_name()).is_ok());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bob"), "Bob");
        assert_eq!(capitalize(""), "");
    }
}
