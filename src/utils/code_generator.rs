//! Random short code generation.
//!
//! Codes are fixed-length strings drawn uniformly from an alphanumeric
//! alphabet. Generation is pure randomness with no reservation; collision
//! handling is the allocation loop's job.

use rand::seq::IndexedRandom;

/// The 62-symbol alphabet short codes are drawn from.
pub const CODE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of characters per short code.
///
/// Six characters over 62 symbols give roughly 56.8 billion possible codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generator of fixed-length random short codes.
///
/// The alphabet and length are fixed at construction. Production code uses
/// [`CODE_ALPHABET`]; tests constrain both to force collisions.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator over [`CODE_ALPHABET`] with the given code length.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn new(length: usize) -> Self {
        Self::with_alphabet(CODE_ALPHABET, length)
    }

    /// Creates a generator over a custom alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is empty or `length` is zero.
    pub fn with_alphabet(alphabet: &str, length: usize) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        assert!(length > 0, "code length must be positive");

        Self {
            alphabet: alphabet.chars().collect(),
            length,
        }
    }

    /// Generates one code, each character drawn independently and uniformly.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                // The alphabet is non-empty by construction.
                *self
                    .alphabet
                    .choose(&mut rng)
                    .expect("alphabet is non-empty")
            })
            .collect()
    }
}
