//! Random password generator
//!
//! Produces passwords that always contain at least one lowercase letter,
//! one uppercase letter, one digit and one special character.
//!
//! This is a usability generator, not a secrets generator. The default
//! source is `rand::thread_rng()`, and any [`Rng`] can be injected, including
//! seeded non-cryptographic ones. Do not use it to mint keys or tokens.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Smallest length that fits one character of each mandatory class.
pub const MIN_LENGTH: usize = 4;

/// Length used by interactive callers when the user picks none.
pub const DEFAULT_LENGTH: usize = 16;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Every character the generator may emit.
const ALL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                           ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                           0123456789\
                           !@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {requested} is too short, minimum is {minimum}")]
    InvalidLength { requested: usize, minimum: usize },
}

/// Password generator backed by an injectable random source.
#[derive(Debug)]
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a password of exactly `length` ASCII characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidLength`] when `length` is below
    /// [`MIN_LENGTH`].
    pub fn generate(&mut self, length: usize) -> Result<SecretString, GeneratorError> {
        if length < MIN_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password generation rejected: length {} < {}", length, MIN_LENGTH);
            return Err(GeneratorError::InvalidLength {
                requested: length,
                minimum: MIN_LENGTH,
            });
        }

        let mut chars: Vec<u8> = Vec::with_capacity(length);

        for class in [LOWERCASE, UPPERCASE, DIGITS, SPECIAL] {
            chars.push(self.pick(class));
        }
        for _ in MIN_LENGTH..length {
            chars.push(self.pick(ALL_CHARS));
        }

        chars.shuffle(&mut self.rng);

        #[cfg(feature = "tracing")]
        tracing::debug!("Generated password of length {}", length);

        let password: String = chars.into_iter().map(char::from).collect();
        Ok(SecretString::new(password.into()))
    }

    fn pick(&mut self, set: &[u8]) -> u8 {
        set[self.rng.gen_range(0..set.len())]
    }
}

/// Generates a password using the thread-local random source.
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    PasswordGenerator::new().generate(length)
}
