//! Error types for password generation.

use thiserror::Error;

/// Errors produced while building pools, drawing random values or generating passwords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Every character class is disabled, so there is nothing to draw from.
    #[error("no symbols for creating password: enable letters, numbers or symbols")]
    NoEligibleSymbols,

    /// A random integer was requested from a range whose upper bound is below its lower bound.
    #[error("max cannot be less than min (min: {min}, max: {max})")]
    InvalidRange { min: i64, max: i64 },

    /// A random element was requested from an empty sequence.
    #[error("cannot take a random element from an empty sequence")]
    EmptySequence,

    /// The requested password length is not a positive integer.
    #[error("invalid password length: {0:?}")]
    InvalidLength(String),

    /// The per-class minimums add up to more characters than the password holds.
    #[error("requirements need {required} characters but password length is {length}")]
    RequirementsExceedLength { required: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
