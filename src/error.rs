// src/error.rs
use thiserror::Error;

/// Failures reported by the password core. Both are recoverable: the caller
/// fixes its input and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error(
        "Invalid password length {0:?}: expected a whole number from 1 to {max}",
        max = crate::generators::password::MAX_LENGTH
    )]
    InvalidLength(String),

    #[error("No characters to choose from: select at least one character type")]
    EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
