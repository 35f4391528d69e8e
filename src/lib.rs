//! rust_passgen
//!
//! Random password generation with a small set of character-class toggles
//! and a coarse strength rating. The `passgen` binary is a thin command-line
//! adapter over [`generators::PasswordGenerator`].

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::error::{GeneratorError, Result};
pub use crate::generators::{
    build_alphabet, classes_in, classify_strength, generate, parse_length, Alphabet, AlphabetSpec,
    CharClass, PasswordGenerator, RandomSource, StrengthRating,
};
pub use crate::models::{GeneratedPassword, PasswordGenerationOptions, Preset};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
