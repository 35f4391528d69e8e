// src/generators/mod.rs
pub mod alphabet;
pub mod password;
pub mod strength;

pub use alphabet::{build_alphabet, Alphabet, AlphabetSpec, CharClass};
pub use password::{check_length, generate, parse_length, RandomSource, MAX_LENGTH};
pub use strength::{classes_in, classify_strength, StrengthRating};

use rand::Rng;

use crate::error::{GeneratorError, Result};
use crate::models::{GeneratedPassword, PasswordGenerationOptions};

/// Builds, draws and rates passwords for a fixed random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    source: RandomSource,
}

impl PasswordGenerator {
    pub fn new(source: RandomSource) -> Self {
        PasswordGenerator { source }
    }

    pub fn source(&self) -> RandomSource {
        self.source
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<GeneratedPassword> {
        let mut rng = self.source.rng();
        self.generate_with(options, &mut rng)
    }

    /// `count` passwords drawn from a single stream of the configured source.
    pub fn generate_batch(
        &self,
        options: &PasswordGenerationOptions,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>> {
        // Surface option errors even when nothing is requested.
        let alphabet = build_alphabet(options.alphabet_spec())?;
        check_length(options.length)?;

        let mut rng = self.source.rng();
        log::info!(
            "Generating {} password(s) of length {} from {} characters ({} source)",
            count,
            options.length,
            alphabet.len(),
            self.source
        );

        (0..count)
            .map(|_| draw(&alphabet, options.length, &mut rng))
            .collect()
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<GeneratedPassword> {
        let alphabet = build_alphabet(options.alphabet_spec())?;
        draw(&alphabet, options.length, rng)
    }
}

fn draw<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Result<GeneratedPassword> {
    let password = generate(alphabet, length, rng)?;
    let strength = classify_strength(&password, alphabet.classes());

    Ok(GeneratedPassword {
        length,
        classes: alphabet.classes().clone(),
        strength,
        password,
    })
}
