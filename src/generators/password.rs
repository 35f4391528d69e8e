// src/generators/password.rs
use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::generators::alphabet::Alphabet;

/// Where random draws come from.
///
/// `Secure` reads the operating system CSPRNG and is what real passwords
/// should use. `Fast` and `Seeded` run ChaCha8 in user space and are meant
/// for demos and reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomSource {
    #[default]
    Secure,
    Fast,
    Seeded(u64),
}

impl RandomSource {
    /// A fresh random stream. Every call starts its own stream, so nothing is
    /// shared between concurrent callers.
    pub fn rng(&self) -> Box<dyn RngCore + Send> {
        match *self {
            RandomSource::Secure => Box::new(OsRng),
            RandomSource::Fast => Box::new(ChaCha8Rng::from_entropy()),
            RandomSource::Seeded(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, RandomSource::Secure)
    }
}

impl fmt::Display for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSource::Secure => write!(f, "secure"),
            RandomSource::Fast => write!(f, "fast"),
            RandomSource::Seeded(seed) => write!(f, "seeded({seed})"),
        }
    }
}

impl FromStr for RandomSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "secure" | "os" => Ok(RandomSource::Secure),
            "fast" | "demo" => Ok(RandomSource::Fast),
            other => Err(format!("unknown random source '{other}'")),
        }
    }
}

/// Longest password `generate` will produce.
pub const MAX_LENGTH: usize = 4096;

/// Fails unless `1 <= length <= MAX_LENGTH`.
pub fn check_length(length: usize) -> Result<usize> {
    if length == 0 || length > MAX_LENGTH {
        return Err(GeneratorError::InvalidLength(length.to_string()));
    }
    Ok(length)
}

/// Parse a user-supplied length. Anything that is not a whole number in
/// `1..=MAX_LENGTH` is an [`GeneratorError::InvalidLength`].
pub fn parse_length(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|length| (1..=MAX_LENGTH).contains(length))
        .ok_or_else(|| GeneratorError::InvalidLength(trimmed.to_string()))
}

/// Draw `length` characters from `alphabet`, each uniformly and
/// independently, with replacement.
pub fn generate<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Result<String> {
    check_length(length)?;
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }

    let chars = alphabet.chars();
    let dist = Uniform::from(0..chars.len());

    Ok((0..length).map(|_| chars[dist.sample(rng)]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::alphabet::{build_alphabet, AlphabetSpec};

    fn digits() -> Alphabet {
        build_alphabet(AlphabetSpec {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
            include_symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
        })
        .unwrap()
    }

    #[test]
    fn test_generate_length_and_membership() {
        let alphabet = build_alphabet(AlphabetSpec::default()).unwrap();
        let mut rng = RandomSource::Secure.rng();
        for length in [1, 8, 16, 64, 128] {
            let password = generate(&alphabet, length, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_generate_pin() {
        let mut rng = RandomSource::Secure.rng();
        let pin = generate(&digits(), 4, &mut rng).unwrap();
        assert_eq!(pin.len(), 4);
        assert!(pin.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_zero_length_fails() {
        let mut rng = RandomSource::Secure.rng();
        assert_eq!(
            generate(&digits(), 0, &mut rng),
            Err(GeneratorError::InvalidLength("0".to_string()))
        );
    }

    #[test]
    fn test_generate_length_bound() {
        let mut rng = RandomSource::Fast.rng();
        let longest = generate(&digits(), MAX_LENGTH, &mut rng).unwrap();
        assert_eq!(longest.len(), MAX_LENGTH);
        assert_eq!(
            generate(&digits(), MAX_LENGTH + 1, &mut rng),
            Err(GeneratorError::InvalidLength((MAX_LENGTH + 1).to_string()))
        );
        assert!(matches!(
            generate(&digits(), usize::MAX, &mut rng),
            Err(GeneratorError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let alphabet = build_alphabet(AlphabetSpec::default()).unwrap();
        let a = generate(&alphabet, 32, &mut RandomSource::Seeded(7).rng()).unwrap();
        let b = generate(&alphabet, 32, &mut RandomSource::Seeded(7).rng()).unwrap();
        let c = generate(&alphabet, 32, &mut RandomSource::Seeded(8).rng()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let alphabet = digits();
        let mut rng = RandomSource::Seeded(2024).rng();
        let draws = 100 * MAX_LENGTH;

        let mut counts = [0usize; 10];
        for _ in 0..100 {
            let sample = generate(&alphabet, MAX_LENGTH, &mut rng).unwrap();
            for c in sample.chars() {
                counts[c.to_digit(10).unwrap() as usize] += 1;
            }
        }

        let expected = draws as f64 / 10.0;
        for (digit, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "digit {digit} drawn {count} times");
        }
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("16"), Ok(16));
        assert_eq!(parse_length(" 12 \n"), Ok(12));
        assert_eq!(parse_length("4096"), Ok(MAX_LENGTH));
        for bad in ["", "abc", "-3", "0", "4.5", "4097", "18446744073709551615"] {
            assert!(
                matches!(parse_length(bad), Err(GeneratorError::InvalidLength(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_random_source_from_str() {
        assert_eq!("secure".parse::<RandomSource>(), Ok(RandomSource::Secure));
        assert_eq!("FAST".parse::<RandomSource>(), Ok(RandomSource::Fast));
        assert!("quantum".parse::<RandomSource>().is_err());
    }
}
