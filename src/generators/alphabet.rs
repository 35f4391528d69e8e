// src/generators/alphabet.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse with one another when read back.
pub const SIMILAR: &str = "0Ol1I";

/// Symbols that tend to break when pasted into shells, config files or URLs.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"~,;.<>";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// The class a character belongs to, if any. Letters and digits count
    /// in any script; symbols are ASCII punctuation only.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_numeric() {
            Some(CharClass::Digit)
        } else if c.is_ascii_punctuation() {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Upper => write!(f, "uppercase"),
            CharClass::Lower => write!(f, "lowercase"),
            CharClass::Digit => write!(f, "digits"),
            CharClass::Symbol => write!(f, "symbols"),
        }
    }
}

/// Which classes to draw from and which characters to leave out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetSpec {
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for AlphabetSpec {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl AlphabetSpec {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_uppercase,
            CharClass::Lower => self.include_lowercase,
            CharClass::Digit => self.include_digits,
            CharClass::Symbol => self.include_symbols,
        }
    }

    fn excludes(&self, c: char) -> bool {
        (self.exclude_similar && SIMILAR.contains(c))
            || (self.exclude_ambiguous && AMBIGUOUS.contains(c))
    }
}

/// The realized character set: every character at most once, in class order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    classes: BTreeSet<CharClass>,
}

impl Alphabet {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Classes with at least one member left after exclusions.
    pub fn classes(&self) -> &BTreeSet<CharClass> {
        &self.classes
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the alphabet described by `spec`.
///
/// Classes are concatenated upper, lower, digits, symbols. Duplicates are
/// dropped (first occurrence wins) so that sampling stays uniform over
/// distinct characters. Fails with [`GeneratorError::EmptyAlphabet`] when no
/// character survives.
pub fn build_alphabet(spec: AlphabetSpec) -> Result<Alphabet> {
    let mut chars: Vec<char> = Vec::new();
    let mut classes = BTreeSet::new();

    for class in CharClass::ALL {
        if !spec.includes(class) {
            continue;
        }
        for c in class.characters().chars() {
            if spec.excludes(c) || chars.contains(&c) {
                continue;
            }
            chars.push(c);
            classes.insert(class);
        }
    }

    if chars.is_empty() {
        log::debug!("Alphabet is empty for {:?}", spec);
        return Err(GeneratorError::EmptyAlphabet);
    }

    log::debug!(
        "Built alphabet of {} characters from classes {:?}",
        chars.len(),
        classes
    );

    Ok(Alphabet { chars, classes })
}
