// src/generators/strength.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generators::alphabet::CharClass;

/// Coarse guessing-difficulty bucket derived from length and class count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthRating {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthRating {
    /// Rate a password of `length` characters drawn from `class_count`
    /// distinct classes.
    ///
    /// | length  | 4 classes  | 3 classes | 2 classes | 0-1 classes |
    /// |---------|------------|-----------|-----------|-------------|
    /// | < 8     | Weak       | Weak      | Weak      | Weak        |
    /// | 8..12   | Strong     | Strong    | Moderate  | Weak        |
    /// | >= 12   | VeryStrong | Strong    | Moderate  | Weak        |
    pub fn from_parts(length: usize, class_count: usize) -> Self {
        if length < 8 {
            return StrengthRating::Weak;
        }

        if length >= 12 && class_count >= 4 {
            StrengthRating::VeryStrong
        } else if class_count >= 3 {
            StrengthRating::Strong
        } else if class_count >= 2 {
            StrengthRating::Moderate
        } else {
            StrengthRating::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Moderate => "Moderate",
            StrengthRating::Strong => "Strong",
            StrengthRating::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate `password` against the classes that were enabled when it was drawn.
pub fn classify_strength(password: &str, enabled_classes: &BTreeSet<CharClass>) -> StrengthRating {
    StrengthRating::from_parts(password.chars().count(), enabled_classes.len())
}

/// Classes that actually occur in `password`, with non-ASCII letters and
/// digits counted. Characters outside the four classes are ignored.
pub fn classes_in(password: &str) -> BTreeSet<CharClass> {
    password.chars().filter_map(CharClass::of).collect()
}
