// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generators::{AlphabetSpec, CharClass, StrengthRating};

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn alphabet_spec(&self) -> AlphabetSpec {
        AlphabetSpec {
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
            exclude_similar: self.exclude_similar,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

/// A password together with what is known about how it was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    pub strength: StrengthRating,
}

/// What `--json` prints: every password of a request, or why there are none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    pub passwords: Vec<GeneratedPassword>,
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn from_result(result: &crate::error::Result<Vec<GeneratedPassword>>) -> Self {
        match result {
            Ok(passwords) => Self {
                success: true,
                passwords: passwords.clone(),
                error: None,
            },
            Err(e) => Self {
                success: false,
                passwords: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Ready-made option sets for common needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Basic,
    High,
    Maximum,
    Pin,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Basic, Preset::High, Preset::Maximum, Preset::Pin];

    pub fn options(self) -> PasswordGenerationOptions {
        let all = PasswordGenerationOptions::default();
        match self {
            Preset::Basic => PasswordGenerationOptions {
                length: 8,
                include_symbols: false,
                ..all
            },
            Preset::High => PasswordGenerationOptions { length: 12, ..all },
            Preset::Maximum => PasswordGenerationOptions { length: 16, ..all },
            Preset::Pin => PasswordGenerationOptions {
                length: 4,
                include_uppercase: false,
                include_lowercase: false,
                include_digits: true,
                include_symbols: false,
                ..all
            },
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Basic => "Basic security (8 chars, letters + numbers)",
            Preset::High => "High security (12 chars, all types)",
            Preset::Maximum => "Maximum security (16 chars, all types)",
            Preset::Pin => "PIN code (4 digits)",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Basic => write!(f, "basic"),
            Preset::High => write!(f, "high"),
            Preset::Maximum => write!(f, "maximum"),
            Preset::Pin => write!(f, "pin"),
        }
    }
}
