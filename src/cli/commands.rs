// src/cli/commands.rs
use clap::{ArgAction, Subcommand};

use crate::generators::parse_length;
use crate::models::Preset;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// List the built-in presets with sample passwords
    Presets {
        /// Sample passwords to show per preset
        #[arg(long, short = 'n', default_value_t = 3)]
        samples: usize,
    },

    /// Rate an existing password (read from stdin when omitted)
    Classify {
        /// Password to rate
        password: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Include uppercase letters (A-Z)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub upper: Option<bool>,

    /// Include lowercase letters (a-z)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub lower: Option<bool>,

    /// Include digits (0-9)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub digits: Option<bool>,

    /// Include symbols (!@#...)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub symbols: Option<bool>,

    /// Leave out look-alike characters (0 O l 1 I)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub exclude_similar: Option<bool>,

    /// Leave out ambiguous symbols ({ } [ ] ( ) / \ ' " ~ , ; . < >)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub exclude_ambiguous: Option<bool>,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Start from a preset instead of the configured defaults
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Use the fast user-space generator (demos only)
    #[arg(long, conflicts_with = "seed")]
    pub fast: bool,

    /// Seed the user-space generator for reproducible output (demos only)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the passwords, one per line
    #[arg(long, short, conflicts_with = "json")]
    pub quiet: bool,
}
