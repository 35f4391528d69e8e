// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::generators::{check_length, RandomSource};
use crate::models::PasswordGenerationOptions;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_options: PasswordGenerationOptions,
    pub random_source: RandomSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_options: PasswordGenerationOptions::default(),
            random_source: RandomSource::Secure,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Malformed values are logged and
    /// the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let options = &mut config.default_options;

        // Password Generation
        if let Some(length) = parsed(&lookup, "DEFAULT_PASSWORD_LENGTH") {
            match check_length(length) {
                Ok(length) => options.length = length,
                Err(e) => log::warn!("DEFAULT_PASSWORD_LENGTH: {}, keeping {}", e, options.length),
            }
        }

        let flags: [(&str, &mut bool); 6] = [
            ("DEFAULT_PASSWORD_UPPERCASE", &mut options.include_uppercase),
            ("DEFAULT_PASSWORD_LOWERCASE", &mut options.include_lowercase),
            ("DEFAULT_PASSWORD_DIGITS", &mut options.include_digits),
            ("DEFAULT_PASSWORD_SYMBOLS", &mut options.include_symbols),
            ("DEFAULT_PASSWORD_EXCLUDE_SIMILAR", &mut options.exclude_similar),
            ("DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS", &mut options.exclude_ambiguous),
        ];
        for (key, flag) in flags {
            if let Some(value) = parsed(&lookup, key) {
                *flag = value;
            }
        }

        // Random source
        if let Some(source) = lookup("RANDOM_SOURCE") {
            match source.parse() {
                Ok(source) => config.random_source = source,
                Err(e) => log::warn!("{}, using {}", e, config.random_source),
            }
        }

        if let Some(seed) = parsed(&lookup, "RANDOM_SEED") {
            config.random_source = RandomSource::Seeded(seed);
        }

        // Logging is set up before the config is read; only report bad values here
        if let Some(level) = lookup("LOG_LEVEL") {
            if parse_log_level(&level).is_none() {
                log::warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            }
        }

        config
    }

    /// Read before `load` so the logger is up and config warnings are not lost.
    pub fn load_log_level() -> LevelFilter {
        log_level_from(|key| env::var(key).ok())
    }
}

pub fn log_level_from<F>(lookup: F) -> LevelFilter
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_LEVEL")
        .and_then(|level| parse_log_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring malformed {}={:?}", key, raw);
            None
        }
    }
}
