// src/cli/handlers.rs
use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use console::style;

use crate::cli::GenerateArgs;
use crate::core::config::Config;
use crate::generators::{classes_in, classify_strength, PasswordGenerator, RandomSource};
use crate::models::{PasswordGenerationOptions, PasswordGenerationResponse, Preset};
use crate::utils::{format_classes, styled_strength};

// Handlers for CLI commands

/// Options for a request: preset or configured defaults, then flag overrides.
pub fn resolve_options(args: &GenerateArgs, config: &Config) -> PasswordGenerationOptions {
    let mut options = args
        .preset
        .map(Preset::options)
        .unwrap_or(config.default_options);

    if let Some(length) = args.length {
        options.length = length;
    }
    if let Some(upper) = args.upper {
        options.include_uppercase = upper;
    }
    if let Some(lower) = args.lower {
        options.include_lowercase = lower;
    }
    if let Some(digits) = args.digits {
        options.include_digits = digits;
    }
    if let Some(symbols) = args.symbols {
        options.include_symbols = symbols;
    }
    if let Some(exclude) = args.exclude_similar {
        options.exclude_similar = exclude;
    }
    if let Some(exclude) = args.exclude_ambiguous {
        options.exclude_ambiguous = exclude;
    }

    options
}

pub fn resolve_source(args: &GenerateArgs, config: &Config) -> RandomSource {
    match (args.seed, args.fast) {
        (Some(seed), _) => RandomSource::Seeded(seed),
        (None, true) => RandomSource::Fast,
        (None, false) => config.random_source,
    }
}

pub fn handle_generate<W: Write>(args: &GenerateArgs, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let options = resolve_options(args, config);
    let generator = PasswordGenerator::new(resolve_source(args, config));

    if !generator.source().is_secure() {
        log::warn!(
            "Using the {} random source: output is not suitable for real secrets",
            generator.source()
        );
    }

    let result = generator.generate_batch(&options, args.count);

    if args.json {
        let response = PasswordGenerationResponse::from_result(&result);
        serde_json::to_writer_pretty(&mut *out, &response).context("Failed to write JSON output")?;
        writeln!(out)?;
    }

    let passwords = result?;
    if args.json {
        return Ok(());
    }

    for generated in &passwords {
        if args.quiet {
            writeln!(out, "{}", generated.password)?;
        } else {
            writeln!(out, "✅ Generated Password: {}", style(&generated.password).bold())?;
            writeln!(out, "   Password Strength: {}", styled_strength(generated.strength))?;
        }
    }

    if !args.quiet && !passwords.is_empty() {
        writeln!(
            out,
            "   Character types: {} ({} characters each)",
            format_classes(&passwords[0].classes),
            options.length
        )?;
    }

    Ok(())
}

pub fn handle_presets<W: Write>(samples: usize, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let generator = PasswordGenerator::new(config.random_source);

    for preset in Preset::ALL {
        let description = preset.description();
        writeln!(out, "{} ({})", style(description).bold(), preset)?;
        writeln!(out, "{}", "-".repeat(description.chars().count()))?;

        let batch = generator.generate_batch(&preset.options(), samples)?;
        for (i, generated) in batch.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} ({})",
                i + 1,
                generated.password,
                styled_strength(generated.strength)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Rate a password by the classes it actually contains.
pub fn handle_classify<R: BufRead, W: Write>(
    password: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password.to_string(),
        None => {
            let mut line = String::new();
            input
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("No password given to classify");
    }

    let classes = classes_in(&password);
    let strength = classify_strength(&password, &classes);

    writeln!(out, "Password Strength: {}", styled_strength(strength))?;
    writeln!(
        out,
        "Length: {}, character types: {}",
        password.chars().count(),
        format_classes(&classes)
    )?;

    Ok(())
}
