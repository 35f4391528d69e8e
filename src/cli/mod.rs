// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Args {
    pub fn into_command(self) -> CliCommand {
        self.command.unwrap_or(CliCommand::Generate(self.generate))
    }
}
