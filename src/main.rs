use std::io;
use std::path::Path;

use clap::Parser;
use console::style;

use rust_passgen::cli::{handlers, Args, CliCommand};
use rust_passgen::{logging, Config};

fn main() {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    if let Err(e) = logging::init(Config::load_log_level()) {
        eprintln!("Failed to initialise logging: {e}");
    }
    let config = Config::load();
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = run(args, &config) {
        log::error!("{:#}", e);
        eprintln!("{} {:#}", style("❌").red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.into_command() {
        CliCommand::Generate(generate) => handlers::handle_generate(&generate, config, &mut out),
        CliCommand::Presets { samples } => handlers::handle_presets(samples, config, &mut out),
        CliCommand::Classify { password } => {
            let stdin = io::stdin();
            handlers::handle_classify(password.as_deref(), &mut stdin.lock(), &mut out)
        }
    }
}
