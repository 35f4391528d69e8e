// src/logging/mod.rs
use log::LevelFilter;

/// Install the process-wide logger. Output goes to stderr so that stdout
/// carries nothing but generated passwords. `RUST_LOG` still wins when set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .try_init()
}
