use clap::ValueEnum;
use dotenv::dotenv;

use crate::cli::Cli;
use crate::models::LogLevel;

pub const SEED_VAR: &str = "LOGTALLY_SEED";
pub const LOG_LEVEL_VAR: &str = "LOGTALLY_LOG";

pub fn load_dotenv() {
    // Load environment variables from .env file in home directory if it exists
    if let Some(home_dir) = dirs::home_dir() {
        let env_path = home_dir.join(".env");
        if env_path.exists() {
            if let Err(e) = dotenv::from_path(env_path) {
                eprintln!(
                    "Warning: Failed to load .env file from home directory: {}",
                    e
                );
            }
        }
    }

    // Also load from current directory if it exists (this will override home directory values)
    let _ = dotenv();
}

pub fn resolve_seed(cli: &Cli) -> Option<u64> {
    if let Some(seed) = cli.seed {
        return Some(seed);
    }

    let raw = std::env::var(SEED_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            eprintln!("Warning: ignoring {}={:?}, not an integer", SEED_VAR, raw);
            None
        }
    }
}

pub fn resolve_log_level(cli: &Cli) -> LogLevel {
    if let Some(level) = cli.log_level {
        return level;
    }

    match std::env::var(LOG_LEVEL_VAR) {
        Ok(raw) => parse_log_level(&raw).unwrap_or_else(|| {
            eprintln!("Warning: ignoring {}={:?}, not a log level", LOG_LEVEL_VAR, raw);
            LogLevel::Warn
        }),
        Err(_) => LogLevel::Warn,
    }
}

pub fn parse_log_level(raw: &str) -> Option<LogLevel> {
    <LogLevel as ValueEnum>::from_str(raw.trim(), true).ok()
}
