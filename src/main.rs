use anyhow::Result;
use clap::Parser;

use logtally::cli::Cli;
use logtally::utils::{load_dotenv, resolve_log_level, setup_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv();
    setup_logging(resolve_log_level(&cli));

    let outcome = logtally::run(&cli)?;
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
