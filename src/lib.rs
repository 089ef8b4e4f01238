use anyhow::Result;
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub mod analyzer;
pub mod cli;
pub mod formatters;
pub mod models;
pub mod utils;

use crate::analyzer::{Analyzer, RunOutcome};
use crate::formatters::Console;
use crate::utils::resolve_seed;

/// Runs one analysis with the settings from the command line.
pub fn run(cli: &cli::Cli) -> Result<RunOutcome> {
    let console = Console::new(cli.color);

    let mut rng = match resolve_seed(cli) {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    Analyzer::new(&cli.file)
        .with_summary_format(cli.summary)
        .run(&console, &mut rng, Local::now().naive_local())
}
