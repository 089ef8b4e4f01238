use clap::Parser;
use std::path::PathBuf;

use crate::analyzer::DEFAULT_LOG_FILE;
use crate::models::{ColorChoice, LogLevel, SummaryFormat};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "logtally",
    about = "Count ERROR, WARNING and INFO entries in a log file and write a summary report",
    version
)]
pub struct Cli {
    /// Path to the log file to analyze (a sample is generated if it does not exist)
    #[arg(short = 'f', long = "file", default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,

    /// When to color console messages
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Format of the summary printed after the report is written
    #[arg(long = "summary", value_enum, default_value_t = SummaryFormat::Plain)]
    pub summary: SummaryFormat,

    /// Seed for the sample log and report numbers
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Diagnostic log level
    #[arg(short = 'l', long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,
}
