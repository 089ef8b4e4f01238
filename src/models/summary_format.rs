use clap::ValueEnum;

/// How the counts are echoed to the console once the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Plain,
    Table,
    Json,
}
