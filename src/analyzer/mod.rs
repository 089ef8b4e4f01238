mod error;
pub mod gate;
pub mod sample;
pub mod scan;

pub use error::AnalyzeError;
pub use gate::{evaluate, GateOutcome, ERROR_THRESHOLD};
pub use sample::{ensure_sample_log, sample_lines, write_sample_log, SAMPLE_ENTRIES};
pub use scan::{scan_file, scan_reader};

use anyhow::Result;
use chrono::NaiveDateTime;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::formatters::{display_summary, write_report, Console};
use crate::models::{Report, SummaryFormat};

pub const DEFAULT_LOG_FILE: &str = "log.txt";
pub const REPORT_FILE: &str = "rapport.txt";

/// How a run ended. Fatal I/O problems are returned as errors instead.
#[derive(Debug)]
pub enum RunOutcome {
    Passed(Report),
    ThresholdExceeded(Report),
    /// The log file was missing when the scan started.
    Aborted { path: PathBuf },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Passed(_) => 0,
            RunOutcome::ThresholdExceeded(_) | RunOutcome::Aborted { .. } => 1,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            RunOutcome::Passed(report) | RunOutcome::ThresholdExceeded(report) => Some(report),
            RunOutcome::Aborted { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    log_file: PathBuf,
    report_file: PathBuf,
    summary_format: SummaryFormat,
}

impl Analyzer {
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            report_file: PathBuf::from(REPORT_FILE),
            summary_format: SummaryFormat::Plain,
        }
    }

    pub fn with_report_file(mut self, report_file: impl Into<PathBuf>) -> Self {
        self.report_file = report_file.into();
        self
    }

    pub fn with_summary_format(mut self, format: SummaryFormat) -> Self {
        self.summary_format = format;
        self
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn report_file(&self) -> &Path {
        &self.report_file
    }

    /// Generate a sample log if needed, scan it, write the report and apply
    /// the error threshold.
    pub fn run<R: Rng>(
        &self,
        console: &Console,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Result<RunOutcome> {
        console.status("Starting log analysis...");

        if ensure_sample_log(&self.log_file, rng)? {
            console.status(&format!(
                "Sample log generated in `{}`",
                self.log_file.display()
            ));
        }

        self.analyze(console, rng, now)
    }

    /// Scan the log as it is now, write the report and apply the error
    /// threshold. A log that is gone by this point aborts the run.
    pub fn analyze<R: Rng>(
        &self,
        console: &Console,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Result<RunOutcome> {
        let counts = match scan_file(&self.log_file) {
            Ok(counts) => counts,
            Err(AnalyzeError::NotFound(path)) => {
                console.failure(&format!("File `{}` not found", path.display()));
                return Ok(RunOutcome::Aborted { path });
            }
            Err(e) => return Err(e.into()),
        };

        let report = Report::new(&self.log_file, counts, now, rng);
        write_report(&self.report_file, &report)?;
        info!(report = %self.report_file.display(), total = report.total, "report written");
        console.success(&format!("Report written: `{}`", self.report_file.display()));

        display_summary(&report, self.summary_format)?;

        match evaluate(&report.counts) {
            GateOutcome::Passed => {
                console.success("Analysis completed successfully!");
                Ok(RunOutcome::Passed(report))
            }
            GateOutcome::Exceeded { errors, threshold } => {
                debug!(errors, threshold, "error threshold exceeded");
                console.failure(&format!(
                    "ERROR: too many errors detected ({} > {})",
                    errors, threshold
                ));
                Ok(RunOutcome::ThresholdExceeded(report))
            }
        }
    }
}
