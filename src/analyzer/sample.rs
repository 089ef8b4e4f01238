use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use tracing::debug;

use crate::models::Level;

const SAMPLE_DATE: &str = "2024-01-15";

pub const SAMPLE_ENTRIES: [&str; 8] = [
    "2024-01-15 10:30:15 INFO Application started successfully",
    "2024-01-15 10:31:22 WARNING Configuration file not optimized",
    "2024-01-15 10:32:10 ERROR Database connection failed",
    "2024-01-15 10:33:05 INFO User authentication successful",
    "2024-01-15 10:34:18 ERROR File not found: /tmp/data.txt",
    "2024-01-15 10:35:30 WARNING Memory usage at 85%",
    "2024-01-15 10:36:12 INFO Data processing completed",
    "2024-01-15 10:37:45 ERROR Network timeout occurred",
];

/// The fixed entries followed by 5 to 15 random ones.
pub fn sample_lines<R: Rng>(rng: &mut R) -> Vec<String> {
    let mut lines: Vec<String> = SAMPLE_ENTRIES.iter().map(|s| s.to_string()).collect();

    let extra = rng.gen_range(5..=15);
    for _ in 0..extra {
        let hour = rng.gen_range(10..=23);
        let minute = rng.gen_range(0..=59);
        let second = rng.gen_range(0..=59);
        let level = Level::ALL.choose(rng).copied().unwrap_or(Level::Info);
        let id = rng.gen_range(1000..=9999);
        lines.push(format!(
            "{} {:02}:{:02}:{:02} {} Random log entry {}",
            SAMPLE_DATE, hour, minute, second, level, id
        ));
    }

    lines
}

pub fn write_sample_log<R: Rng>(path: &Path, rng: &mut R) -> Result<()> {
    let lines = sample_lines(rng);
    std::fs::write(path, lines.join("\n"))
        .with_context(|| format!("Failed to write sample log to {}", path.display()))?;
    debug!(path = %path.display(), entries = lines.len(), "sample log written");
    Ok(())
}

/// Writes a sample log at `path` unless something already exists there.
/// Returns whether a sample was generated.
pub fn ensure_sample_log<R: Rng>(path: &Path, rng: &mut R) -> Result<bool> {
    let exists = path
        .try_exists()
        .with_context(|| format!("Failed to check {}", path.display()))?;
    if exists {
        return Ok(false);
    }

    write_sample_log(path, rng)?;
    Ok(true)
}
