use chrono::NaiveDateTime;
use rand::Rng;
use std::path::{Path, PathBuf};

use super::LevelCounts;

pub const LUCKY_NUMBER_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct Report {
    pub generated_at: NaiveDateTime,
    pub source: PathBuf,
    pub counts: LevelCounts,
    pub total: u64,
    // Decorative only, drawn from [1, 100]
    pub lucky_numbers: Vec<u32>,
}

impl Report {
    pub fn new<R: Rng>(
        source: &Path,
        counts: LevelCounts,
        generated_at: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        let lucky_numbers = (0..LUCKY_NUMBER_COUNT)
            .map(|_| rng.gen_range(1..=100))
            .collect();

        Self {
            generated_at,
            source: source.to_path_buf(),
            counts,
            total: counts.total(),
            lucky_numbers,
        }
    }
}
