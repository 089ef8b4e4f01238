use crate::models::{Level, LevelCounts};

/// Highest ERROR count a run may report and still pass.
pub const ERROR_THRESHOLD: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    Exceeded { errors: u64, threshold: u64 },
}

pub fn evaluate(counts: &LevelCounts) -> GateOutcome {
    let errors = counts.get(Level::Error);
    if errors > ERROR_THRESHOLD {
        GateOutcome::Exceeded {
            errors,
            threshold: ERROR_THRESHOLD,
        }
    } else {
        GateOutcome::Passed
    }
}
