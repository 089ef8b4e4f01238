use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::AnalyzeError;
use crate::models::LevelCounts;

/// Counts level markers in every line of `path`.
///
/// A missing file is reported as [`AnalyzeError::NotFound`] so the caller can
/// abort cleanly; any other failure (permissions, invalid UTF-8) comes back as
/// [`AnalyzeError::Read`].
pub fn scan_file(path: &Path) -> Result<LevelCounts, AnalyzeError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalyzeError::NotFound(path.to_path_buf()),
        _ => AnalyzeError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let counts = scan_reader(BufReader::new(file)).map_err(|source| AnalyzeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), total = counts.total(), "scan finished");
    Ok(counts)
}

pub fn scan_reader<B: BufRead>(reader: B) -> io::Result<LevelCounts> {
    let mut counts = LevelCounts::new();
    for line in reader.lines() {
        counts.record_line(&line?);
    }
    Ok(counts)
}
