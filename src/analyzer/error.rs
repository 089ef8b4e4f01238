use std::io;
use std::path::PathBuf;

/// Failures while reading the log file.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("File `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
