use tracing_subscriber::EnvFilter;

use crate::models::LogLevel;

/// Diagnostics go to stderr so they never mix with the summary on stdout.
pub fn setup_logging(log_level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("logtally={}", log_level.directive())))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
