// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Our own modules log at INFO; PDF parsing dependencies only surface warnings.
const DEFAULT_DIRECTIVES: &str = "payslip_extractor=info,warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`].
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Sets up the logging framework using tracing_subscriber.
///
/// Logs go to stderr so the progress report and statistics printed on
/// stdout stay clean when redirected.
pub fn setup_logging() {
    fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete (default directives: {}).", DEFAULT_DIRECTIVES);
}
