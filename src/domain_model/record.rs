use super::Severity;
use std::error::Error;

/// One log call on its way to a backend. Never stored.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub message: &'a str,
    pub failure: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        severity: Severity,
        message: &'a str,
        failure: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            severity,
            message,
            failure,
        }
    }
}

/// Textual trace of a failure: its message followed by one
/// `Caused by:` line per source in the chain.
pub fn render_failure(failure: &(dyn Error + 'static)) -> String {
    let mut trace = failure.to_string();
    let mut source = failure.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}
