use crate::domain_model::{LogRecord, Severity, render_failure};
use crate::domain_port::ExternalLogger;
use crate::logger::*;

/// Log service backed by the `tracing` subscriber of the process.
///
/// Unrecognized severities are logged at debug level. A failure is attached
/// as the `failure` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogService;

impl TracingLogService {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalLogger for TracingLogService {
    fn log(&self, record: &LogRecord<'_>) -> anyhow::Result<()> {
        let message = record.message;
        match (record.severity, record.failure.map(render_failure)) {
            (Severity::ERROR, Some(failure)) => error!(%failure, "{message}"),
            (Severity::ERROR, None) => error!("{message}"),
            (Severity::WARNING, Some(failure)) => warn!(%failure, "{message}"),
            (Severity::WARNING, None) => warn!("{message}"),
            (Severity::INFO, Some(failure)) => info!(%failure, "{message}"),
            (Severity::INFO, None) => info!("{message}"),
            (_, Some(failure)) => debug!(%failure, "{message}"),
            (_, None) => debug!("{message}"),
        }
        Ok(())
    }
}
