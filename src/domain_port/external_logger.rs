use crate::domain_model::LogRecord;
use std::sync::Arc;

/// A log service living outside the facade.
///
/// Records arrive fully rendered and prefixed with the owner's identity.
/// Errors are returned to the caller of the facade as they are.
pub trait ExternalLogger: Send + Sync {
    fn log(&self, record: &LogRecord<'_>) -> anyhow::Result<()>;
}

/// Hands out the external logger that is active right now, if any.
///
/// Each logger gets its own lookup from its context, so closing one never
/// affects another.
///
/// How loggers come and go is up to the environment; the facade only opens
/// the lookup when it is created, asks it once per emitted message, and
/// closes it on shutdown.
pub trait ExternalLoggerLookup: Send + Sync {
    fn open(&self) {}

    fn active_logger(&self) -> Option<Arc<dyn ExternalLogger>>;

    fn close(&self) {}
}
