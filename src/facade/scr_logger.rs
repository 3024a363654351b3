use super::{LogError, format_pattern};
use crate::domain_model::{Arg, LogRecord, Severity, identity_label, render_failure};
use crate::domain_port::{ComponentContext, ExternalLoggerLookup, LogLevelProvider};
use crate::infra::Console;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logger owned by one component.
///
/// Each emitted message goes to the external log service that is active at
/// call time. Without one, the message is printed as
/// `<tag>: <bundle label> : <message>` to stderr for errors and to stdout
/// for everything else.
pub struct ScrLogger {
    bundle_label: String,
    levels: Arc<dyn LogLevelProvider>,
    lookup: Arc<dyn ExternalLoggerLookup>,
    console: Console,
    closed: AtomicBool,
}

impl fmt::Debug for ScrLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrLogger")
            .field("bundle_label", &self.bundle_label)
            .field("max_rank", &self.levels.current_max_rank())
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish()
    }
}

impl ScrLogger {
    pub fn new(context: &dyn ComponentContext, levels: Arc<dyn LogLevelProvider>) -> Self {
        Self::with_console(context, levels, Console::std())
    }

    pub fn with_console(
        context: &dyn ComponentContext,
        levels: Arc<dyn LogLevelProvider>,
        console: Console,
    ) -> Self {
        let bundle_label = identity_label(context.bundle());
        let lookup = context.logger_lookup();
        lookup.open();

        Self {
            bundle_label,
            levels,
            lookup,
            console,
            closed: AtomicBool::new(false),
        }
    }

    /// Stops watching for external log services. Later log calls do nothing.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.lookup.close();
        }
    }

    pub fn bundle_label(&self) -> &str {
        &self.bundle_label
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.rank() <= self.levels.current_max_rank()
    }

    /// Renders `pattern` with `args` and emits it.
    ///
    /// Without arguments the pattern is used as is, placeholders and quotes
    /// included. Bundle arguments are replaced by their identity label.
    pub fn log(
        &self,
        severity: Severity,
        pattern: &str,
        failure: Option<&(dyn Error + 'static)>,
        args: &[Arg<'_>],
    ) -> Result<(), LogError> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        if args.is_empty() {
            return self.log_message(severity, pattern, failure);
        }

        let rendered: Vec<String> = args.iter().map(Arg::render).collect();
        let message = format_pattern(pattern, rendered.as_slice())?;
        self.log_message(severity, &message, failure)
    }

    /// Emits an already rendered message.
    pub fn log_message(
        &self,
        severity: Severity,
        message: &str,
        failure: Option<&(dyn Error + 'static)>,
    ) -> Result<(), LogError> {
        if !self.is_enabled(severity) || self.closed.load(Ordering::Acquire) {
            return Ok(());
        }

        match self.lookup.active_logger() {
            Some(logger) => {
                let message = format!("{} : {}", self.bundle_label, message);
                logger.log(&LogRecord::new(severity, &message, failure))?;
            }
            None => {
                let sink = if severity == Severity::ERROR {
                    &self.console.err
                } else {
                    &self.console.out
                };
                let line = format!("{}: {} : {}", severity.tag(), self.bundle_label, message);
                let trace = failure.map(render_failure);
                sink.write_entry(&line, trace.as_deref())?;
            }
        }

        Ok(())
    }

    pub fn error(&self, pattern: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::ERROR, pattern, None, args)
    }

    pub fn warn(&self, pattern: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::WARNING, pattern, None, args)
    }

    pub fn info(&self, pattern: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::INFO, pattern, None, args)
    }

    pub fn debug(&self, pattern: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::DEBUG, pattern, None, args)
    }
}
