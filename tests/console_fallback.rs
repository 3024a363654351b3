mod common;

use bundle_logger::domain_model::{Arg, BundleInfo, Severity};
use bundle_logger::domain_port::{ConsoleSink, LogLevelProvider};
use bundle_logger::facade::ScrLogger;
use bundle_logger::infra::{Console, LoggerSlot, StaticContext};
use common::{LABEL, harness};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn hello_world_reaches_stdout_once() {
    let h = harness(Severity::INFO);
    h.logger
        .log(Severity::INFO, "Hello {0}", None, &[Arg::from("World")])
        .unwrap();
    assert_eq!(h.out.lines(), vec![format!("INFO : {LABEL} : Hello World")]);
    assert_eq!(h.out.writes(), 1);
    assert_eq!(h.err.writes(), 0);
}

#[test]
fn error_with_chained_failure_goes_to_stderr() {
    #[derive(Debug, thiserror::Error)]
    #[error("could not bind service")]
    struct BindError(#[source] io::Error);

    let h = harness(Severity::ERROR);
    let failure = BindError(io::Error::other("registry closed"));
    h.logger
        .log(Severity::ERROR, "activation of {0} failed", Some(&failure), &[Arg::from("svc")])
        .unwrap();

    assert_eq!(
        h.err.lines(),
        vec![
            format!("ERROR: {LABEL} : activation of svc failed"),
            "could not bind service".to_owned(),
            "Caused by: registry closed".to_owned(),
        ]
    );
    assert!(h.out.lines().is_empty());
}

#[test]
fn bundle_arguments_render_like_the_owner_label() {
    let h = harness(Severity::DEBUG);
    let named = BundleInfo::new(7, "acme.widget", "1.0.0");
    let unnamed = BundleInfo::unnamed(42);
    h.logger.debug("loaded {0}", &[Arg::from(&named)]).unwrap();
    h.logger.debug("loaded {0}", &[Arg::from(&unnamed)]).unwrap();
    assert_eq!(
        h.out.lines(),
        vec![
            format!("DEBUG: {LABEL} : loaded bundle acme.widget:1.0.0 (7)"),
            format!("DEBUG: {LABEL} : loaded bundle 42"),
        ]
    );
}

#[test]
fn placeholders_untouched_without_arguments() {
    let h = harness(Severity::INFO);
    h.logger.log(Severity::INFO, "raw {0} text", None, &[]).unwrap();
    h.logger.log_message(Severity::INFO, "raw {1} message", None).unwrap();
    assert_eq!(
        h.out.lines(),
        vec![
            format!("INFO : {LABEL} : raw {{0}} text"),
            format!("INFO : {LABEL} : raw {{1}} message"),
        ]
    );
}

struct CountingLevel {
    max: Severity,
    queries: AtomicUsize,
}

impl LogLevelProvider for CountingLevel {
    fn current_max_rank(&self) -> u8 {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.max.rank()
    }
}

struct FailingSink;

impl ConsoleSink for FailingSink {
    fn write_entry(&self, _line: &str, _trace: Option<&str>) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

#[test]
fn disabled_severity_never_touches_the_sinks() {
    let levels = Arc::new(CountingLevel {
        max: Severity::ERROR,
        queries: AtomicUsize::new(0),
    });
    let slot = Arc::new(LoggerSlot::new());
    let context = StaticContext::new(BundleInfo::unnamed(5), slot);
    let sink = Arc::new(FailingSink);
    let logger = ScrLogger::with_console(&context, levels.clone(), Console::new(sink.clone(), sink));

    for severity in [Severity::WARNING, Severity::INFO, Severity::DEBUG] {
        logger.log(severity, "{0", None, &[Arg::from("x")]).unwrap();
        logger.log_message(severity, "message", None).unwrap();
        assert!(!logger.is_enabled(severity));
    }
    assert!(levels.queries.load(Ordering::SeqCst) > 0);
}

#[test]
fn sink_write_failure_propagates() {
    let slot = Arc::new(LoggerSlot::new());
    let context = StaticContext::new(BundleInfo::unnamed(5), slot);
    let sink = Arc::new(FailingSink);
    let logger = ScrLogger::with_console(
        &context,
        Arc::new(bundle_logger::infra::FixedLevel(Severity::DEBUG)),
        Console::new(sink.clone(), sink),
    );

    let err = logger.info("lost", &[]).unwrap_err();
    assert!(matches!(err, bundle_logger::LogError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

/// Sink that writes line and trace as two separate appends under one lock,
/// yielding in between to invite interleaving.
///
/// The lock here is the sink's own, so the stress test below checks that the
/// logger hands each line and its trace to the sink in a single
/// `write_entry` call. It does not exercise `StdConsole`, which relies on
/// the process stream lock.
#[derive(Default)]
struct SplitWriteSink {
    lines: Mutex<Vec<String>>,
}

impl ConsoleSink for SplitWriteSink {
    fn write_entry(&self, line: &str, trace: Option<&str>) -> io::Result<()> {
        let mut lines = self.lines.lock().unwrap();
        lines.push(line.to_owned());
        thread::yield_now();
        if let Some(trace) = trace {
            lines.extend(trace.lines().map(str::to_owned));
        }
        Ok(())
    }
}

#[test]
fn concurrent_writers_keep_line_and_trace_together() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let sink = Arc::new(SplitWriteSink::default());
    let slot = Arc::new(LoggerSlot::new());
    let context = StaticContext::new(BundleInfo::new(9, "stress", "1.0.0"), slot);
    let logger = Arc::new(ScrLogger::with_console(
        &context,
        Arc::new(bundle_logger::infra::FixedLevel(Severity::DEBUG)),
        Console::new(sink.clone(), sink.clone()),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let id = format!("{t}-{i}");
                    let failure = io::Error::other(format!("trace {id}"));
                    logger
                        .log(Severity::WARNING, "message {0}", Some(&failure), &[Arg::from(&id)])
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines.lock().unwrap();
    assert_eq!(lines.len(), THREADS * PER_THREAD * 2);
    for pair in lines.chunks(2) {
        let id = pair[0]
            .strip_prefix("WARN : bundle stress:1.0.0 (9) : message ")
            .expect("message line");
        assert_eq!(pair[1], format!("trace {id}"));
    }
}
