use crate::domain_port::ConsoleSink;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// The pair of sinks used when no external log service is around.
#[derive(Clone)]
pub struct Console {
    pub out: Arc<dyn ConsoleSink>,
    pub err: Arc<dyn ConsoleSink>,
}

impl Console {
    pub fn new(out: Arc<dyn ConsoleSink>, err: Arc<dyn ConsoleSink>) -> Self {
        Self { out, err }
    }

    /// Process stdout and stderr.
    pub fn std() -> Self {
        Self::new(Arc::new(StdConsole::Stdout), Arc::new(StdConsole::Stderr))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdConsole {
    Stdout,
    Stderr,
}

impl StdConsole {
    fn write_locked<W: Write>(mut w: W, line: &str, trace: Option<&str>) -> io::Result<()> {
        writeln!(w, "{line}")?;
        if let Some(trace) = trace {
            writeln!(w, "{trace}")?;
        }
        w.flush()
    }
}

impl ConsoleSink for StdConsole {
    fn write_entry(&self, line: &str, trace: Option<&str>) -> io::Result<()> {
        // the stream lock is held until both parts are written
        match self {
            StdConsole::Stdout => Self::write_locked(io::stdout().lock(), line, trace),
            StdConsole::Stderr => Self::write_locked(io::stderr().lock(), line, trace),
        }
    }
}

/// In-memory console. Every call to `write_entry` is kept as one entry.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    entries: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries written so far.
    pub fn writes(&self) -> usize {
        self.lock().len()
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// All written text, split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .flat_map(|entry| entry.lines().map(str::to_owned))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_entry(&self, line: &str, trace: Option<&str>) -> io::Result<()> {
        let entry = match trace {
            Some(trace) => format!("{line}\n{trace}"),
            None => line.to_owned(),
        };
        self.lock().push(entry);
        Ok(())
    }
}
