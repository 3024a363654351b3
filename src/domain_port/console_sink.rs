use std::io;

/// A console stream shared by every logger in the process.
pub trait ConsoleSink: Send + Sync {
    /// Writes `line` and, when given, `trace` right after it.
    ///
    /// Both must reach the stream as one unit: no other writer to the same
    /// sink may appear between them.
    fn write_entry(&self, line: &str, trace: Option<&str>) -> io::Result<()>;
}
