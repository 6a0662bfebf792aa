// src/progress.rs
use std::io::Write;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users. Every hook returns
/// `()`: a sink cannot fail the run or change what it returns.
pub trait Progress {
    /// Called once the number of listing pages is known.
    fn begin(&mut self, _pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after one image record has been parsed.
    fn item_done(&mut self, _index: usize, _link: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self, _records: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes each `log` line to any `Write` (stderr for the CLI).
/// Write errors are dropped.
pub struct WriterProgress<W: Write> {
    out: W,
}

impl<W: Write> WriterProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for WriterProgress<W> {
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
        let _ = self.out.flush();
    }
}
