// src/status.rs

//! User-facing status lines on stdout.
//!
//! Kept separate from `tracing` output (stderr) so the timestamp stream can
//! be piped.

use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct StatusReporter {
    out: Box<dyn Write + Send>,
}

impl std::fmt::Debug for StatusReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusReporter").finish_non_exhaustive()
    }
}

impl StatusReporter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// `Monitoring <path>...`
    pub fn monitoring(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Monitoring {}...", path.display())?;
        self.out.flush()
    }

    /// Print the modification time that was just rendered.
    pub fn rendered(&mut self, modified: SystemTime) -> io::Result<()> {
        writeln!(self.out, "{}", format_timestamp(modified))?;
        self.out.flush()
    }
}

/// Seconds since the Unix epoch with microsecond precision.
///
/// Times before the epoch are printed as negative values.
pub fn format_timestamp(t: SystemTime) -> String {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:06}", d.as_secs(), d.subsec_micros()),
        Err(e) => {
            let d = e.duration();
            format!("-{}.{:06}", d.as_secs(), d.subsec_micros())
        }
    }
}
