//! Log scanning and tailing for token acquisition.
//!
//! One-shot scans read a file or directory and run the extractor over the
//! contents. The tailer follows a live log file and reports the first
//! token that appears. Both treat "no token" as a defined negative
//! result; only I/O failures are errors.

mod scan;
mod sources;
mod tailer;

pub use scan::{scan_dir, scan_file, scan_text};
pub use sources::{DemoSource, ProcessMonitor};
pub use tailer::{LogTailer, OnTokenFn};

/// Errors produced while reading log files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
