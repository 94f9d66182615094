//! Log reading: turns access log lines into time-tagged entries.

pub mod entry;
pub mod parse;

pub use entry::{LogEntry, LogFile};
pub use parse::{ParseMode, parse_log_bytes, parse_log_file, parse_log_text};
