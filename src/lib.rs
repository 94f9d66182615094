//! Web server access log analysis: per-hour, day, month and year access
//! counts plus busiest/quietest period statistics.

pub mod error;
pub mod log;
pub mod model;
pub mod render;

pub type Result<T> = anyhow::Result<T>;

pub use error::AnalysisError;
pub use log::{LogEntry, LogFile, ParseMode};
pub use model::{AccessCounts, LogAnalyzer};
