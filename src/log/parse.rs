use crate::Result;
use crate::log::entry::{LogEntry, LogFile};
use anyhow::{Context, anyhow, bail};
use regex::{Captures, Regex};
use std::fs;

/// How to treat lines that do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fail on the first malformed line.
    #[default]
    Strict,
    /// Warn and skip malformed lines.
    Lenient,
}

/// Parse a web server access log file.
///
/// Expected columns (whitespace-separated):
/// year  month  day  hour  minute  [anything else...]
///
/// Example:
/// 2015 06 01 14 22
///
/// The file is read as bytes and decoded line by line, so a line with
/// invalid UTF-8 is a malformed line rather than an unreadable file.
pub fn parse_log_file(path: &str, mode: ParseMode) -> Result<LogFile> {
    let bytes = fs::read(path).with_context(|| format!("read log file {}", path))?;
    let log = parse_log_bytes(&bytes, path, mode)?;
    tracing::debug!(
        path,
        entries = log.len(),
        skipped = log.skipped,
        "parsed log file"
    );
    Ok(log)
}

/// Parse log text; `origin` names the source in error messages.
pub fn parse_log_text(text: &str, origin: &str, mode: ParseMode) -> Result<LogFile> {
    parse_log_bytes(text.as_bytes(), origin, mode)
}

/// Parse raw log bytes, decoding each `\n`-terminated line on its own.
pub fn parse_log_bytes(bytes: &[u8], origin: &str, mode: ParseMode) -> Result<LogFile> {
    // Capture:
    // 1) year: 4 digits
    // 2) month, 3) day, 4) hour, 5) minute: 1-2 digits
    // Trailing columns (request, status, ...) are ignored.
    const LOG_LINE_RE: &str = r#"^\s*(\d{4})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})(?:\s+.*)?$"#;
    let re = Regex::new(LOG_LINE_RE)?;

    let mut out = LogFile::default();
    for (lineno, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let lno = lineno + 1;

        let parsed = match std::str::from_utf8(raw) {
            Ok(line) => {
                let line = line.trim_end();
                if line.trim().is_empty() || line.trim_start().starts_with('#') {
                    continue;
                }
                re.captures(line)
                    .ok_or_else(|| anyhow!("cannot parse line: {:?}", line))
                    .and_then(|caps| entry_from_captures(&caps))
                    .map(|entry| (line, entry))
            }
            Err(err) => Err(anyhow!(err).context("line is not valid UTF-8")),
        };

        match parsed {
            Ok((line, entry)) => {
                out.lines.push(line.to_string());
                out.entries.push(entry);
            }
            Err(err) => match mode {
                ParseMode::Strict => {
                    return Err(err.context(format!("log parse error at {}:{}", origin, lno)));
                }
                ParseMode::Lenient => {
                    tracing::warn!(origin, line = lno, error = %err, "skipping malformed log line");
                    out.skipped += 1;
                }
            },
        }
    }

    Ok(out)
}

/// Fields are range-checked one at a time; the calendar is not consulted,
/// so `2015 02 31` is accepted and counted under `2015-02-31`.
fn entry_from_captures(caps: &Captures<'_>) -> Result<LogEntry> {
    let entry = LogEntry {
        year: field(caps, 1, "year")?,
        month: field(caps, 2, "month")?,
        day: field(caps, 3, "day")?,
        hour: field(caps, 4, "hour")?,
        minute: field(caps, 5, "minute")?,
    };

    if !(1..=12).contains(&entry.month) {
        bail!("month out of range: {}", entry.month);
    }
    if !(1..=31).contains(&entry.day) {
        bail!("day out of range: {}", entry.day);
    }
    if entry.hour > 23 {
        bail!("hour out of range: {}", entry.hour);
    }
    if entry.minute > 59 {
        bail!("minute out of range: {}", entry.minute);
    }

    Ok(entry)
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, idx: usize, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = caps
        .get(idx)
        .ok_or_else(|| anyhow!("missing {} column", name))?
        .as_str();
    raw.parse::<T>()
        .with_context(|| format!("bad {} value {}", name, raw))
}
