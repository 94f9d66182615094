/// One access, tagged with the time it occurred.
///
/// Labels returned by `day`, `month` and `year` are zero-padded so that
/// sorting them as strings sorts them chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl LogEntry {
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Calendar date, e.g. "2015-06-01".
    pub fn day(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Calendar month, e.g. "2015-06".
    pub fn month(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn year(&self) -> String {
        format!("{:04}", self.year)
    }
}

/// A parsed log: accepted raw lines plus the entries built from them.
#[derive(Debug, Clone, Default)]
pub struct LogFile {
    pub lines: Vec<String>,
    pub entries: Vec<LogEntry>,
    /// Malformed lines dropped in lenient mode.
    pub skipped: usize,
}

impl LogFile {
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
