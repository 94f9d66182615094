//! Aggregation model: access counters per hour, day, month and year.

pub mod analyzer;

pub use analyzer::LogAnalyzer;

use crate::error::AnalysisError;
use crate::log::LogEntry;
use serde::Serialize;
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: usize = 24;

/// Accesses per hour of day, indexed 0..24.
pub type HourCounts = [u64; HOURS_PER_DAY];

/// Accesses per period label. Sorted by label, so scans and reports are
/// deterministic and ties go to the smallest label.
pub type PeriodCounts = BTreeMap<String, u64>;

/// The four counters filled by one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessCounts {
    pub hourly: HourCounts,
    pub daily: PeriodCounts,
    pub monthly: PeriodCounts,
    pub yearly: PeriodCounts,
}

impl AccessCounts {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            counts.record(entry);
        }
        counts
    }

    /// Count one entry in all four counters.
    pub fn record(&mut self, entry: &LogEntry) {
        self.hourly[usize::from(entry.hour())] += 1;
        *self.daily.entry(entry.day()).or_default() += 1;
        *self.monthly.entry(entry.month()).or_default() += 1;
        *self.yearly.entry(entry.year()).or_default() += 1;
    }

    /// Add counters built from another partition of the same log.
    pub fn merge(&mut self, other: &AccessCounts) {
        for (mine, theirs) in self.hourly.iter_mut().zip(other.hourly.iter()) {
            *mine += theirs;
        }
        merge_periods(&mut self.daily, &other.daily);
        merge_periods(&mut self.monthly, &other.monthly);
        merge_periods(&mut self.yearly, &other.yearly);
    }

    pub fn total_accesses(&self) -> u64 {
        self.hourly.iter().sum()
    }

    /// First hour with the highest count.
    pub fn busiest_hour(&self) -> usize {
        let mut busiest = 0;
        let mut max_count = self.hourly[0];
        for (hour, &count) in self.hourly.iter().enumerate().skip(1) {
            if count > max_count {
                busiest = hour;
                max_count = count;
            }
        }
        busiest
    }

    /// First hour with the lowest count.
    pub fn quietest_hour(&self) -> usize {
        let mut quietest = 0;
        let mut min_count = u64::MAX;
        for (hour, &count) in self.hourly.iter().enumerate() {
            if count < min_count {
                quietest = hour;
                min_count = count;
            }
        }
        quietest
    }

    /// Start hour (0..=22) of the busiest pair of adjacent hours.
    pub fn busiest_two_hour_period(&self) -> usize {
        let mut start = 0;
        let mut max_count = 0;
        for (hour, pair) in self.hourly.windows(2).enumerate() {
            let total = pair[0] + pair[1];
            if total > max_count {
                start = hour;
                max_count = total;
            }
        }
        start
    }

    pub fn busiest_day(&self) -> Option<&str> {
        busiest(&self.daily)
    }

    pub fn quietest_day(&self) -> Option<&str> {
        quietest(&self.daily)
    }

    pub fn busiest_month(&self) -> Option<&str> {
        busiest(&self.monthly)
    }

    pub fn quietest_month(&self) -> Option<&str> {
        quietest(&self.monthly)
    }

    pub fn busiest_year(&self) -> Option<&str> {
        busiest(&self.yearly)
    }

    pub fn quietest_year(&self) -> Option<&str> {
        quietest(&self.yearly)
    }

    pub fn average_accesses_per_month(&self) -> Result<f64, AnalysisError> {
        if self.monthly.is_empty() {
            return Err(AnalysisError::NoMonths);
        }
        let total: u64 = self.monthly.values().sum();
        Ok(total as f64 / self.monthly.len() as f64)
    }
}

fn merge_periods(into: &mut PeriodCounts, from: &PeriodCounts) {
    for (label, count) in from {
        *into.entry(label.clone()).or_default() += count;
    }
}

fn busiest(counts: &PeriodCounts) -> Option<&str> {
    let mut busiest = None;
    let mut max_count = 0;
    for (label, &count) in counts {
        if count > max_count {
            busiest = Some(label.as_str());
            max_count = count;
        }
    }
    busiest
}

fn quietest(counts: &PeriodCounts) -> Option<&str> {
    let mut quietest = None;
    let mut min_count = u64::MAX;
    for (label, &count) in counts {
        if count < min_count {
            quietest = Some(label.as_str());
            min_count = count;
        }
    }
    quietest
}
