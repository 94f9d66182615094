use crate::Result;
use crate::model::AccessCounts;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct ReportData<'a> {
    pub counts: &'a AccessCounts,
    pub summary: SummaryView<'a>,
    /// Malformed lines dropped while reading the log.
    pub skipped_lines: usize,
    /// Accepted raw log lines, included on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<&'a [String]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView<'a> {
    pub total_accesses: u64,
    pub busiest_hour: usize,
    pub quietest_hour: usize,
    pub busiest_two_hour_period: usize,
    pub busiest_day: Option<&'a str>,
    pub quietest_day: Option<&'a str>,
    pub busiest_month: Option<&'a str>,
    pub quietest_month: Option<&'a str>,
    pub busiest_year: Option<&'a str>,
    pub quietest_year: Option<&'a str>,
    /// `None` when no months were recorded.
    pub average_accesses_per_month: Option<f64>,
}

impl<'a> ReportData<'a> {
    pub fn new(counts: &'a AccessCounts, skipped_lines: usize) -> Self {
        let summary = SummaryView {
            total_accesses: counts.total_accesses(),
            busiest_hour: counts.busiest_hour(),
            quietest_hour: counts.quietest_hour(),
            busiest_two_hour_period: counts.busiest_two_hour_period(),
            busiest_day: counts.busiest_day(),
            quietest_day: counts.quietest_day(),
            busiest_month: counts.busiest_month(),
            quietest_month: counts.quietest_month(),
            busiest_year: counts.busiest_year(),
            quietest_year: counts.quietest_year(),
            average_accesses_per_month: counts.average_accesses_per_month().ok(),
        };
        Self {
            counts,
            summary,
            skipped_lines,
            lines: None,
        }
    }

    pub fn with_lines(mut self, lines: &'a [String]) -> Self {
        self.lines = Some(lines);
        self
    }
}

pub fn write_json_report(data: &ReportData<'_>, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}
