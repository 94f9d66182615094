//! Plain-text tables: a `<Unit>: Count` header, then one `<key>: <count>`
//! line per bucket. Hours are listed 0..23, labels in sorted order.

use crate::Result;
use crate::log::LogFile;
use crate::model::{AccessCounts, PeriodCounts};
use std::io::Write;

const NO_DATA: &str = "no data";

pub fn print_hourly_counts(counts: &AccessCounts, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Hr: Count")?;
    for (hour, count) in counts.hourly.iter().enumerate() {
        writeln!(out, "{}: {}", hour, count)?;
    }
    Ok(())
}

pub fn print_daily_counts(counts: &AccessCounts, out: &mut impl Write) -> Result<()> {
    print_period_counts("Day", &counts.daily, out)
}

pub fn print_monthly_counts(counts: &AccessCounts, out: &mut impl Write) -> Result<()> {
    print_period_counts("Month", &counts.monthly, out)
}

pub fn print_yearly_counts(counts: &AccessCounts, out: &mut impl Write) -> Result<()> {
    print_period_counts("Year", &counts.yearly, out)
}

fn print_period_counts(unit: &str, counts: &PeriodCounts, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}: Count", unit)?;
    for (label, count) in counts {
        writeln!(out, "{}: {}", label, count)?;
    }
    Ok(())
}

/// Echo the accepted log lines.
pub fn print_data(log: &LogFile, out: &mut impl Write) -> Result<()> {
    for line in &log.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn print_summary(counts: &AccessCounts, out: &mut impl Write) -> Result<()> {
    let label = |l: Option<&str>| l.unwrap_or(NO_DATA).to_string();
    let average = match counts.average_accesses_per_month() {
        Ok(avg) => format!("{:.2}", avg),
        Err(err) => {
            tracing::debug!(error = %err, "average accesses per month unavailable");
            NO_DATA.to_string()
        }
    };

    writeln!(out, "Total accesses: {}", counts.total_accesses())?;
    writeln!(out, "Busiest hour: {}", counts.busiest_hour())?;
    writeln!(out, "Quietest hour: {}", counts.quietest_hour())?;
    writeln!(
        out,
        "Busiest two-hour period: {}",
        counts.busiest_two_hour_period()
    )?;
    writeln!(out, "Busiest day: {}", label(counts.busiest_day()))?;
    writeln!(out, "Quietest day: {}", label(counts.quietest_day()))?;
    writeln!(out, "Busiest month: {}", label(counts.busiest_month()))?;
    writeln!(out, "Quietest month: {}", label(counts.quietest_month()))?;
    writeln!(out, "Busiest year: {}", label(counts.busiest_year()))?;
    writeln!(out, "Quietest year: {}", label(counts.quietest_year()))?;
    writeln!(out, "Average accesses per month: {}", average)?;
    Ok(())
}
