//! Report rendering: plain-text tables and a JSON document.

pub mod json;
pub mod text;

pub use json::{ReportData, write_json_report};
pub use text::{
    print_daily_counts, print_data, print_hourly_counts, print_monthly_counts, print_summary,
    print_yearly_counts,
};
