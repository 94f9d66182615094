use pretty_assertions::assert_eq;
use weblog_analyzer::log::parse_log_file;
use weblog_analyzer::render::{ReportData, print_summary, write_json_report};
use weblog_analyzer::{AnalysisError, LogAnalyzer, ParseMode};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/weblog.txt");

fn aggregated_fixture() -> LogAnalyzer {
    let log = parse_log_file(FIXTURE, ParseMode::Strict).unwrap();
    let mut analyzer = LogAnalyzer::new(log);
    analyzer.aggregate().unwrap();
    analyzer
}

#[test]
fn fixture_statistics() {
    let analyzer = aggregated_fixture();

    assert_eq!(analyzer.total_accesses(), Ok(6));
    assert_eq!(analyzer.busiest_hour(), Ok(5));
    assert_eq!(analyzer.quietest_hour(), Ok(1));
    assert_eq!(analyzer.busiest_two_hour_period(), Ok(4));
    assert_eq!(analyzer.busiest_day(), Ok(Some("2015-05-01")));
    assert_eq!(analyzer.quietest_day(), Ok(Some("2015-06-14")));
    assert_eq!(analyzer.busiest_month(), Ok(Some("2015-05")));
    assert_eq!(analyzer.quietest_month(), Ok(Some("2015-06")));
    assert_eq!(analyzer.average_accesses_per_month(), Ok(3.0));
}

#[test]
fn fixture_reaggregation_is_rejected() {
    let mut analyzer = aggregated_fixture();
    assert_eq!(
        analyzer.aggregate().map(|c| c.total_accesses()),
        Err(AnalysisError::AlreadyAggregated)
    );
    assert_eq!(analyzer.total_accesses(), Ok(6));
}

#[test]
fn fixture_summary_text() {
    let analyzer = aggregated_fixture();
    let mut buf = Vec::new();
    print_summary(analyzer.counts().unwrap(), &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Total accesses: 6\n\
         Busiest hour: 5\n\
         Quietest hour: 1\n\
         Busiest two-hour period: 4\n\
         Busiest day: 2015-05-01\n\
         Quietest day: 2015-06-14\n\
         Busiest month: 2015-05\n\
         Quietest month: 2015-06\n\
         Busiest year: 2015\n\
         Quietest year: 2015\n\
         Average accesses per month: 3.00\n"
    );
}

#[test]
fn fixture_json_report_parses() {
    let analyzer = aggregated_fixture();
    let mut buf = Vec::new();
    write_json_report(
        &ReportData::new(analyzer.counts().unwrap(), analyzer.log().skipped),
        &mut buf,
    )
    .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(doc["summary"]["total_accesses"], serde_json::json!(6));
    assert_eq!(doc["counts"]["yearly"]["2015"], serde_json::json!(6));
}
