use crate::error::AnalysisError;
use crate::log::LogFile;
use crate::model::AccessCounts;

#[derive(Debug)]
enum AnalysisState {
    NotAggregated,
    Aggregated(AccessCounts),
}

/// Owns one log and the counters built from it.
///
/// Statistics are only available after `aggregate`; asking earlier is an
/// error rather than a silent zero.
#[derive(Debug)]
pub struct LogAnalyzer {
    log: LogFile,
    state: AnalysisState,
}

impl LogAnalyzer {
    pub fn new(log: LogFile) -> Self {
        Self {
            log,
            state: AnalysisState::NotAggregated,
        }
    }

    pub fn log(&self) -> &LogFile {
        &self.log
    }

    /// Run the single counting pass over the log.
    pub fn aggregate(&mut self) -> Result<&AccessCounts, AnalysisError> {
        if let AnalysisState::Aggregated(_) = self.state {
            return Err(AnalysisError::AlreadyAggregated);
        }

        let counts = AccessCounts::from_entries(self.log.entries());
        tracing::info!(
            accesses = counts.total_accesses(),
            days = counts.daily.len(),
            months = counts.monthly.len(),
            years = counts.yearly.len(),
            "aggregated access log"
        );
        self.state = AnalysisState::Aggregated(counts);
        self.counts()
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self.state, AnalysisState::Aggregated(_))
    }

    pub fn counts(&self) -> Result<&AccessCounts, AnalysisError> {
        match &self.state {
            AnalysisState::Aggregated(counts) => Ok(counts),
            AnalysisState::NotAggregated => Err(AnalysisError::NotAggregated),
        }
    }

    pub fn total_accesses(&self) -> Result<u64, AnalysisError> {
        Ok(self.counts()?.total_accesses())
    }

    pub fn busiest_hour(&self) -> Result<usize, AnalysisError> {
        Ok(self.counts()?.busiest_hour())
    }

    pub fn quietest_hour(&self) -> Result<usize, AnalysisError> {
        Ok(self.counts()?.quietest_hour())
    }

    pub fn busiest_two_hour_period(&self) -> Result<usize, AnalysisError> {
        Ok(self.counts()?.busiest_two_hour_period())
    }

    pub fn busiest_day(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.busiest_day())
    }

    pub fn quietest_day(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.quietest_day())
    }

    pub fn busiest_month(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.busiest_month())
    }

    pub fn quietest_month(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.quietest_month())
    }

    pub fn busiest_year(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.busiest_year())
    }

    pub fn quietest_year(&self) -> Result<Option<&str>, AnalysisError> {
        Ok(self.counts()?.quietest_year())
    }

    pub fn average_accesses_per_month(&self) -> Result<f64, AnalysisError> {
        self.counts()?.average_accesses_per_month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::at;
    use pretty_assertions::assert_eq;

    fn log_of(entries: Vec<crate::log::LogEntry>) -> LogFile {
        LogFile {
            lines: entries
                .iter()
                .map(|e| format!("{} {:02} {:02} {:02} 00", e.year, e.month, e.day, e.hour))
                .collect(),
            entries,
            skipped: 0,
        }
    }

    #[test]
    fn queries_fail_before_aggregation() {
        let analyzer = LogAnalyzer::new(log_of(vec![at(2015, 6, 1, 3)]));
        assert!(!analyzer.is_aggregated());
        assert_eq!(analyzer.total_accesses(), Err(AnalysisError::NotAggregated));
        assert_eq!(analyzer.busiest_hour(), Err(AnalysisError::NotAggregated));
        assert_eq!(analyzer.busiest_day(), Err(AnalysisError::NotAggregated));
        assert_eq!(
            analyzer.average_accesses_per_month(),
            Err(AnalysisError::NotAggregated)
        );
    }

    #[test]
    fn aggregate_runs_once() {
        let mut analyzer = LogAnalyzer::new(log_of(vec![at(2015, 6, 1, 3), at(2015, 6, 1, 4)]));
        assert_eq!(analyzer.aggregate().map(|c| c.total_accesses()), Ok(2));
        assert_eq!(
            analyzer.aggregate().map(|c| c.total_accesses()),
            Err(AnalysisError::AlreadyAggregated)
        );
        assert_eq!(analyzer.total_accesses(), Ok(2));
    }

    #[test]
    fn empty_log_reports_no_data() {
        let mut analyzer = LogAnalyzer::new(LogFile::default());
        analyzer.aggregate().unwrap();
        assert_eq!(analyzer.total_accesses(), Ok(0));
        assert_eq!(analyzer.busiest_day(), Ok(None));
        assert_eq!(analyzer.quietest_day(), Ok(None));
        assert_eq!(
            analyzer.average_accesses_per_month(),
            Err(AnalysisError::NoMonths)
        );
    }

    #[test]
    fn separate_analyzers_agree() {
        let entries = vec![at(2015, 5, 1, 0), at(2015, 6, 2, 13), at(2016, 1, 9, 13)];
        let mut a = LogAnalyzer::new(log_of(entries.clone()));
        let mut b = LogAnalyzer::new(log_of(entries));
        a.aggregate().unwrap();
        b.aggregate().unwrap();
        assert_eq!(a.counts(), b.counts());
        assert_eq!(a.busiest_year(), Ok(Some("2015")));
        assert_eq!(a.quietest_year(), Ok(Some("2016")));
    }
}
