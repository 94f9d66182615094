/// Recoverable conditions raised by statistic queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("log has not been aggregated yet")]
    NotAggregated,

    #[error("log has already been aggregated")]
    AlreadyAggregated,

    #[error("no months recorded, average is undefined")]
    NoMonths,
}
