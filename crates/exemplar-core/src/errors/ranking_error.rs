/// Ranking engine errors.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    /// Ranking needs the query plus at least one candidate row.
    #[error("cannot rank against an empty index")]
    EmptyIndex,

    #[error("separator needs both classes: {positives} positive, {negatives} negative rows")]
    SingleClass { positives: usize, negatives: usize },

    #[error("label count {labels} does not match row count {rows}")]
    LabelMismatch { rows: usize, labels: usize },
}
