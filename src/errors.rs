use thiserror::Error;

/// Errors raised by a stateful [`AStar`](crate::graph_algos::a_star::AStar) run.
///
/// Failing to find a path is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `solve` was called on a search that has already run
    #[error("search has already been solved; build a new AStar to search again")]
    AlreadySolved,
    /// Scores or stats were requested before `solve`
    #[error("search has not been solved yet")]
    NotSolved,
    /// The round limit ran out with nodes still on the frontier
    #[error("round limit of {0} reached before the frontier was exhausted")]
    RoundLimitReached(usize),
}
