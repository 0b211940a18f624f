use thiserror::Error;

/// Failure modes of a plan-path query.
///
/// `AllocationFailure` and `NullInput` are never constructed: allocation
/// failure aborts the process, and the dispatcher never builds a query
/// with a missing endpoint. They exist for completeness of the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no path")]
    NoPath,
    #[error("allocation failure")]
    AllocationFailure,
    #[error("null input")]
    NullInput,
}
