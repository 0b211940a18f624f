/// Travel direction for a plan-path query, inferred by the caller from the
/// relative order of the two requested distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `a < b`: travel in increasing distance.
    Forward,
    /// `a > b`: travel in decreasing distance.
    Backward,
}
