mod backward;
mod direction;
mod error;
mod forward;

pub use direction::Direction;
pub use error::SolveError;

use model::{Distance, Fuel};

/// Finds a minimum-stop path over the stations described by `distances`
/// (strictly ascending) and their parallel `max_fuel` values, in the given
/// [`Direction`].
///
/// `distances`/`fuels` are ascending regardless of `direction`, matching
/// what [`model::Highway::extract_range`] returns; `direction` says which
/// endpoint the traveler starts from. Backward queries are solved on a
/// reflected copy of the arrays, then mapped back.
pub fn solve(
    distances: &[Distance],
    fuels: &[Fuel],
    direction: Direction,
) -> Result<Vec<Distance>, SolveError> {
    debug_assert_eq!(distances.len(), fuels.len());
    tracing::trace!(stations = distances.len(), ?direction, "solving path");

    if distances.len() == 1 {
        return Ok(vec![distances[0]]);
    }

    let result = match direction {
        Direction::Forward => forward::solve(distances, fuels),
        Direction::Backward => {
            let (reflected_distances, reflected_fuels) = reflect(distances, fuels);
            let reflected_path = backward::solve(&reflected_distances, &reflected_fuels)?;
            let last = distances[distances.len() - 1];
            Ok(reflected_path.into_iter().map(|d| last - d).collect())
        }
    };

    if let Err(err) = &result {
        tracing::debug!(%err, "no path found");
    }
    result
}

/// `reflected[i] = last − distances[n-1-i]`, for [`backward::solve`].
fn reflect(distances: &[Distance], fuels: &[Fuel]) -> (Vec<Distance>, Vec<Fuel>) {
    let n = distances.len();
    let last = distances[n - 1];
    let reflected_distances = (0..n).map(|i| last - distances[n - 1 - i]).collect();
    let reflected_fuels = (0..n).rev().map(|i| fuels[i]).collect();
    (reflected_distances, reflected_fuels)
}
