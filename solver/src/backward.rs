use model::{Distance, Fuel};

use crate::error::SolveError;

/// Stop count used as "infinite": large enough that a `+ 1` never overflows,
/// small enough that two of them can be compared without wrapping.
const INFINITE_STOPS: u32 = u32::MAX / 2;

/// One viable arrival state at a station row of the DP table.
#[derive(Debug, Clone, Copy)]
struct DpState {
    residual: Fuel,
    stops: u32,
    /// Row of the most recent refuel; breaks ties toward the state that
    /// refueled closer to the goal.
    tie_key: usize,
    predecessor: usize,
    is_refuel: bool,
}

/// Minimum-hop path over an ascending `[distances, fuels]` pair, from index
/// `0` to index `n-1`. At each station, carries every viable previous state
/// forward across the gap, then considers refueling, merging the refuel
/// into a carried-forward state when their residuals coincide.
///
/// Expects the query already in ascending index order; a descending query
/// must be reflected by the caller first.
pub fn solve(distances: &[Distance], fuels: &[Fuel]) -> Result<Vec<Distance>, SolveError> {
    let n = distances.len();
    debug_assert!(n >= 2, "backward solve requires at least two stations");

    let mut rows: Vec<Vec<DpState>> = Vec::with_capacity(n);
    rows.push(vec![DpState {
        residual: fuels[0],
        stops: 0,
        tie_key: 0,
        predecessor: usize::MAX,
        is_refuel: false,
    }]);

    for s in 1..n {
        let gap = distances[s] - distances[s - 1];
        let prev = &rows[s - 1];

        let mut row: Vec<DpState> = prev
            .iter()
            .enumerate()
            .filter(|(_, st)| st.residual >= gap)
            .map(|(idx, st)| DpState {
                residual: st.residual - gap,
                stops: st.stops,
                tie_key: st.tie_key,
                predecessor: idx,
                is_refuel: false,
            })
            .collect();

        let best = row
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.stops.cmp(&b.stops).then(b.tie_key.cmp(&a.tie_key)))
            .map(|(idx, st)| (st.stops, st.predecessor, idx));

        let refuel = match best {
            Some((best_stops, best_predecessor, _)) => DpState {
                residual: fuels[s],
                stops: best_stops + 1,
                tie_key: s,
                predecessor: best_predecessor,
                is_refuel: true,
            },
            // No carry-forward survivor at all: the gap into this station is
            // uncrossable from every previously-viable state. Keep the row
            // non-empty with a sentinel-infinite state so later rows still
            // have something to carry forward (and fail) instead of
            // collapsing the whole table.
            None => DpState {
                residual: fuels[s],
                stops: INFINITE_STOPS,
                tie_key: s,
                predecessor: usize::MAX,
                is_refuel: true,
            },
        };

        match row.iter_mut().find(|st| st.residual == refuel.residual) {
            Some(slot) if refuel.stops <= slot.stops => *slot = refuel,
            Some(_) => {}
            None => row.push(refuel),
        }

        rows.push(row);
    }

    let last = &rows[n - 1];
    let (winner_idx, winner) = last
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.stops.cmp(&b.stops).then(b.tie_key.cmp(&a.tie_key)))
        .expect("each row is constructed non-empty");

    if winner.stops >= INFINITE_STOPS {
        return Err(SolveError::NoPath);
    }

    let mut hop_rows = Vec::new();
    let mut row = n - 1;
    let mut idx = winner_idx;
    while row > 0 {
        let state = rows[row][idx];
        let pred_row = row - 1;
        let pred_idx = state.predecessor;
        if pred_row > 0 && rows[pred_row][pred_idx].is_refuel {
            hop_rows.push(pred_row);
        }
        row = pred_row;
        idx = pred_idx;
    }
    hop_rows.reverse();

    let mut path = Vec::with_capacity(hop_rows.len() + 2);
    path.push(distances[0]);
    path.extend(hop_rows.into_iter().map(|r| distances[r]));
    path.push(distances[n - 1]);
    Ok(path)
}
