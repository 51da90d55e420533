//! Win detection: does the last move complete a run?

use crate::board::Snapshot;
use crate::position::Position;
use crate::types::Cell;
use tracing::instrument;

/// The four line axes as direction vectors: horizontal, vertical, and
/// the two diagonals. Each vector together with its negation spans the
/// full line through a cell.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Finds a winning run through the cell played last.
///
/// The mark to test is the one at `last_move`; an empty or out-of-range
/// `last_move` yields `None`. Returns the first qualifying run of
/// `win_line_length` equal marks, ordered along its axis.
///
/// Only cells within `win_line_length - 1` steps of the last move can
/// belong to a run that move completes, so each axis is examined as the
/// ordered merge of the two outward walks from that cell: signed
/// offsets are visited in ascending order, and offsets falling outside
/// the grid contribute no cell. A scan along the merged line resets on
/// every empty or opposing cell and reports the moment the run reaches
/// the required length, so when the true run is longer than required
/// the earliest window along the axis is the one returned.
#[instrument(skip(snapshot))]
pub fn winning_line(
    snapshot: &Snapshot,
    last_move: Position,
    win_line_length: usize,
) -> Option<Vec<Position>> {
    let target = snapshot.get(last_move)?.mark()?;
    let reach = win_line_length as isize - 1;

    for (dr, dc) in AXES {
        let mut run = Vec::with_capacity(win_line_length);
        for step in -reach..=reach {
            let Some(pos) = last_move.offset(dr * step, dc * step) else {
                continue;
            };
            match snapshot.get(pos) {
                Some(Cell::Occupied(mark)) if mark == target => run.push(pos),
                Some(_) => run.clear(),
                None => continue,
            }
            if run.len() == win_line_length {
                return Some(run);
            }
        }
    }

    None
}
