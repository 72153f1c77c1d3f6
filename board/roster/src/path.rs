use board::Square;

use crate::{Error, Result, Roster};

/// Check whether the straight line from `from` to `to` is free of pieces
///
/// Walks one square at a time from `from` toward `to`, along an orthogonal
/// unit direction when `diagonal` is false and a diagonal one when it is
/// true. Reaching the destination ends the walk with a clear path; the
/// destination's own occupant never blocks, so the same query serves both
/// quiet moves and captures. Any earlier non-captured piece blocks.
///
/// The two squares must be distinct and colinear along the stated direction
/// kind; anything else is a contract violation answered with
/// [`Error::NoStraightPath`] before a single step is taken.
pub fn path_is_clear(roster: &Roster, from: Square, to: Square, diagonal: bool) -> Result<bool> {
    let files = to.file() as i8 - from.file() as i8;
    let ranks = to.rank() as i8 - from.rank() as i8;
    let straight = if diagonal {
        files != 0 && files.abs() == ranks.abs()
    } else {
        (files == 0) != (ranks == 0)
    };
    if !straight {
        return Err(Error::NoStraightPath { from, to });
    }
    let (step_files, step_ranks) = (files.signum(), ranks.signum());
    let mut cursor = from;
    loop {
        cursor = match cursor.offset(step_files, step_ranks) {
            Some(next) => next,
            // Unreachable while both endpoints are on the board.
            None => return Err(Error::NoStraightPath { from, to }),
        };
        if cursor == to {
            return Ok(true);
        }
        if roster.occupied(cursor) {
            return Ok(false);
        }
    }
}
