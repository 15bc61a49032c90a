use crate::error::{Fault, PipeError};
use crate::grid::Grid;

use super::walker::Walker;

/// Which of the start pipe's two ends the lead walker takes.
///
/// The lead walker moves first in every round and its step count is the
/// reported distance. Either choice yields the same distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lead {
    #[default]
    First,
    Second,
}

/// Steps from the start to the loop tile farthest from it.
///
/// The start tile must already be resolved (see `start::resolve_start`).
/// Both walkers stay on the start's component; they either meet or one of
/// them stops with a `Broken` or `Index` error.
pub fn farthest_distance(grid: &Grid) -> Result<usize, PipeError> {
    farthest_distance_with(grid, Lead::default())
}

/// `farthest_distance` with an explicit choice of lead direction.
pub fn farthest_distance_with(grid: &Grid, lead: Lead) -> Result<usize, PipeError> {
    let start = grid.start();
    let pipe = grid
        .tile_at(start)?
        .pipe()
        .ok_or(PipeError::topology(start, Fault::UnresolvedStart))?;
    let [a, b] = pipe.dirs();
    let (ahead, behind) = match lead {
        Lead::First => (a, b),
        Lead::Second => (b, a),
    };
    let mut front = Walker::new(start, ahead);
    let mut back = Walker::new(start, behind);

    loop {
        front.advance(grid)?;
        if front.pos() == back.pos() {
            return Ok(front.steps());
        }
        back.advance(grid)?;
        if front.pos() == back.pos() {
            return Ok(front.steps());
        }
    }
}
