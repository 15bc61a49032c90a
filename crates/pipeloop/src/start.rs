//! Start tile shape inference.

use crate::error::{Fault, PipeError};
use crate::grid::Grid;
use crate::tile::{Dir, DirSet, Pipe, Tile};

/// Directions from the start whose neighbour has a connector pointing back.
pub fn start_connections(grid: &Grid) -> DirSet {
    let start = grid.start();
    Dir::ALL
        .into_iter()
        .filter(|&d| {
            grid.neighbor(start, d)
                .and_then(|p| grid.tile_at(p).ok())
                .is_some_and(|t| t.connections().contains(d.opposite()))
        })
        .collect()
}

/// Replace the start marker with its inferred pipe and return that pipe.
///
/// Exactly two neighbours must connect back; anything else is a
/// `StartDegree` topology error and leaves the grid untouched. A start that
/// was already resolved returns its pipe as is.
pub fn resolve_start(grid: &mut Grid) -> Result<Pipe, PipeError> {
    let start = grid.start();
    match *grid.tile_at(start)? {
        Tile::Start => {}
        Tile::Pipe(p) | Tile::LoopPipe(p) => return Ok(p),
        Tile::Ground | Tile::Interior => {
            return Err(PipeError::topology(start, Fault::UnresolvedStart))
        }
    }
    let set = start_connections(grid);
    let pipe = Pipe::from_set(set).ok_or(PipeError::topology(
        start,
        Fault::StartDegree { count: set.len() },
    ))?;
    grid.set(start, Tile::Pipe(pipe))?;
    Ok(pipe)
}
