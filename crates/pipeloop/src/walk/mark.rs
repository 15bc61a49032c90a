use crate::error::{Fault, PipeError};
use crate::grid::Grid;
use crate::start::resolve_start;
use crate::tile::Tile;

use super::walker::Walker;

/// Walk once around the loop through the start, marking every tile on it.
///
/// Resolves the start first if it is still a marker. Returns the number of
/// loop tiles. Tiles off the loop are left as they are.
pub fn mark_loop(grid: &mut Grid) -> Result<usize, PipeError> {
    let start = grid.start();
    let pipe = resolve_start(grid)?;
    let mut walker = Walker::new(start, pipe.dirs()[0]);

    loop {
        let here = walker.pos();
        let tile = *grid.tile_at(here)?;
        match tile {
            Tile::Pipe(p) => grid.set(here, Tile::LoopPipe(p))?,
            Tile::LoopPipe(_) => {}
            Tile::Ground | Tile::Start | Tile::Interior => {
                return Err(PipeError::topology(
                    here,
                    Fault::Broken {
                        heading: walker.heading(),
                    },
                ))
            }
        }
        walker.advance(grid)?;
        if walker.pos() == start {
            return Ok(walker.steps());
        }
    }
}
