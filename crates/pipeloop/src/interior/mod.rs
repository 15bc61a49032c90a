//! Interior classification by a per-row crossing-number scan.
//!
//! The scanline runs through tile centres, so a horizontal stretch of loop
//! (`L--7`, `F--J`, `L--J`, `F--7`) lies on the scanline itself. Such a run
//! crosses the loop boundary only when its two corners turn to opposite
//! sides (`L..7`, `F..J`); `L..J` and `F..7` merely touch the scanline and
//! leave the inside flag alone.
//!
//! Only `LoopPipe` tiles form the boundary. Every other non-start tile is
//! treated as ground, so leftover junk is classified like any other cell.

use crate::error::{Fault, PipeError};
use crate::grid::{Grid, Pos};
use crate::tile::{Dir, Pipe, Tile};

/// Clear every pipe that is not on the loop; returns how many were cleared.
pub fn remove_junk(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    for tile in grid.tiles_mut() {
        if let Tile::Pipe(_) = tile {
            *tile = Tile::Ground;
            cleared += 1;
        }
    }
    cleared
}

/// Mark every tile enclosed by the marked loop as `Interior`; returns the count.
///
/// Expects `walk::mark_loop` to have run. Non-loop tiles outside the loop
/// keep their state, except stale `Interior` marks which revert to ground.
pub fn classify_interior(grid: &mut Grid) -> Result<usize, PipeError> {
    let mut area = 0;
    for y in 0..grid.height() {
        area += classify_row(grid, y)?;
    }
    Ok(area)
}

fn classify_row(grid: &mut Grid, y: usize) -> Result<usize, PipeError> {
    let mut area = 0;
    let mut inside = false;
    // Vertical end of the corner that opened the current horizontal run.
    let mut run: Option<Dir> = None;

    for x in 0..grid.width() {
        let pos = Pos::new(x, y);
        let tile = *grid.tile_at(pos)?;
        match (tile, run) {
            (Tile::Start, _) => return Err(PipeError::topology(pos, Fault::UnresolvedStart)),
            (Tile::LoopPipe(Pipe::HORIZONTAL), Some(_)) => {}
            (Tile::LoopPipe(p), Some(open)) => {
                let close = closing_corner(p).ok_or(PipeError::topology(pos, Fault::OpenRun))?;
                if close != open {
                    inside = !inside;
                }
                run = None;
            }
            (Tile::LoopPipe(Pipe::VERTICAL), None) => inside = !inside,
            (Tile::LoopPipe(p), None) => {
                run = Some(opening_corner(p).ok_or(PipeError::topology(pos, Fault::StrayRun))?);
            }
            (Tile::Ground | Tile::Pipe(_) | Tile::Interior, Some(_)) => {
                return Err(PipeError::topology(pos, Fault::OpenRun));
            }
            (Tile::Ground | Tile::Pipe(_) | Tile::Interior, None) => {
                if inside {
                    grid.set(pos, Tile::Interior)?;
                    area += 1;
                } else if tile == Tile::Interior {
                    grid.set(pos, Tile::Ground)?;
                }
            }
        }
    }

    let end = Pos::new(grid.width() - 1, y);
    if run.is_some() {
        return Err(PipeError::topology(end, Fault::OpenRun));
    }
    if inside {
        return Err(PipeError::topology(end, Fault::RowParity));
    }
    Ok(area)
}

/// `L` / `F`: the vertical end of a corner that opens to the right.
fn opening_corner(p: Pipe) -> Option<Dir> {
    if p.contains(Dir::Right) {
        p.vertical()
    } else {
        None
    }
}

/// `J` / `7`: the vertical end of a corner that closes from the left.
fn closing_corner(p: Pipe) -> Option<Dir> {
    if p.contains(Dir::Left) {
        p.vertical()
    } else {
        None
    }
}
