//! End-to-end pipelines from puzzle text to answers.
//!
//! The distance and area pipelines are independent: each runs over its own
//! copy of the decoded grid, since the area pipeline rewrites tiles.

use tracing::debug;

use crate::error::PipeError;
use crate::grid::{Census, Grid};
use crate::interior::{classify_interior, remove_junk};
use crate::start::resolve_start;
use crate::walk::{farthest_distance, mark_loop};

/// Results of both pipelines over one grid.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub farthest: usize,
    pub loop_len: usize,
    pub interior: usize,
    pub census: Census,
    /// Grid after loop marking, junk removal and classification.
    pub classified: Grid,
}

/// Parse → resolve start → meeting walkers.
pub fn farthest_distance_of(text: &str) -> Result<usize, PipeError> {
    let mut grid = Grid::parse(text)?;
    distance_pipeline(&mut grid)
}

/// Parse → mark loop → remove junk → classify interior.
pub fn enclosed_area_of(text: &str) -> Result<usize, PipeError> {
    let mut grid = Grid::parse(text)?;
    area_pipeline(&mut grid).map(|(_, area)| area)
}

/// Run both pipelines over one decoded grid.
pub fn analyze(text: &str) -> Result<Analysis, PipeError> {
    let grid = Grid::parse(text)?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        start_x = grid.start().x,
        start_y = grid.start().y,
        "decoded"
    );
    let farthest = distance_pipeline(&mut grid.clone())?;
    let mut classified = grid;
    let (loop_len, interior) = area_pipeline(&mut classified)?;
    let census = classified.census();
    Ok(Analysis {
        farthest,
        loop_len,
        interior,
        census,
        classified,
    })
}

fn distance_pipeline(grid: &mut Grid) -> Result<usize, PipeError> {
    let pipe = resolve_start(grid)?;
    debug!(start = %pipe.symbol(), "start resolved");
    let farthest = farthest_distance(grid)?;
    debug!(farthest, "walkers met");
    Ok(farthest)
}

fn area_pipeline(grid: &mut Grid) -> Result<(usize, usize), PipeError> {
    let loop_len = mark_loop(grid)?;
    debug!(loop_len, "loop marked");
    let cleared = remove_junk(grid);
    debug!(cleared, "junk removed");
    let interior = classify_interior(grid)?;
    debug!(interior, "interior classified");
    Ok((loop_len, interior))
}
