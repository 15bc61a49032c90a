//! Reproducible random loop puzzles.
//!
//! Purpose
//! - Produce grids with a known answer for property tests, benchmarks, and
//!   the `gen` command of the CLI.
//!
//! Construction
//! - Grow a 4-connected set of cells on the `(width-1) × (height-1)` cell
//!   lattice, accepting a cell only if the set stays free of holes and of
//!   pinch points (two cells touching only at a corner).
//! - The tile at corner `(x, y)` of that lattice takes its connectors from
//!   the four cells around it: it connects up when the two cells above it
//!   differ in membership, and so on. Such a polyomino's boundary is one
//!   simple cycle, so every tile has zero or two connectors.
//! - Interior tiles are the corners with all four surrounding cells inside.
//!
//! The loop length on a square lattice is always even, so the expected
//! farthest distance is exactly half of it.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::grid::Pos;
use crate::tile::{Dir, DirSet, Pipe, Tile};

/// Error type for the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Shape parameters of a random puzzle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopParams {
    /// Tile columns (at least 2).
    pub width: usize,
    /// Tile rows (at least 2).
    pub height: usize,
    /// Target number of lattice cells enclosed by the loop.
    pub cells: usize,
    /// Probability that a non-loop tile becomes a junk pipe.
    pub junk: f64,
}

impl Default for LoopParams {
    fn default() -> Self {
        Self {
            width: 12,
            height: 8,
            cells: 30,
            junk: 0.0,
        }
    }
}

impl LoopParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.width < 2 || self.height < 2 {
            return Err(GeneratorError::invalid("grid must be at least 2x2 tiles"));
        }
        if self.cells == 0 {
            return Err(GeneratorError::invalid("need at least one cell"));
        }
        if !(0.0..=1.0).contains(&self.junk) {
            return Err(GeneratorError::invalid("junk must lie in [0, 1]"));
        }
        Ok(())
    }
}

/// A generated puzzle and its exact answers.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLoop {
    pub rows: Vec<String>,
    pub start: Pos,
    pub loop_len: usize,
    pub farthest: usize,
    pub interior: usize,
    pub seed: u64,
}

impl GeneratedLoop {
    /// Rows joined by newlines, ready for `Grid::parse`.
    pub fn text(&self) -> String {
        self.rows.join("\n")
    }
}

/// Draw one puzzle; the same `(params, seed)` always yields the same grid.
pub fn draw_loop(params: LoopParams, seed: u64) -> Result<GeneratedLoop, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let region = grow_region(&params, &mut rng);

    let width = params.width;
    let height = params.height;
    let mut tiles = vec![Tile::Ground; width * height];
    let mut loop_tiles = Vec::new();
    let mut interior = 0;
    for y in 0..height {
        for x in 0..width {
            let [a, b, c, d] = region.around(x, y);
            let mut set = DirSet::empty();
            if a != b {
                set.insert(Dir::Up);
            }
            if c != d {
                set.insert(Dir::Down);
            }
            if a != c {
                set.insert(Dir::Left);
            }
            if b != d {
                set.insert(Dir::Right);
            }
            if set.is_empty() {
                if a && b && c && d {
                    interior += 1;
                }
                continue;
            }
            let pipe = Pipe::from_set(set)
                .ok_or_else(|| GeneratorError::degenerate("pinch point in region"))?;
            tiles[y * width + x] = Tile::Pipe(pipe);
            loop_tiles.push(Pos::new(x, y));
        }
    }

    let start = *loop_tiles
        .choose(&mut rng)
        .ok_or_else(|| GeneratorError::degenerate("empty loop"))?;
    tiles[start.y * width + start.x] = Tile::Start;

    if params.junk > 0.0 {
        scatter_junk(&mut tiles, width, height, start, params.junk, &mut rng);
    }

    let rows = tiles
        .chunks(width)
        .map(|row| row.iter().map(|t| t.symbol()).collect())
        .collect();
    let loop_len = loop_tiles.len();
    Ok(GeneratedLoop {
        rows,
        start,
        loop_len,
        farthest: loop_len / 2,
        interior,
        seed,
    })
}

/// Fill ground tiles (inside or outside the loop) with random pipes, never
/// pointing at the start.
fn scatter_junk(
    tiles: &mut [Tile],
    width: usize,
    height: usize,
    start: Pos,
    density: f64,
    rng: &mut StdRng,
) {
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            if tiles[i] != Tile::Ground || !rng.gen_bool(density) {
                continue;
            }
            let towards_start = Dir::ALL.into_iter().find(|d| {
                let (dx, dy) = d.delta();
                x as isize + dx == start.x as isize && y as isize + dy == start.y as isize
            });
            let candidates: Vec<Pipe> = Pipe::ALL
                .into_iter()
                .filter(|pipe| towards_start.map_or(true, |d| !pipe.contains(d)))
                .collect();
            if let Some(pipe) = candidates.choose(rng) {
                tiles[i] = Tile::Pipe(*pipe);
            }
        }
    }
}

/// Membership grid of lattice cells.
struct Region {
    cols: usize,
    rows: usize,
    inside: Vec<bool>,
}

impl Region {
    fn get(&self, cx: isize, cy: isize) -> bool {
        if cx < 0 || cy < 0 || cx as usize >= self.cols || cy as usize >= self.rows {
            return false;
        }
        self.inside[cy as usize * self.cols + cx as usize]
    }

    /// Cells around tile corner `(x, y)`: `[up-left, up-right, down-left, down-right]`.
    fn around(&self, x: usize, y: usize) -> [bool; 4] {
        let (x, y) = (x as isize, y as isize);
        [
            self.get(x - 1, y - 1),
            self.get(x, y - 1),
            self.get(x - 1, y),
            self.get(x, y),
        ]
    }

    fn has_pinch_near(&self, cx: usize, cy: usize) -> bool {
        // Corners of cell (cx, cy) are tiles (cx..=cx+1, cy..=cy+1).
        (cy..=cy + 1).any(|y| {
            (cx..=cx + 1).any(|x| {
                let [a, b, c, d] = self.around(x, y);
                a == d && b == c && a != b
            })
        })
    }

    /// True if every outside cell is reachable from beyond the lattice border.
    fn is_hole_free(&self) -> bool {
        // Flood over a one-cell frame around the lattice.
        let w = self.cols + 2;
        let h = self.rows + 2;
        let mut seen = vec![false; w * h];
        let mut stack = vec![(0usize, 0usize)];
        seen[0] = true;
        let mut reached_outside = 0;
        while let Some((x, y)) = stack.pop() {
            if x >= 1 && y >= 1 && x <= self.cols && y <= self.rows {
                reached_outside += 1;
            }
            for d in Dir::ALL {
                let (dx, dy) = d.delta();
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if seen[ny * w + nx] || self.get(nx as isize - 1, ny as isize - 1) {
                    continue;
                }
                seen[ny * w + nx] = true;
                stack.push((nx, ny));
            }
        }
        let outside = self.inside.iter().filter(|&&c| !c).count();
        reached_outside == outside
    }
}

fn grow_region(params: &LoopParams, rng: &mut StdRng) -> Region {
    let cols = params.width - 1;
    let rows = params.height - 1;
    let mut region = Region {
        cols,
        rows,
        inside: vec![false; cols * rows],
    };
    let target = params.cells.min(cols * rows);
    if target == cols * rows {
        region.inside.fill(true);
        return region;
    }
    let seed_cell = rng.gen_range(0..cols * rows);
    region.inside[seed_cell] = true;
    let mut count = 1;
    let mut attempts = 0;
    let max_attempts = 50 * target;

    while count < target && attempts < max_attempts {
        attempts += 1;
        let frontier: Vec<usize> = (0..cols * rows)
            .filter(|&i| !region.inside[i])
            .filter(|&i| {
                let (cx, cy) = ((i % cols) as isize, (i / cols) as isize);
                Dir::ALL.into_iter().any(|d| {
                    let (dx, dy) = d.delta();
                    region.get(cx + dx, cy + dy)
                })
            })
            .collect();
        let Some(&cell) = frontier.choose(rng) else {
            break;
        };
        region.inside[cell] = true;
        if region.has_pinch_near(cell % cols, cell / cols) || !region.is_hole_free() {
            region.inside[cell] = false;
            continue;
        }
        count += 1;
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_validation() {
        assert!(LoopParams::default().validate().is_ok());
        let narrow = LoopParams {
            width: 1,
            ..LoopParams::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(GeneratorError::InvalidParams { .. })
        ));
        let junky = LoopParams {
            junk: 1.5,
            ..LoopParams::default()
        };
        assert!(junky.validate().is_err());
    }

    #[test]
    fn single_cell_is_square() {
        let params = LoopParams {
            width: 2,
            height: 2,
            cells: 1,
            junk: 0.0,
        };
        let g = draw_loop(params, 7).unwrap();
        assert_eq!(g.loop_len, 4);
        assert_eq!(g.farthest, 2);
        assert_eq!(g.interior, 0);
        let text = g.text();
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.len(), 5);
    }

    #[test]
    fn full_lattice_is_border_loop() {
        let params = LoopParams {
            width: 5,
            height: 4,
            cells: 100,
            junk: 0.0,
        };
        let g = draw_loop(params, 1).unwrap();
        // Border of a 5x4 tile grid, interior is the 3x2 middle.
        assert_eq!(g.loop_len, 14);
        assert_eq!(g.interior, 6);
    }

    #[test]
    fn same_seed_same_grid() {
        let params = LoopParams {
            junk: 0.3,
            ..LoopParams::default()
        };
        let a = draw_loop(params, 99).unwrap();
        let b = draw_loop(params, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn grown_region_stays_simple() {
        let params = LoopParams {
            width: 10,
            height: 10,
            cells: 40,
            junk: 0.0,
        };
        for seed in 0..20 {
            let g = draw_loop(params, seed).unwrap();
            assert_eq!(g.loop_len % 2, 0);
            let pipes = g
                .rows
                .iter()
                .flat_map(|r| r.chars())
                .filter(|c| "|-LJ7FS".contains(*c))
                .count();
            assert_eq!(pipes, g.loop_len);
        }
    }
}
