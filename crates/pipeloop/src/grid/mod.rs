//! Rectangular tile storage with bounds-checked access.
//!
//! Tiles live in one row-major `Vec`; neighbour relations are coordinate
//! arithmetic plus bounds checks, never stored references.

use std::fmt;
use std::str::FromStr;

use crate::error::PipeError;
use crate::tile::{Dir, Tile};

/// Tile coordinates; `x` is the column, `y` the row (row 0 on top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Tile counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub loop_tiles: usize,
    pub interior: usize,
    /// Ground tiles outside the loop (or not yet classified).
    pub exterior: usize,
    /// Pipes not on the loop.
    pub junk: usize,
    pub start: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.loop_tiles + self.interior + self.exterior + self.junk + self.start
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    start: Pos,
}

impl Grid {
    /// Decode a grid from text, one row per line.
    pub fn parse(text: &str) -> Result<Self, PipeError> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_rows(&rows)
    }

    /// Decode a grid from rows of symbols.
    ///
    /// Every row must have the first row's length, and exactly one tile must
    /// be the start marker.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PipeError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 {
            return Err(PipeError::Empty);
        }
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        let mut starts = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let before = tiles.len();
            for (x, c) in row.as_ref().chars().enumerate() {
                let tile = Tile::from_symbol(c);
                if tile == Tile::Start {
                    starts.push(Pos::new(x, y));
                }
                tiles.push(tile);
            }
            let actual = tiles.len() - before;
            if actual != width {
                return Err(PipeError::Shape {
                    row: y,
                    expected: width,
                    actual,
                });
            }
        }
        match starts.as_slice() {
            [start] => Ok(Self {
                width,
                height,
                tiles,
                start: *start,
            }),
            _ => Err(PipeError::Start {
                found: starts.len(),
            }),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Pos) -> Result<usize, PipeError> {
        if self.contains(pos) {
            Ok(pos.y * self.width + pos.x)
        } else {
            Err(PipeError::Index {
                x: pos.x as isize,
                y: pos.y as isize,
            })
        }
    }

    pub fn tile_at(&self, pos: Pos) -> Result<&Tile, PipeError> {
        let i = self.index(pos)?;
        Ok(&self.tiles[i])
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) -> Result<(), PipeError> {
        let i = self.index(pos)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Position one step from `pos` in `dir`, if it lies inside the grid.
    pub fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        self.step(pos, dir).ok()
    }

    /// Like `neighbor`, but leaving the grid is an `Index` error.
    pub fn step(&self, pos: Pos, dir: Dir) -> Result<Pos, PipeError> {
        let (dx, dy) = dir.delta();
        let x = pos.x as isize + dx;
        let y = pos.y as isize + dy;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(PipeError::Index { x, y });
        }
        Ok(Pos::new(x as usize, y as usize))
    }

    /// All positions, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos::new(x, y)))
    }

    /// Tiles of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        if y >= self.height {
            return None;
        }
        Some(&self.tiles[y * self.width..(y + 1) * self.width])
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    pub fn census(&self) -> Census {
        let mut c = Census::default();
        for tile in &self.tiles {
            match tile {
                Tile::Ground => c.exterior += 1,
                Tile::Start => c.start += 1,
                Tile::Pipe(_) => c.junk += 1,
                Tile::LoopPipe(_) => c.loop_tiles += 1,
                Tile::Interior => c.interior += 1,
            }
        }
        c
    }
}

impl FromStr for Grid {
    type Err = PipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).filter_map(|y| self.row(y)) {
            let line: String = row.iter().map(|t| t.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
