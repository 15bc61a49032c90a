use crate::error::{Fault, PipeError};
use crate::grid::{Grid, Pos};
use crate::tile::Dir;

/// Cursor moving along connectors one tile at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walker {
    pos: Pos,
    heading: Dir,
    steps: usize,
}

impl Walker {
    /// Walker standing on `pos`, about to leave through `heading`.
    pub fn new(pos: Pos, heading: Dir) -> Self {
        Self {
            pos,
            heading,
            steps: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn heading(&self) -> Dir {
        self.heading
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Move into the neighbour in `heading` and turn onto that tile's other end.
    ///
    /// Fails with `Index` when the step leaves the grid and with `Broken` when
    /// the entered tile has no connector facing back.
    pub fn advance(&mut self, grid: &Grid) -> Result<(), PipeError> {
        let next = grid.step(self.pos, self.heading)?;
        let broken = PipeError::topology(
            next,
            Fault::Broken {
                heading: self.heading,
            },
        );
        let pipe = grid.tile_at(next)?.pipe().ok_or(broken.clone())?;
        let out = pipe.exit(self.heading).ok_or(broken)?;
        self.pos = next;
        self.heading = out;
        self.steps += 1;
        Ok(())
    }
}
