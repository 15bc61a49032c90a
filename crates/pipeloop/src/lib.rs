//! Closed-loop analysis over grids of connector tiles.
//!
//! A grid holds pipe tiles (`|`, `-`, `L`, `J`, `7`, `F`), ground, and a
//! single start marker `S` whose shape is not drawn. The crate
//! - infers the start tile's shape from its neighbours,
//! - walks the loop through the start (farthest distance, loop marking),
//! - classifies every non-loop tile as interior or exterior with a
//!   direction-aware crossing-number scan.
//!
//! Phases mutate one owned `Grid` in order:
//! decode → resolve start → mark loop → remove junk → classify interior.
//! Each phase finishes before the next begins; walkers and the classifier
//! only borrow the grid.

pub mod analysis;
pub mod api;
pub mod error;
pub mod gen;
pub mod grid;
pub mod interior;
pub mod start;
pub mod tile;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use analysis::{analyze, enclosed_area_of, farthest_distance_of, Analysis};
pub use error::{Fault, PipeError};
pub use grid::{Census, Grid, Pos};
pub use tile::{Dir, DirSet, Pipe, Tile};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze, enclosed_area_of, farthest_distance_of, Analysis};
    pub use crate::error::{Fault, PipeError};
    pub use crate::grid::{Census, Grid, Pos};
    pub use crate::interior::{classify_interior, remove_junk};
    pub use crate::start::{resolve_start, start_connections};
    pub use crate::tile::{Dir, DirSet, Pipe, Tile};
    pub use crate::walk::{farthest_distance, farthest_distance_with, mark_loop, Lead};
}
