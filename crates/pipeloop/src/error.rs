//! Error type shared by every phase.

use std::fmt;

use crate::grid::Pos;
use crate::tile::Dir;

/// Errors surfaced while decoding or analysing a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipeError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row's length differs from the first row's.
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The grid must hold exactly one start marker.
    Start { found: usize },
    /// The pipe network around `at` does not form a simple closed loop.
    Topology { at: Pos, fault: Fault },
    /// A computed position fell outside the grid.
    Index { x: isize, y: isize },
}

/// What went wrong in a `PipeError::Topology`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The start tile has `count` connecting neighbours instead of two.
    StartDegree { count: usize },
    /// A walker heading `heading` entered a tile with no connector facing it.
    Broken { heading: Dir },
    /// An operation needed the start shape before it was resolved.
    UnresolvedStart,
    /// A horizontal run was not closed by a `J` or `7` corner.
    OpenRun,
    /// A `-`, `J` or `7` loop tile appeared with no run open.
    StrayRun,
    /// A row scan ended inside the loop.
    RowParity,
}

impl PipeError {
    pub(crate) fn topology(at: Pos, fault: Fault) -> Self {
        Self::Topology { at, fault }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::StartDegree { count } => {
                write!(f, "start tile has {count} connecting neighbours, expected 2")
            }
            Fault::Broken { heading } => {
                write!(f, "tile entered heading {heading:?} has no matching connector")
            }
            Fault::UnresolvedStart => write!(f, "start tile shape not resolved"),
            Fault::OpenRun => write!(f, "horizontal run not closed by a J or 7 corner"),
            Fault::StrayRun => write!(f, "horizontal connector with no opening corner"),
            Fault::RowParity => write!(f, "row scan ended inside the loop"),
        }
    }
}

impl fmt::Display for PipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipeError::Empty => write!(f, "grid is empty"),
            PipeError::Shape {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has length {actual}, expected {expected} (grid must be rectangular)"
            ),
            PipeError::Start { found } => {
                write!(f, "expected exactly one start marker, found {found}")
            }
            PipeError::Topology { at, fault } => {
                write!(f, "malformed loop at ({}, {}): {fault}", at.x, at.y)
            }
            PipeError::Index { x, y } => write!(f, "position ({x}, {y}) is outside the grid"),
        }
    }
}

impl std::error::Error for PipeError {}
