//! Tiles: directions, validated pipe shapes, and the symbol codec.
//!
//! Purpose
//! - Give every grid cell a small exhaustive state (`Tile`) so each phase
//!   transition is a total match instead of flag arithmetic.
//! - Make the two-connector invariant unrepresentable when broken: a `Pipe`
//!   can only be built from exactly two distinct directions.
//!
//! Layout
//! - `types.rs`: `Dir`, `DirSet`, `Pipe`, `Tile`.
//! - `codec.rs`: symbol ↔ tile mapping (decoding is permissive: unknown
//!   symbols are ground).

mod codec;
mod types;

pub use types::{Dir, DirSet, Pipe, Tile};
