//! Loop walking: farthest distance by meeting walkers, and loop marking.
//!
//! Purpose
//! - `farthest_distance`: two walkers leave the start in opposite directions;
//!   positions are compared after every single step, so the meeting tile is
//!   found whatever the loop length's parity.
//! - `mark_loop`: one walker goes once around, converting every visited pipe
//!   into a loop pipe.
//!
//! Both modes only follow connectors that point back at the tile they come
//! from, so a malformed network surfaces as a `Broken` topology error rather
//! than a walk off the loop. Every tile has two ends, so a walk that never
//! breaks always comes back to the start.
//!
//! Layout
//! - `walker.rs`: single-step cursor.
//! - `distance.rs`: meeting walkers.
//! - `mark.rs`: full-circuit marking.

mod distance;
mod mark;
mod walker;

pub use distance::{farthest_distance, farthest_distance_with, Lead};
pub use mark::mark_loop;
pub use walker::Walker;

#[cfg(test)]
mod tests;
