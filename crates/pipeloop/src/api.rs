//! Curated surface for callers that only need answers or generated puzzles.
//!
//! Prefer these re-exports over reaching into individual modules.

pub use crate::analysis::{analyze, enclosed_area_of, farthest_distance_of, Analysis};
pub use crate::error::{Fault, PipeError};
pub use crate::gen::{draw_loop, GeneratedLoop, GeneratorError, LoopParams};
pub use crate::grid::{Census, Grid, Pos};

/// Both answers for one puzzle: `(farthest distance, interior tiles)`.
pub fn solve(text: &str) -> Result<(usize, usize), PipeError> {
    let a = analyze(text)?;
    Ok((a.farthest, a.interior))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn solve_larger_example() {
        let text = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";
        assert_eq!(solve(text).unwrap(), (70, 8));
    }

    #[test]
    fn solve_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let params = LoopParams {
                width: rng.gen_range(4..20),
                height: rng.gen_range(4..20),
                cells: rng.gen_range(1..120),
                junk: 0.25,
            };
            let g = draw_loop(params, rng.gen()).unwrap();
            assert_eq!(solve(&g.text()).unwrap(), (g.farthest, g.interior));
        }
    }
}
