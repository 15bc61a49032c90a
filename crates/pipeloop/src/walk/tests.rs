use super::*;
use crate::error::{Fault, PipeError};
use crate::gen::{draw_loop, LoopParams};
use crate::grid::{Grid, Pos};
use crate::start::resolve_start;
use crate::tile::{Dir, Tile};
use proptest::prelude::*;

fn resolved(text: &str) -> Grid {
    let mut g = Grid::parse(text).unwrap();
    resolve_start(&mut g).unwrap();
    g
}

const SQUARE: &str = ".....\n.S-7.\n.|.|.\n.L-J.\n.....";
const COMPLEX: &str = "..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...";
const COMPLEX_JUNK: &str = "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ";
const WIDE: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";

#[test]
fn walker_turns_through_corners() {
    let g = resolved(SQUARE);
    let mut w = Walker::new(Pos::new(1, 1), Dir::Right);
    w.advance(&g).unwrap();
    assert_eq!((w.pos(), w.heading()), (Pos::new(2, 1), Dir::Right));
    w.advance(&g).unwrap();
    assert_eq!((w.pos(), w.heading()), (Pos::new(3, 1), Dir::Down));
    assert_eq!(w.steps(), 2);
}

#[test]
fn farthest_on_square() {
    assert_eq!(farthest_distance(&resolved(SQUARE)).unwrap(), 4);
}

#[test]
fn farthest_on_complex_loop() {
    assert_eq!(farthest_distance(&resolved(COMPLEX)).unwrap(), 8);
    assert_eq!(farthest_distance(&resolved(COMPLEX_JUNK)).unwrap(), 8);
}

#[test]
fn farthest_on_wide_loop() {
    assert_eq!(farthest_distance(&resolved(WIDE)).unwrap(), 23);
}

#[test]
fn lead_choice_does_not_matter() {
    for text in [SQUARE, COMPLEX, COMPLEX_JUNK, WIDE] {
        let g = resolved(text);
        assert_eq!(
            farthest_distance_with(&g, Lead::First).unwrap(),
            farthest_distance_with(&g, Lead::Second).unwrap()
        );
    }
}

#[test]
fn distance_needs_resolved_start() {
    let g = Grid::parse(SQUARE).unwrap();
    assert_eq!(
        farthest_distance(&g).unwrap_err(),
        PipeError::Topology {
            at: Pos::new(1, 1),
            fault: Fault::UnresolvedStart
        }
    );
}

#[test]
fn broken_loop_is_topology_error() {
    let g = resolved("S-7\n|.|\nL-.");
    assert!(matches!(
        farthest_distance(&g),
        Err(PipeError::Topology {
            at: Pos { x: 2, y: 2 },
            fault: Fault::Broken { .. }
        })
    ));
}

#[test]
fn walking_off_the_grid_is_index_error() {
    let g = resolved("S7\n|J");
    assert_eq!(
        farthest_distance(&g).unwrap_err(),
        PipeError::Index { x: 0, y: 2 }
    );
}

#[test]
fn dead_end_beside_closed_loop_is_broken() {
    // The path from S dead-ends at (2, 2); the closed loop to its right is
    // never entered, so both modes stop there instead of walking on.
    let text = "S-7F-7\n|.|L-J\nL-|...";
    let expected = PipeError::Topology {
        at: Pos::new(2, 2),
        fault: Fault::Broken { heading: Dir::Right },
    };
    assert_eq!(farthest_distance(&resolved(text)).unwrap_err(), expected);
    let mut g = Grid::parse(text).unwrap();
    assert_eq!(mark_loop(&mut g).unwrap_err(), expected);
}

#[test]
fn mark_loop_resolves_and_marks() {
    let mut g = Grid::parse(COMPLEX_JUNK).unwrap();
    let len = mark_loop(&mut g).unwrap();
    assert_eq!(len, 16);
    assert_eq!(g.census().loop_tiles, 16);
    assert_eq!(*g.tile_at(Pos::new(0, 2)).unwrap(), Tile::LoopPipe(crate::Pipe::DOWN_RIGHT));
    // Junk stays unmarked.
    assert_eq!(*g.tile_at(Pos::new(0, 0)).unwrap(), Tile::Pipe(crate::Pipe::DOWN_LEFT));
}

#[test]
fn mark_loop_twice_is_stable() {
    let mut g = Grid::parse(WIDE).unwrap();
    let first = mark_loop(&mut g).unwrap();
    let snapshot = g.clone();
    assert_eq!(mark_loop(&mut g).unwrap(), first);
    assert_eq!(g, snapshot);
}

#[test]
fn loop_length_is_twice_farthest() {
    for text in [SQUARE, COMPLEX, WIDE] {
        let mut g = Grid::parse(text).unwrap();
        let len = mark_loop(&mut g).unwrap();
        assert_eq!(len, 2 * farthest_distance(&g).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_loops_walk_consistently(
        seed in any::<u64>(),
        width in 2usize..16,
        height in 2usize..16,
        cells in 1usize..80,
        junk in 0.0f64..0.5,
    ) {
        let params = LoopParams { width, height, cells, junk };
        let expected = draw_loop(params, seed).unwrap();
        let mut g = Grid::parse(&expected.text()).unwrap();
        let len = mark_loop(&mut g).unwrap();
        prop_assert_eq!(len, expected.loop_len);

        let first = farthest_distance_with(&g, Lead::First).unwrap();
        let second = farthest_distance_with(&g, Lead::Second).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, expected.farthest);
        prop_assert_eq!(len, 2 * first);

        // Every loop tile's connectors lead to loop tiles that connect back.
        for pos in g.positions() {
            let tile = *g.tile_at(pos).unwrap();
            if !tile.is_loop() {
                continue;
            }
            for d in tile.connections().iter() {
                let n = g.step(pos, d).unwrap();
                let other = *g.tile_at(n).unwrap();
                prop_assert!(other.is_loop());
                prop_assert!(other.connections().contains(d.opposite()));
            }
        }
    }
}
