//! Run the reference sketches and a few generated puzzles, printing answers.
//!
//! Usage:
//!   cargo run -p pipeloop --example scenarios
//!   cargo run -p pipeloop --example scenarios -- 7     (seed for generated puzzles)

use pipeloop::api::{analyze, draw_loop, LoopParams};

const SKETCHES: [(&str, &str); 3] = [
    ("square", ".....\n.S-7.\n.|.|.\n.L-J.\n....."),
    ("complex", "..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ..."),
    (
        "squeeze",
        "..........\n.S------7.\n.|F----7|.\n.||OOOO||.\n.||OOOO||.\n.|L-7F-J|.\n.|II||II|.\n.L--JL--J.\n..........",
    ),
];

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    for (name, text) in SKETCHES {
        match analyze(text) {
            Ok(a) => println!(
                "{name:>8}: farthest={} interior={} loop={}",
                a.farthest, a.interior, a.loop_len
            ),
            Err(e) => println!("{name:>8}: error: {e}"),
        }
    }

    let params = LoopParams {
        width: 20,
        height: 10,
        cells: 60,
        junk: 0.2,
    };
    for k in 0..3 {
        let g = draw_loop(params, seed + k).expect("generator params are valid");
        let a = analyze(&g.text()).expect("generated puzzles are well formed");
        println!(
            "seed {:>4}: farthest={} (expected {}) interior={} (expected {})",
            g.seed, a.farthest, g.farthest, a.interior, g.interior
        );
        print!("{}", a.classified);
    }
}
