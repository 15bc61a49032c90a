use anyhow::{Context, Result};
use pipeloop::api::{GeneratedLoop, LoopParams};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Expected answers written next to a generated puzzle.
#[derive(Debug, Serialize)]
pub struct Expectation {
    pub code_rev: String,
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub cells: usize,
    pub junk: f64,
    pub start: [usize; 2],
    pub loop_len: usize,
    pub farthest: usize,
    pub interior: usize,
    pub puzzle: String,
}

impl Expectation {
    pub fn new(params: LoopParams, generated: &GeneratedLoop, puzzle: &Path) -> Self {
        Self {
            code_rev: code_rev(),
            seed: generated.seed,
            width: params.width,
            height: params.height,
            cells: params.cells,
            junk: params.junk,
            start: [generated.start.x, generated.start.y],
            loop_len: generated.loop_len,
            farthest: generated.farthest,
            interior: generated.interior,
            puzzle: puzzle.to_string_lossy().into_owned(),
        }
    }
}

/// Write the puzzle text to `out` and `<stem>.expect.json` beside it.
pub fn write_puzzle(out: &Path, params: LoopParams, generated: &GeneratedLoop) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut text = generated.text();
    text.push('\n');
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;

    let sidecar = expect_path(out);
    let doc = Expectation::new(params, generated, out);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn expect_path(puzzle: &Path) -> PathBuf {
    let stem = puzzle
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("puzzle"));
    let mut name = stem;
    name.push(".expect.json");
    puzzle.with_file_name(name)
}

pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}
