use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pipeloop::api::{analyze, draw_loop, Analysis, LoopParams};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod sidecar;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Loop distance and enclosed area for pipe sketches")]
struct Cmd {
    /// Log phase details at DEBUG level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the farthest loop distance and the enclosed tile count
    Solve {
        /// Puzzle file; `-` reads stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Print a JSON object instead of plain lines
        #[arg(long)]
        json: bool,
        /// Also print the classified grid
        #[arg(long)]
        dump: bool,
    },
    /// Write a random puzzle and its expected answers
    Gen {
        #[arg(long, default_value_t = 12)]
        width: usize,
        #[arg(long, default_value_t = 8)]
        height: usize,
        /// Target number of enclosed lattice cells
        #[arg(long, default_value_t = 30)]
        cells: usize,
        /// Probability of junk pipes on non-loop tiles
        #[arg(long, default_value_t = 0.0)]
        junk: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small version JSON block
    Report,
}

/// Machine-readable answer of `solve --json`.
#[derive(Debug, Serialize, PartialEq)]
struct SolveReport {
    farthest: usize,
    interior: usize,
    loop_len: usize,
    width: usize,
    height: usize,
    exterior: usize,
}

impl From<&Analysis> for SolveReport {
    fn from(a: &Analysis) -> Self {
        Self {
            farthest: a.farthest,
            interior: a.interior,
            loop_len: a.loop_len,
            width: a.classified.width(),
            height: a.classified.height(),
            exterior: a.census.exterior,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve { input, json, dump } => solve(&input, json, dump),
        Action::Gen {
            width,
            height,
            cells,
            junk,
            seed,
            out,
        } => gen(
            LoopParams {
                width,
                height,
                cells,
                junk,
            },
            seed,
            &out,
        ),
        Action::Report => report(),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading puzzle from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn render(analysis: &Analysis, json: bool, dump: bool) -> Result<String> {
    let mut out = String::new();
    if json {
        let mut doc = serde_json::to_value(SolveReport::from(analysis))?;
        if dump {
            doc["grid"] = serde_json::Value::String(analysis.classified.to_string());
        }
        out.push_str(&serde_json::to_string_pretty(&doc)?);
        out.push('\n');
    } else {
        out.push_str(&format!("Maximum distance from start: {}\n", analysis.farthest));
        out.push_str(&format!("Inside area: {}\n", analysis.interior));
        if dump {
            out.push('\n');
            out.push_str(&analysis.classified.to_string());
        }
    }
    Ok(out)
}

fn solve(input: &str, json: bool, dump: bool) -> Result<()> {
    tracing::info!(input, json, dump, "solve");
    let text = read_input(input)?;
    let analysis = analyze(&text).with_context(|| format!("analysing {input}"))?;
    tracing::info!(
        farthest = analysis.farthest,
        interior = analysis.interior,
        loop_len = analysis.loop_len,
        "solved"
    );
    print!("{}", render(&analysis, json, dump)?);
    Ok(())
}

fn gen(params: LoopParams, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(
        width = params.width,
        height = params.height,
        cells = params.cells,
        junk = params.junk,
        seed,
        out = %out.display(),
        "gen"
    );
    let generated = draw_loop(params, seed)?;
    let sidecar = sidecar::write_puzzle(out, params, &generated)?;
    tracing::info!(
        loop_len = generated.loop_len,
        interior = generated.interior,
        sidecar = %sidecar.display(),
        "written"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": sidecar::code_rev(),
        "pipeloop": pipeloop::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
