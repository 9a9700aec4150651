#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a headless, seeded arena match.

mod audio;
mod driver;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use arena_world::{ArenaConfig, LevelGrid, TileCatalog};
use clap::Parser;

use crate::driver::{Match, MatchSetup};

/// Runs a tile arena match without a window and prints what happened.
#[derive(Debug, Parser)]
#[command(name = "arena", version)]
struct Args {
    /// Level file: one row of comma-separated tile ids per line.
    #[arg(long)]
    level: PathBuf,

    /// TOML file overriding tile size, display size and level limits.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for enemy and player behavior.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulated milliseconds per tick.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Spawner tile as `column,row`. Repeat for several spawners.
    #[arg(long = "spawner", value_parser = parse_tile)]
    spawners: Vec<(i32, i32)>,

    /// Medipacks scattered over free tiles at the start.
    #[arg(long, default_value_t = 2)]
    medipacks: usize,
}

fn parse_tile(value: &str) -> Result<(i32, i32), String> {
    let (column, row) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `column,row`, got `{value}`"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|error| format!("invalid column `{column}`: {error}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|error| format!("invalid row `{row}`: {error}"))?;
    Ok((column, row))
}

/// Entry point for the arena command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ArenaConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    let grid = LevelGrid::load_level_from_path(&args.level, TileCatalog::standard(), &config)
        .with_context(|| format!("failed to load level {}", args.level.display()))?;

    let setup = MatchSetup {
        seed: args.seed,
        frame: Duration::from_millis(args.frame_ms),
        spawners: args.spawners,
        medipacks: args.medipacks,
    };
    let mut arena = Match::new(grid, setup)?;
    let summary = arena.run(args.ticks);
    println!("{summary}");
    Ok(())
}
