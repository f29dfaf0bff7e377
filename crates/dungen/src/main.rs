//! Dungeon layout generator
//!
//! Generates one level and writes it as JSON. Settings come from defaults,
//! then an optional JSON config file, then command-line flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::LevelFilter;

use dg_core::delaunay::find_violation;
use dg_core::dungeon::generation::triangulate_rooms;
use dg_core::{Dungeon, GeneratorConfig, generate};

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a room-and-corridor dungeon layout", long_about = None)]
struct Args {
    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of rooms
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Level width in cells
    #[arg(long = "width")]
    width: Option<i32>,

    /// Level height in cells
    #[arg(long = "height")]
    height: Option<i32>,

    /// Smallest room size, as WIDTHxHEIGHT
    #[arg(long = "min-room", value_parser = parse_size)]
    min_room: Option<(i32, i32)>,

    /// Largest room size, as WIDTHxHEIGHT
    #[arg(long = "max-room", value_parser = parse_size)]
    max_room: Option<(i32, i32)>,

    /// Chance to keep each non-tree edge as an extra corridor
    #[arg(long = "extra-edges")]
    extra_edges: Option<f64>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Check the room triangulation for empty circumcircles
    #[arg(long = "validate")]
    validate: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse `WIDTHxHEIGHT`, e.g. `5x4`
fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Defaults, then the config file, then flags
fn build_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(size) = args.min_room {
        config.room_min_size = size;
    }
    if let Some(size) = args.max_room {
        config.room_max_size = size;
    }
    if let Some(p) = args.extra_edges {
        config.extra_edge_probability = p;
    }

    config.validate()?;
    Ok(config)
}

fn validate_layout(dungeon: &Dungeon) -> Result<()> {
    let triangulation = triangulate_rooms(&dungeon.rooms)?;
    if let Some(violation) = find_violation(&triangulation) {
        bail!("triangulation is not Delaunay: {violation}");
    }
    log::info!(
        "triangulation check passed ({} triangles)",
        triangulation.triangles().len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    log::debug!("config: {config:?}");

    let dungeon = generate(&config).context("generating dungeon")?;
    if args.validate {
        validate_layout(&dungeon)?;
    }

    log::info!(
        "seed {}: {} rooms, {} of {} corridors routed",
        config.seed,
        dungeon.rooms.len(),
        dungeon.corridors.len(),
        dungeon.selected_edges.len()
    );

    let json = serde_json::to_string_pretty(&dungeon)?;
    match &args.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
