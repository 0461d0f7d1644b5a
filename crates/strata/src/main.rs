//! strata: build a multi-level dungeon and print it
//!
//! Each level is printed top to bottom with the tile colours of its cells,
//! followed by a short summary of stairways and unlinked rooms.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use log::LevelFilter;

use strata_core::dungeon::{CellType, Dungeon, Rgb};
use strata_core::{BuildConfig, DungeonBuilder};

#[derive(Debug, Parser)]
#[command(name = "strata", version, about = "Generate a multi-level dungeon")]
struct Args {
    /// RNG seed; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Number of levels
    #[arg(long)]
    depth: Option<usize>,

    /// JSON build config; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print only this level
    #[arg(long, value_name = "Z")]
    level: Option<usize>,

    /// Plain glyphs without colour
    #[arg(long)]
    plain: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn build_config(&self) -> anyhow::Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => BuildConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.build_config()?;
    let (dungeon, seed) = DungeonBuilder::new(config)
        .build_seeded()
        .context("building dungeon")?;

    let levels = match args.level {
        Some(z) if z >= dungeon.depth() => {
            bail!("level {z} does not exist (depth {})", dungeon.depth())
        }
        Some(z) => z..z + 1,
        None => 0..dungeon.depth(),
    };

    let mut out = io::stdout().lock();
    for z in levels {
        print_level(&mut out, &dungeon, z, args.plain)?;
    }
    print_summary(&mut out, &dungeon, seed)?;
    out.flush()?;
    Ok(())
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn print_level(out: &mut impl Write, dungeon: &Dungeon, z: usize, plain: bool) -> io::Result<()> {
    let grid = dungeon.tiles();
    queue!(out, Print(format!("Level {z}\n")))?;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let attrs = grid.get(x, y, z).attributes();
            if plain {
                queue!(out, Print(attrs.glyph))?;
            } else {
                let styled = attrs
                    .glyph
                    .with(color(attrs.foreground))
                    .on(color(attrs.background));
                queue!(out, PrintStyledContent(styled))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    queue!(out, Print("\n"))
}

fn print_summary(out: &mut impl Write, dungeon: &Dungeon, seed: u64) -> io::Result<()> {
    writeln!(out, "seed: {seed}")?;
    writeln!(
        out,
        "levels: {}x{}x{}",
        dungeon.width(),
        dungeon.height(),
        dungeon.depth()
    )?;
    for z in 0..dungeon.depth() {
        let grid = dungeon.tiles();
        writeln!(
            out,
            "  level {z}: {} room(s), {} up, {} down",
            dungeon.rooms(z).len(),
            grid.count(z, CellType::StairsUp),
            grid.count(z, CellType::StairsDown)
        )?;
    }
    writeln!(out, "stairways: {}", dungeon.stairways().len())?;
    if !dungeon.unlinked_rooms().is_empty() {
        writeln!(out, "unlinked rooms:")?;
        for room in dungeon.unlinked_rooms() {
            writeln!(out, "  level {} room {}", room.z, room.region)?;
        }
    }
    Ok(())
}
