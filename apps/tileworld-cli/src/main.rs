mod config;
mod pawns;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec2;
use tileworld_kernel::WorldGenerator;
use tileworld_render::{AsciiRenderer, Camera2D, Renderer};
use tileworld_tools::{GridInspector, RegistryInspector};
use tracing_subscriber::EnvFilter;

use crate::pawns::PawnDemo;

#[derive(Parser)]
#[command(name = "tileworld-cli", about = "CLI tool for tileworld operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Generate an island and print it
    Generate {
        /// World seed (defaults to the current time)
        #[arg(short, long)]
        seed: Option<i64>,
        /// Map edge length in tiles
        #[arg(long, default_value = "64")]
        size: u32,
        /// Tile edge length in world units
        #[arg(long, default_value = "16")]
        tile_size: u32,
        /// YAML generator config
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "summary")]
        format: Format,
    },
    /// Spawn two pawns and drive them with scripted input
    Pawns {
        /// World seed (defaults to the current time)
        #[arg(short, long)]
        seed: Option<i64>,
        /// Map edge length in tiles
        #[arg(long, default_value = "64")]
        size: u32,
        /// Number of frames to simulate
        #[arg(short, long, default_value = "32")]
        ticks: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Summary,
    Ascii,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("tileworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tileworld_common::crate_info());
            println!("pgen: {}", tileworld_pgen::crate_info());
            println!("kernel: {}", tileworld_kernel::crate_info());
            println!("ecs: {}", tileworld_ecs::crate_info());
            println!("render: {}", tileworld_render::crate_info());
            println!("input: {}", tileworld_input::crate_info());
            println!("tools: {}", tileworld_tools::crate_info());
        }
        Commands::Generate {
            seed,
            size,
            tile_size,
            config: config_path,
            format,
        } => {
            let seed = match seed {
                Some(seed) => seed,
                None => time_seed()?,
            };
            let generator = WorldGenerator::new(config::load_config(config_path.as_deref())?)?;
            let grid = generator.generate(seed, size, tile_size)?;

            match format {
                Format::Summary => {
                    println!("seed={seed}");
                    println!("{}", GridInspector::summary(&grid));
                }
                Format::Ascii => {
                    println!("seed={seed}");
                    print!("{}", AsciiRenderer::default().render_grid(&grid));
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
            }
        }
        Commands::Pawns { seed, size, ticks } => {
            let seed = match seed {
                Some(seed) => seed,
                None => time_seed()?,
            };
            let grid = WorldGenerator::default().generate(seed, size, 16)?;
            println!("seed={seed}");
            println!("{}", GridInspector::summary(&grid));

            let mut demo = PawnDemo::new(&grid);
            demo.run(ticks);

            for pawn in demo.report() {
                let tile = pawn.tile.map_or("off-grid", |k| k.name());
                println!(
                    "{} {}: pos=({:.1}, {:.1}) tile={tile}",
                    pawn.id, pawn.sprite, pawn.position.x, pawn.position.y
                );
            }
            println!("{}", RegistryInspector::summary(demo.registry()));

            // A small window around the lead pawn.
            let camera = Camera2D {
                viewport: Vec2::splat(16.0 * grid.tile_size() as f32),
                ..*demo.camera()
            };
            print!("{}", AsciiRenderer::default().render(&grid, &camera));
        }
    }

    Ok(())
}

fn time_seed() -> anyhow::Result<i64> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(now.as_millis() as i64)
}
