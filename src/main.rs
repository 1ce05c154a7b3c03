use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use hexworld::{ascii, export, worldgen, WorldGenConfig, WorldMap};

#[derive(Parser, Debug)]
#[command(name = "hexworld")]
#[command(about = "Generate procedural hex worlds with settlements and roads")]
struct Args {
    /// Width of the map in tiles
    #[arg(short = 'W', long, default_value = "96")]
    width: u32,

    /// Height of the map in tiles
    #[arg(short = 'H', long, default_value = "96")]
    height: u32,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of cities to place
    #[arg(long, default_value = "3")]
    cities: u32,

    /// Number of villages to place
    #[arg(long, default_value = "6")]
    villages: u32,

    /// Number of hamlets to place
    #[arg(long, default_value = "8")]
    hamlets: u32,

    /// Export the generated world as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Skip the ASCII map printout
    #[arg(long)]
    no_map: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let config = WorldGenConfig {
        width: args.width,
        height: args.height,
        seed,
        num_cities: args.cities,
        num_villages: args.villages,
        num_hamlets: args.hamlets,
        ..WorldGenConfig::default()
    };

    println!(
        "Generating {}x{} world with seed {}...",
        config.width, config.height, config.seed
    );
    let world = worldgen::generate(&config);
    println!("Placed {} settlements", world.settlements.len());

    if let Some(path) = &args.export {
        match export::write_json(&world, path) {
            Ok(()) => println!("Exported world to {}", path.display()),
            Err(err) => {
                eprintln!("Export failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let map = match WorldMap::new(world) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("World generation failed: {err}");
            eprintln!("Try a different seed or a larger map.");
            return ExitCode::FAILURE;
        }
    };

    if !args.no_map {
        println!();
        print!("{}", ascii::render_map(map.grid()));
        println!();
    }

    for settlement in map.settlements() {
        println!("{}", ascii::settlement_summary(settlement));
    }
    println!("Start tile: {}", map.start_tile());

    ExitCode::SUCCESS
}
