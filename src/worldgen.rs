//! World generation orchestration
//!
//! One forward path through the six passes: terrain, shores, vegetation,
//! roughness, settlements, roads. Each pass mutates the shared grid in
//! place and may assume all prior passes are complete. There is no retry
//! or rollback; regeneration discards the grid and starts over.

use crate::config::WorldGenConfig;
use crate::grid::Grid;
use crate::roads;
use crate::seeds::WorldSeeds;
use crate::settlement::{self, Settlement};
use crate::terrain;
use crate::tile::Terrain;
use crate::vegetation;

/// A fully generated world: the tile grid plus the settlements placed on
/// it. Wrap it in a [`crate::world_map::WorldMap`] for runtime queries.
pub struct World {
    pub config: WorldGenConfig,
    pub seeds: WorldSeeds,
    pub grid: Grid,
    pub settlements: Vec<Settlement>,
}

/// Run the full generation pipeline for the given config. Identical
/// config (including seed) produces a bit-identical world.
pub fn generate(config: &WorldGenConfig) -> World {
    let seeds = WorldSeeds::from_master(config.seed);
    let mut grid = Grid::new(config.width, config.height, Terrain::DeepWater);

    terrain::generate_terrain(&mut grid, config, &seeds);
    terrain::smooth_shores(&mut grid);
    vegetation::generate_vegetation(&mut grid, config, &seeds);
    vegetation::generate_roughness(&mut grid, config, &seeds);
    let settlements = settlement::place_settlements(&mut grid, config, &seeds);
    roads::generate_roads(&mut grid, &settlements);

    World {
        config: config.clone(),
        seeds,
        grid,
        settlements,
    }
}
