//! Terrain generation: elevation synthesis and classification (passes 1-2)
//!
//! Layered synthesis: multi-octave fBm for the base elevation shape, a
//! high-frequency detail layer on top, and a radial edge fade that pulls
//! elevation down toward the map border to bias toward island-shaped
//! landmasses. Elevation is bucketed into the six terrain types by fixed
//! thresholds, then a shore-smoothing pass guarantees no land tile borders
//! water without an intervening Shore tile.

use noise::{NoiseFn, Perlin, Seedable};

use crate::config::WorldGenConfig;
use crate::grid::Grid;
use crate::seeds::WorldSeeds;
use crate::tile::{Terrain, TileCoord};

// =============================================================================
// ELEVATION CONSTANTS
// =============================================================================

// Classification thresholds on normalized elevation [0, 1]
const DEEP_WATER_MAX: f32 = 0.22;
const SHALLOW_WATER_MAX: f32 = 0.32;
const SHORE_MAX: f32 = 0.38;
const PLAINS_MAX: f32 = 0.60;
const HILLS_MAX: f32 = 0.78;

// Base field octaves
const TERRAIN_OCTAVES: u32 = 5;
const TERRAIN_PERSISTENCE: f64 = 0.5;
const TERRAIN_LACUNARITY: f64 = 2.0;

// High-frequency detail layer
const DETAIL_FREQUENCY_MULT: f64 = 6.0;
const DETAIL_AMPLITUDE: f32 = 0.08;

// Radial edge fade - quadratic falloff toward the border
const EDGE_FADE_STRENGTH: f32 = 0.55;

/// Classify a normalized elevation value into a terrain type.
pub fn classify(elevation: f32) -> Terrain {
    if elevation < DEEP_WATER_MAX {
        Terrain::DeepWater
    } else if elevation < SHALLOW_WATER_MAX {
        Terrain::ShallowWater
    } else if elevation < SHORE_MAX {
        Terrain::Shore
    } else if elevation < PLAINS_MAX {
        Terrain::Plains
    } else if elevation < HILLS_MAX {
        Terrain::Hills
    } else {
        Terrain::Mountains
    }
}

/// Pass 1: fill the grid with elevation and classified terrain.
pub fn generate_terrain(grid: &mut Grid, config: &WorldGenConfig, seeds: &WorldSeeds) {
    let base_noise = Perlin::new(1).set_seed(seeds.terrain as u32);
    let detail_noise = Perlin::new(1).set_seed(seeds.detail as u32);

    let width = config.width as f32;
    let height = config.height as f32;
    let center = (width / 2.0, height / 2.0);
    // Edge fade is normalized against the half-diagonal so corners hit 1.0
    let max_dist = (center.0 * center.0 + center.1 * center.1).sqrt();

    for (coord, tile) in grid.iter_mut() {
        let nx = coord.col as f64 * config.terrain_scale;
        let ny = coord.row as f64 * config.terrain_scale;

        let base = fbm(
            &base_noise,
            nx,
            ny,
            TERRAIN_OCTAVES,
            TERRAIN_PERSISTENCE,
            TERRAIN_LACUNARITY,
        ) as f32;

        let detail = detail_noise.get([nx * DETAIL_FREQUENCY_MULT, ny * DETAIL_FREQUENCY_MULT]) as f32;

        // Map fbm output [-1, 1] to [0, 1], add scaled detail
        let mut elevation = (base + 1.0) * 0.5 + detail * DETAIL_AMPLITUDE;

        // Radial edge fade toward the map border
        let dx = coord.col as f32 - center.0;
        let dy = coord.row as f32 - center.1;
        let dist = (dx * dx + dy * dy).sqrt() / max_dist;
        elevation -= dist * dist * EDGE_FADE_STRENGTH;

        let elevation = elevation.clamp(0.0, 1.0);
        tile.elevation = elevation;
        tile.terrain = classify(elevation);
    }
}

/// Pass 2: shore smoothing. Any Plains/Hills/Mountains tile with at least
/// one water neighbor becomes Shore, so land never borders open water
/// directly.
pub fn smooth_shores(grid: &mut Grid) {
    let mut to_shore: Vec<TileCoord> = Vec::new();

    for (coord, tile) in grid.iter() {
        if tile.terrain.is_water() || tile.terrain == Terrain::Shore {
            continue;
        }
        let borders_water = grid
            .neighbors(coord)
            .iter()
            .any(|&n| grid.get(n).map(|t| t.terrain.is_water()).unwrap_or(false));
        if borders_water {
            to_shore.push(coord);
        }
    }

    for coord in to_shore {
        if let Some(tile) = grid.get_mut(coord) {
            tile.terrain = Terrain::Shore;
        }
    }
}

/// Fractional Brownian Motion noise, normalized to [-1, 1].
pub fn fbm(
    noise: &impl NoiseFn<f64, 2>,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += amplitude * noise.get([x * frequency, y * frequency]);
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total / max_value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WorldGenConfig {
        WorldGenConfig {
            width: 48,
            height: 48,
            seed: 42,
            ..WorldGenConfig::default()
        }
    }

    #[test]
    fn terrain_is_deterministic() {
        let config = test_config();
        let seeds = WorldSeeds::from_master(config.seed);

        let mut a = Grid::new(config.width, config.height, Terrain::DeepWater);
        let mut b = Grid::new(config.width, config.height, Terrain::DeepWater);
        generate_terrain(&mut a, &config, &seeds);
        generate_terrain(&mut b, &config, &seeds);

        for ((_, ta), (_, tb)) in a.iter().zip(b.iter()) {
            assert_eq!(ta.elevation.to_bits(), tb.elevation.to_bits());
            assert_eq!(ta.terrain, tb.terrain);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let config = test_config();
        let mut a = Grid::new(config.width, config.height, Terrain::DeepWater);
        let mut b = Grid::new(config.width, config.height, Terrain::DeepWater);
        generate_terrain(&mut a, &config, &WorldSeeds::from_master(1));
        generate_terrain(&mut b, &config, &WorldSeeds::from_master(2));

        let same = a
            .iter()
            .zip(b.iter())
            .all(|((_, ta), (_, tb))| ta.elevation == tb.elevation);
        assert!(!same);
    }

    #[test]
    fn no_land_borders_water_after_smoothing() {
        let config = test_config();
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = Grid::new(config.width, config.height, Terrain::DeepWater);
        generate_terrain(&mut grid, &config, &seeds);
        smooth_shores(&mut grid);

        for (coord, tile) in grid.iter() {
            if tile.terrain.is_water() || tile.terrain == Terrain::Shore {
                continue;
            }
            for n in grid.neighbors(coord) {
                let neighbor = grid.get(n).unwrap();
                assert!(
                    !neighbor.terrain.is_water(),
                    "{:?} at {} borders water at {}",
                    tile.terrain,
                    coord,
                    n
                );
            }
        }
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(0.0), Terrain::DeepWater);
        assert_eq!(classify(0.25), Terrain::ShallowWater);
        assert_eq!(classify(0.35), Terrain::Shore);
        assert_eq!(classify(0.5), Terrain::Plains);
        assert_eq!(classify(0.7), Terrain::Hills);
        assert_eq!(classify(0.9), Terrain::Mountains);
    }

    #[test]
    fn edges_fade_downward() {
        let config = test_config();
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = Grid::new(config.width, config.height, Terrain::DeepWater);
        generate_terrain(&mut grid, &config, &seeds);

        // Corners sit at full fade distance: base tops out at 1.0 + detail
        // amplitude, minus the full fade, so high terrain cannot survive there
        for coord in [
            TileCoord::new(0, 0),
            TileCoord::new(config.width as i32 - 1, 0),
            TileCoord::new(0, config.height as i32 - 1),
            TileCoord::new(config.width as i32 - 1, config.height as i32 - 1),
        ] {
            let tile = grid.get(coord).unwrap();
            assert!(tile.elevation <= 1.0 + DETAIL_AMPLITUDE - EDGE_FADE_STRENGTH);
            assert!(!matches!(tile.terrain, Terrain::Hills | Terrain::Mountains));
        }
    }
}
