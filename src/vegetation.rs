//! Vegetation and roughness generation (passes 3-4)
//!
//! An independent noise field decides vegetation: values above the
//! configured threshold grow trees with a bucketed density, a lower band
//! grows bushes. A third field marks rough-terrain patches; Mountains are
//! always rough regardless of noise. Only applied where the terrain
//! supports it.

use noise::{NoiseFn, Perlin, Seedable};

use crate::config::WorldGenConfig;
use crate::grid::Grid;
use crate::seeds::WorldSeeds;
use crate::tile::{Terrain, Vegetation};

/// Noise band below the tree threshold in which bushes grow
const BUSH_BAND: f64 = 0.12;

/// Tree density buckets, sparse to very dense
const DENSITY_BUCKETS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Terrain that can carry vegetation. Open water gets nothing; Mountains
/// are bare rock.
fn supports_vegetation(terrain: Terrain) -> bool {
    matches!(terrain, Terrain::Shore | Terrain::Plains | Terrain::Hills)
}

/// Pass 3: grow trees and bushes from the vegetation noise field.
pub fn generate_vegetation(grid: &mut Grid, config: &WorldGenConfig, seeds: &WorldSeeds) {
    let noise = Perlin::new(1).set_seed(seeds.vegetation as u32);

    for (coord, tile) in grid.iter_mut() {
        if !supports_vegetation(tile.terrain) {
            continue;
        }

        let value = noise.get([
            coord.col as f64 * config.vegetation_scale,
            coord.row as f64 * config.vegetation_scale,
        ]);

        if value >= config.vegetation_threshold {
            tile.vegetation = Vegetation::Tree;
            tile.tree_density = density_bucket(value, config.vegetation_threshold);
        } else if value >= config.vegetation_threshold - BUSH_BAND {
            tile.vegetation = Vegetation::Bush;
        }
    }
}

/// Pass 4: mark rough patches. Mountains are unconditionally rough.
pub fn generate_roughness(grid: &mut Grid, config: &WorldGenConfig, seeds: &WorldSeeds) {
    let noise = Perlin::new(1).set_seed(seeds.rough as u32);

    for (coord, tile) in grid.iter_mut() {
        if tile.terrain == Terrain::Mountains {
            tile.is_rough = true;
            continue;
        }
        if tile.terrain.is_water() {
            continue;
        }

        let value = noise.get([
            coord.col as f64 * config.rough_scale,
            coord.row as f64 * config.rough_scale,
        ]);
        if value >= config.rough_threshold {
            tile.is_rough = true;
        }
    }
}

/// Map how far a noise value sits above the tree threshold into one of the
/// fixed density buckets.
fn density_bucket(value: f64, threshold: f64) -> f32 {
    // Noise tops out at 1.0; normalize the overshoot above the threshold
    let span = (1.0 - threshold).max(f64::EPSILON);
    let t = ((value - threshold) / span).clamp(0.0, 1.0);
    let idx = ((t * DENSITY_BUCKETS.len() as f64) as usize).min(DENSITY_BUCKETS.len() - 1);
    DENSITY_BUCKETS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain;

    fn generated_grid(seed: u64) -> (Grid, WorldGenConfig) {
        let config = WorldGenConfig {
            width: 48,
            height: 48,
            seed,
            ..WorldGenConfig::default()
        };
        let seeds = WorldSeeds::from_master(seed);
        let mut grid = Grid::new(config.width, config.height, Terrain::DeepWater);
        terrain::generate_terrain(&mut grid, &config, &seeds);
        terrain::smooth_shores(&mut grid);
        generate_vegetation(&mut grid, &config, &seeds);
        generate_roughness(&mut grid, &config, &seeds);
        (grid, config)
    }

    #[test]
    fn water_carries_no_vegetation_or_roughness() {
        let (grid, _) = generated_grid(7);
        for (_, tile) in grid.iter() {
            if tile.terrain.is_water() {
                assert_eq!(tile.vegetation, Vegetation::None);
                assert_eq!(tile.tree_density, 0.0);
                assert!(!tile.is_rough);
            }
        }
    }

    #[test]
    fn mountains_are_always_rough() {
        let (grid, _) = generated_grid(7);
        for (_, tile) in grid.iter() {
            if tile.terrain == Terrain::Mountains {
                assert!(tile.is_rough);
                assert_eq!(tile.vegetation, Vegetation::None);
            }
        }
    }

    #[test]
    fn tree_density_only_on_trees() {
        let (grid, _) = generated_grid(7);
        for (_, tile) in grid.iter() {
            match tile.vegetation {
                Vegetation::Tree => {
                    assert!(tile.tree_density > 0.0 && tile.tree_density <= 1.0)
                }
                _ => assert_eq!(tile.tree_density, 0.0),
            }
        }
    }

    #[test]
    fn density_buckets_cover_range() {
        assert_eq!(density_bucket(0.25, 0.25), 0.25);
        assert_eq!(density_bucket(1.0, 0.25), 1.0);
        // Midway up the overshoot lands in a middle bucket
        let mid = density_bucket(0.625, 0.25);
        assert!(mid >= 0.5 && mid <= 0.75);
    }
}
