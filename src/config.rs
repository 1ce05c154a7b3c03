//! World generation configuration

use serde::{Deserialize, Serialize};

/// Parameters for world generation. Pure input, immutable once
/// generation starts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Master seed; every sub-system derives its own seed from this
    pub seed: u64,
    /// Noise frequency for the elevation field (lower = larger landmasses)
    pub terrain_scale: f64,
    /// Noise frequency for the vegetation field
    pub vegetation_scale: f64,
    /// Noise value above which a tile grows trees
    pub vegetation_threshold: f64,
    /// Noise frequency for the roughness field
    pub rough_scale: f64,
    /// Noise value above which a tile is rough
    pub rough_threshold: f64,
    pub num_cities: u32,
    pub num_villages: u32,
    pub num_hamlets: u32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: 96,
            height: 96,
            seed: 0,
            terrain_scale: 0.035,
            vegetation_scale: 0.09,
            vegetation_threshold: 0.25,
            rough_scale: 0.13,
            rough_threshold: 0.55,
            num_cities: 3,
            num_villages: 6,
            num_hamlets: 8,
        }
    }
}
