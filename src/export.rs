//! JSON export of generated worlds

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::config::WorldGenConfig;
use crate::grid::Grid;
use crate::settlement::Settlement;
use crate::worldgen::World;

/// Serializable snapshot of a generated world.
#[derive(Serialize)]
struct WorldExport<'a> {
    config: &'a WorldGenConfig,
    grid: &'a Grid,
    settlements: &'a [Settlement],
}

/// Write the world as pretty-printed JSON to the given path.
pub fn write_json(world: &World, path: &Path) -> io::Result<()> {
    let export = WorldExport {
        config: &world.config,
        grid: &world.grid,
        settlements: &world.settlements,
    };
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &export).map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes() {
        let config = WorldGenConfig {
            width: 8,
            height: 8,
            ..WorldGenConfig::default()
        };
        let world = crate::worldgen::generate(&config);
        let export = WorldExport {
            config: &world.config,
            grid: &world.grid,
            settlements: &world.settlements,
        };
        let json = serde_json::to_string(&export).unwrap();
        assert!(json.contains("\"width\": 8") || json.contains("\"width\":8"));
    }
}
