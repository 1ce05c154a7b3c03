//! Runtime world map façade
//!
//! Read-mostly wrapper around a finished world: tile lookup, neighbor
//! queries, distance, settlement lookup, and the start-tile search that
//! gameplay code needs. Construction fails hard when the map has no
//! usable start tile anywhere; callers must regenerate with a different
//! seed or config.

use thiserror::Error;

use crate::grid::{hex_distance, Grid};
use crate::pathfind::PathMap;
use crate::settlement::Settlement;
use crate::tile::{SettlementId, Terrain, Tile, TileCoord};
use crate::worldgen::World;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("no valid start tile found anywhere on the map")]
    NoStartTile,
}

/// Runtime façade over a generated world.
pub struct WorldMap {
    world: World,
    start: TileCoord,
}

impl WorldMap {
    /// Wrap a generated world, locating the start tile. Fails with
    /// [`WorldError::NoStartTile`] when the whole map is water.
    pub fn new(world: World) -> Result<Self, WorldError> {
        let start = find_start_tile(&world.grid)?;
        Ok(WorldMap { world, start })
    }

    pub fn width(&self) -> u32 {
        self.world.grid.width
    }

    pub fn height(&self) -> u32 {
        self.world.grid.height
    }

    /// Tile lookup; `None` when out of bounds.
    pub fn tile(&self, col: i32, row: i32) -> Option<&Tile> {
        self.world.grid.get(TileCoord::new(col, row))
    }

    pub fn tile_at(&self, coord: TileCoord) -> Option<&Tile> {
        self.world.grid.get(coord)
    }

    /// Runtime movement mutates fog-of-war and similar tile state.
    pub fn tile_mut(&mut self, coord: TileCoord) -> Option<&mut Tile> {
        self.world.grid.get_mut(coord)
    }

    pub fn neighbors(&self, coord: TileCoord) -> Vec<TileCoord> {
        self.world.grid.neighbors(coord)
    }

    pub fn hex_distance(&self, a: TileCoord, b: TileCoord) -> u32 {
        hex_distance(a, b)
    }

    /// The tile the player spawns on.
    pub fn start_tile(&self) -> TileCoord {
        self.start
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.world.settlements
    }

    pub fn settlement(&self, id: SettlementId) -> Option<&Settlement> {
        self.world.settlements.iter().find(|s| s.id == id)
    }

    pub fn grid(&self) -> &Grid {
        &self.world.grid
    }
}

impl PathMap for WorldMap {
    fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.world.grid.get(coord)
    }

    fn neighbors(&self, coord: TileCoord) -> Vec<TileCoord> {
        self.world.grid.neighbors(coord)
    }

    fn hex_distance(&self, a: TileCoord, b: TileCoord) -> u32 {
        hex_distance(a, b)
    }
}

/// Ring search from the map center outward: the first Plains tile wins;
/// failing that, the first non-water tile; failing that, the map is
/// unusable.
fn find_start_tile(grid: &Grid) -> Result<TileCoord, WorldError> {
    let center = TileCoord::new(grid.width as i32 / 2, grid.height as i32 / 2);
    let max_radius = grid.width.max(grid.height);

    for radius in 0..=max_radius {
        for coord in grid.ring(center, radius) {
            if grid.get(coord).map(|t| t.terrain == Terrain::Plains) == Some(true) {
                return Ok(coord);
            }
        }
    }

    for radius in 0..=max_radius {
        for coord in grid.ring(center, radius) {
            if grid.get(coord).map(|t| t.terrain.is_land()) == Some(true) {
                return Ok(coord);
            }
        }
    }

    Err(WorldError::NoStartTile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldGenConfig;
    use crate::cost::DefaultCost;
    use crate::pathfind::{find_path, is_path_valid};
    use crate::seeds::WorldSeeds;
    use crate::worldgen;

    fn wrap(grid: Grid) -> World {
        World {
            config: WorldGenConfig::default(),
            seeds: WorldSeeds::from_master(0),
            grid,
            settlements: Vec::new(),
        }
    }

    #[test]
    fn start_tile_prefers_central_plains() {
        let mut grid = Grid::new(9, 9, Terrain::Hills);
        grid.get_mut(TileCoord::new(4, 4)).unwrap().terrain = Terrain::Plains;
        grid.get_mut(TileCoord::new(0, 0)).unwrap().terrain = Terrain::Plains;

        let map = WorldMap::new(wrap(grid)).unwrap();
        assert_eq!(map.start_tile(), TileCoord::new(4, 4));
    }

    #[test]
    fn start_tile_falls_back_to_any_land() {
        let mut grid = Grid::new(9, 9, Terrain::DeepWater);
        grid.get_mut(TileCoord::new(2, 6)).unwrap().terrain = Terrain::Hills;

        let map = WorldMap::new(wrap(grid)).unwrap();
        assert_eq!(map.start_tile(), TileCoord::new(2, 6));
    }

    #[test]
    fn all_water_map_fails_construction() {
        let grid = Grid::new(9, 9, Terrain::DeepWater);
        let result = WorldMap::new(wrap(grid));
        assert!(matches!(result, Err(WorldError::NoStartTile)));
    }

    #[test]
    fn nearest_plains_wins_over_farther_plains() {
        let mut grid = Grid::new(11, 11, Terrain::ShallowWater);
        grid.get_mut(TileCoord::new(5, 7)).unwrap().terrain = Terrain::Plains;
        grid.get_mut(TileCoord::new(0, 10)).unwrap().terrain = Terrain::Plains;

        let map = WorldMap::new(wrap(grid)).unwrap();
        assert_eq!(map.start_tile(), TileCoord::new(5, 7));
    }

    #[test]
    fn facade_is_searchable() {
        let config = WorldGenConfig {
            width: 48,
            height: 48,
            seed: 77,
            ..WorldGenConfig::default()
        };
        let mut map = WorldMap::new(worldgen::generate(&config)).unwrap();

        let start = map.start_tile();
        // Mark a small known region explored, then path inside it
        let goal = map
            .neighbors(start)
            .into_iter()
            .find(|&n| map.tile_at(n).map(|t| t.terrain.is_land()) == Some(true));
        let Some(goal) = goal else { return };
        for coord in [start, goal] {
            map.tile_mut(coord).unwrap().explored = true;
        }

        let result = find_path(&map, &DefaultCost, start, goal, true, false);
        if result.found {
            assert!(is_path_valid(
                &result.path,
                start,
                result.total_cost,
                &map,
                &DefaultCost,
                false
            ));
        }
    }
}
