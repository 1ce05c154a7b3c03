//! Road generation (pass 6)
//!
//! Connects every city pair, and every village to its nearest city, by
//! pathfinding with full map knowledge and carving the returned path into
//! the grid. Land tiles become cleared road ground. Runs of water tiles
//! are buffered: a run with land immediately before and after it in the
//! path is a true crossing and receives a pier at its entry tile (and at
//! its exit tile when the run is longer than one tile). A run that dangles
//! into edge water gets no pier. Carving is idempotent: piers never
//! overwrite an existing building and re-carving changes nothing.

use crate::cost::DefaultCost;
use crate::grid::Grid;
use crate::pathfind::find_path;
use crate::settlement::{Settlement, SettlementKind};
use crate::tile::{Building, TileCoord};

/// Centers closer than this (Euclidean on grid coordinates) are too close
/// to bother roading
const MIN_ROAD_DISTANCE: f32 = 8.0;

/// Pass 6: build the road network between the placed settlements.
pub fn generate_roads(grid: &mut Grid, settlements: &[Settlement]) {
    let cities: Vec<&Settlement> = settlements
        .iter()
        .filter(|s| s.kind == SettlementKind::City)
        .collect();

    for (i, a) in cities.iter().enumerate() {
        for b in cities.iter().skip(i + 1) {
            connect(grid, a.center, b.center);
        }
    }

    for village in settlements
        .iter()
        .filter(|s| s.kind == SettlementKind::Village)
    {
        let nearest = cities
            .iter()
            .min_by(|a, b| {
                village
                    .center
                    .euclidean(&a.center)
                    .total_cmp(&village.center.euclidean(&b.center))
            })
            .map(|c| c.center);
        if let Some(city_center) = nearest {
            connect(grid, village.center, city_center);
        }
    }
}

/// Road one pair of centers. Unroutable or too-close pairs are skipped
/// silently; roads are carved with full knowledge of the map and with the
/// boat capability, so routes may ford water - those fords become the
/// pier crossings.
fn connect(grid: &mut Grid, from: TileCoord, to: TileCoord) {
    if from.euclidean(&to) < MIN_ROAD_DISTANCE {
        return;
    }
    let result = find_path(grid, &DefaultCost, from, to, false, true);
    if !result.found {
        return;
    }
    carve_path(grid, from, &result.path);
}

/// Walk a path tile by tile, laying road on land and placing piers at the
/// boundaries of true water crossings.
fn carve_path(grid: &mut Grid, start: TileCoord, path: &[TileCoord]) {
    let mut water_run: Vec<TileCoord> = Vec::new();
    // Settlement centers are land, so the first run always has land before
    // it; tracked anyway so a water start cannot fake a crossing
    let mut land_before = grid.get(start).map(|t| t.terrain.is_land()).unwrap_or(false);

    for &coord in path {
        let is_water = grid
            .get(coord)
            .map(|t| t.terrain.is_water())
            .unwrap_or(true);

        if is_water {
            water_run.push(coord);
            continue;
        }

        // Land after a buffered run: the run was a true crossing
        if !water_run.is_empty() {
            if land_before {
                place_piers(grid, &water_run);
            }
            water_run.clear();
        }
        land_before = true;

        if let Some(tile) = grid.get_mut(coord) {
            tile.lay_road();
        }
    }

    // A trailing run has no land after it and gets no pier
}

/// Pier the entry tile of a crossing, and the exit tile when the run spans
/// more than one tile. Existing buildings are never overwritten.
fn place_piers(grid: &mut Grid, run: &[TileCoord]) {
    let Some(&entry) = run.first() else { return };
    pier(grid, entry);
    if run.len() > 1 {
        if let Some(&exit) = run.last() {
            pier(grid, exit);
        }
    }
}

fn pier(grid: &mut Grid, coord: TileCoord) {
    if let Some(tile) = grid.get_mut(coord) {
        if tile.building == Building::None {
            tile.building = Building::Pier;
        }
    }
}
