//! Settlement placement and generation (pass 5)
//!
//! The placer samples seeded candidate tiles and accepts the first whose
//! terrain suits the settlement kind and whose hex distance to every
//! already-placed center meets that kind's minimum separation. Exhausting
//! the candidate budget is a soft failure: the world simply gets one fewer
//! settlement than requested. The generator then grows a contiguous tile
//! cluster around the accepted center, picks a specialization from the
//! surrounding terrain, and stamps buildings and ownership on every
//! member tile.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::WorldGenConfig;
use crate::grid::{hex_distance, Grid};
use crate::seeds::WorldSeeds;
use crate::tile::{Building, SettlementId, Terrain, TileCoord, Vegetation};

/// Candidate tiles tried per settlement before giving up
const SEARCH_BUDGET: u32 = 1000;

/// Radius of the terrain survey that drives specialization
const SURVEY_RADIUS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementKind {
    City,
    Village,
    Hamlet,
}

impl SettlementKind {
    /// Minimum hex distance to every already-placed settlement center
    pub fn min_separation(&self) -> u32 {
        match self {
            SettlementKind::City => 20,
            SettlementKind::Village => 12,
            SettlementKind::Hamlet => 8,
        }
    }

    /// Target member-tile count for the cluster
    pub fn cluster_size(&self) -> usize {
        match self {
            SettlementKind::City => 12,
            SettlementKind::Village => 6,
            SettlementKind::Hamlet => 3,
        }
    }

    /// Terrain a settlement of this kind can be centered on
    fn suits_center(&self, terrain: Terrain) -> bool {
        match self {
            SettlementKind::City => terrain == Terrain::Plains,
            SettlementKind::Village | SettlementKind::Hamlet => {
                matches!(terrain, Terrain::Plains | Terrain::Hills | Terrain::Shore)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SettlementKind::City => "City",
            SettlementKind::Village => "Village",
            SettlementKind::Hamlet => "Hamlet",
        }
    }
}

/// A village or hamlet's thematic role, driving its building mix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialization {
    Fishing,
    Lumber,
    Mining,
    Farming,
    Trade,
}

impl Specialization {
    /// The building this specialization's workers use
    fn primary_building(&self) -> Building {
        match self {
            Specialization::Fishing => Building::FishingHut,
            Specialization::Lumber => Building::LumberCamp,
            Specialization::Mining => Building::Mine,
            Specialization::Farming => Building::Farm,
            Specialization::Trade => Building::Market,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Specialization::Fishing => "Fishing",
            Specialization::Lumber => "Lumber",
            Specialization::Mining => "Mining",
            Specialization::Farming => "Farming",
            Specialization::Trade => "Trade",
        }
    }
}

/// A placed settlement. Membership is fixed once generated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    pub kind: SettlementKind,
    /// Only villages and hamlets specialize
    pub specialization: Option<Specialization>,
    pub center: TileCoord,
    /// Member tiles, non-empty, always contains `center`
    pub tiles: Vec<TileCoord>,
    pub landmark: Option<Building>,
}

/// Pass 5: place and generate all settlements requested by the config.
pub fn place_settlements(
    grid: &mut Grid,
    config: &WorldGenConfig,
    seeds: &WorldSeeds,
) -> Vec<Settlement> {
    let mut rng = ChaCha8Rng::seed_from_u64(seeds.settlements);
    let mut settlements: Vec<Settlement> = Vec::new();

    let plan = [
        (SettlementKind::City, config.num_cities),
        (SettlementKind::Village, config.num_villages),
        (SettlementKind::Hamlet, config.num_hamlets),
    ];

    for (kind, count) in plan {
        for _ in 0..count {
            let Some(center) = find_site(grid, kind, &settlements, &mut rng) else {
                // Soft failure: no valid site within the budget
                continue;
            };
            let id = SettlementId(settlements.len() as u32);
            let settlement = generate_settlement(grid, id, kind, center, &mut rng);
            settlements.push(settlement);
        }
    }

    settlements
}

/// Scan seeded-random candidates for a valid site of the given kind.
fn find_site(
    grid: &Grid,
    kind: SettlementKind,
    existing: &[Settlement],
    rng: &mut ChaCha8Rng,
) -> Option<TileCoord> {
    for _ in 0..SEARCH_BUDGET {
        let candidate = TileCoord::new(
            rng.gen_range(0..grid.width as i32),
            rng.gen_range(0..grid.height as i32),
        );
        let tile = grid.get(candidate)?;
        if !kind.suits_center(tile.terrain) || tile.settlement_id.is_some() {
            continue;
        }
        let separated = existing
            .iter()
            .all(|s| hex_distance(candidate, s.center) >= kind.min_separation());
        if separated {
            return Some(candidate);
        }
    }
    None
}

/// Compose an accepted site into a settlement and stamp it onto the grid.
fn generate_settlement(
    grid: &mut Grid,
    id: SettlementId,
    kind: SettlementKind,
    center: TileCoord,
    rng: &mut ChaCha8Rng,
) -> Settlement {
    let tiles = grow_cluster(grid, center, kind.cluster_size());

    let specialization = match kind {
        SettlementKind::City => None,
        SettlementKind::Village | SettlementKind::Hamlet => {
            Some(pick_specialization(grid, center, rng))
        }
    };

    for (i, &coord) in tiles.iter().enumerate() {
        let building = if i == 0 && kind == SettlementKind::City {
            // City landmark sits at the center
            Building::Castle
        } else {
            pick_building(specialization, rng)
        };
        if let Some(tile) = grid.get_mut(coord) {
            tile.settlement_id = Some(id);
            tile.building = building;
            tile.vegetation = Vegetation::None;
            tile.tree_density = 0.0;
        }
    }

    // Fishing settlements get a dock on an adjacent water tile
    if specialization == Some(Specialization::Fishing) {
        place_dock(grid, &tiles);
    }

    Settlement {
        id,
        kind,
        specialization,
        center,
        tiles,
        landmark: (kind == SettlementKind::City).then_some(Building::Castle),
    }
}

/// Grow a contiguous cluster of buildable land around the center, breadth
/// first, up to `size` tiles. The center is always the first member.
fn grow_cluster(grid: &Grid, center: TileCoord, size: usize) -> Vec<TileCoord> {
    let mut members = vec![center];
    let mut queue = VecDeque::from([center]);

    while members.len() < size {
        let Some(current) = queue.pop_front() else {
            break;
        };
        for neighbor in grid.neighbors(current) {
            if members.len() >= size {
                break;
            }
            if members.contains(&neighbor) {
                continue;
            }
            let Some(tile) = grid.get(neighbor) else {
                continue;
            };
            if tile.terrain.is_water()
                || tile.terrain == Terrain::Mountains
                || tile.settlement_id.is_some()
            {
                continue;
            }
            members.push(neighbor);
            queue.push_back(neighbor);
        }
    }

    members
}

/// Choose a specialization from the majority nearby terrain: coastal sites
/// fish, forested sites log, mountainous sites mine; anywhere else rolls a
/// seeded choice among the remaining categories.
fn pick_specialization(grid: &Grid, center: TileCoord, rng: &mut ChaCha8Rng) -> Specialization {
    let mut water = 0;
    let mut trees = 0;
    let mut mountains = 0;

    for radius in 1..=SURVEY_RADIUS {
        for coord in grid.ring(center, radius) {
            let Some(tile) = grid.get(coord) else { continue };
            if tile.terrain.is_water() {
                water += 1;
            }
            if tile.vegetation == Vegetation::Tree {
                trees += 1;
            }
            if tile.terrain == Terrain::Mountains {
                mountains += 1;
            }
        }
    }

    if water >= 4 {
        Specialization::Fishing
    } else if trees >= 5 {
        Specialization::Lumber
    } else if mountains >= 3 {
        Specialization::Mining
    } else {
        *[Specialization::Farming, Specialization::Trade]
            .choose(rng)
            .unwrap_or(&Specialization::Farming)
    }
}

/// Weighted building pick: roughly half housing, the rest split between
/// the primary specialization building and common secondary buildings.
fn pick_building(specialization: Option<Specialization>, rng: &mut ChaCha8Rng) -> Building {
    let roll: f32 = rng.gen();
    if roll < 0.5 {
        return Building::House;
    }
    match specialization {
        Some(spec) if roll < 0.8 => spec.primary_building(),
        Some(_) => {
            if roll < 0.9 {
                Building::Tavern
            } else {
                Building::Market
            }
        }
        // Cities carry generic civic buildings
        None => {
            if roll < 0.75 {
                Building::Market
            } else {
                Building::Tavern
            }
        }
    }
}

/// Place a dock on the first free water tile adjacent to the settlement.
fn place_dock(grid: &mut Grid, members: &[TileCoord]) {
    for &member in members {
        for neighbor in grid.neighbors(member) {
            if let Some(tile) = grid.get_mut(neighbor) {
                if tile.terrain.is_water() && tile.building == Building::None {
                    tile.building = Building::Dock;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: u32, height: u32) -> Grid {
        Grid::new(width, height, Terrain::Plains)
    }

    fn test_config(width: u32, height: u32) -> WorldGenConfig {
        WorldGenConfig {
            width,
            height,
            seed: 99,
            num_cities: 2,
            num_villages: 4,
            num_hamlets: 4,
            ..WorldGenConfig::default()
        }
    }

    #[test]
    fn settlements_respect_separation() {
        let config = test_config(80, 80);
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = open_grid(config.width, config.height);
        let settlements = place_settlements(&mut grid, &config, &seeds);

        assert!(!settlements.is_empty());
        for (i, a) in settlements.iter().enumerate() {
            for b in settlements.iter().skip(i + 1) {
                // b was placed after a, so b's own separation must hold
                assert!(
                    hex_distance(a.center, b.center) >= b.kind.min_separation(),
                    "{} at {} too close to {} at {}",
                    b.kind.name(),
                    b.center,
                    a.kind.name(),
                    a.center
                );
            }
        }
    }

    #[test]
    fn membership_contains_center_and_is_stamped() {
        let config = test_config(80, 80);
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = open_grid(config.width, config.height);
        let settlements = place_settlements(&mut grid, &config, &seeds);

        for settlement in &settlements {
            assert!(!settlement.tiles.is_empty());
            assert!(settlement.tiles.contains(&settlement.center));
            for &coord in &settlement.tiles {
                assert_eq!(
                    grid.get(coord).unwrap().settlement_id,
                    Some(settlement.id)
                );
            }
        }
    }

    #[test]
    fn cities_get_castle_landmark_at_center() {
        let config = test_config(80, 80);
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = open_grid(config.width, config.height);
        let settlements = place_settlements(&mut grid, &config, &seeds);

        let cities: Vec<_> = settlements
            .iter()
            .filter(|s| s.kind == SettlementKind::City)
            .collect();
        assert!(!cities.is_empty());
        for city in cities {
            assert_eq!(city.landmark, Some(Building::Castle));
            assert_eq!(grid.get(city.center).unwrap().building, Building::Castle);
            assert!(city.specialization.is_none());
        }
    }

    #[test]
    fn placement_is_deterministic() {
        let config = test_config(80, 80);
        let seeds = WorldSeeds::from_master(config.seed);

        let mut grid_a = open_grid(config.width, config.height);
        let mut grid_b = open_grid(config.width, config.height);
        let a = place_settlements(&mut grid_a, &config, &seeds);
        let b = place_settlements(&mut grid_b, &config, &seeds);

        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa.center, sb.center);
            assert_eq!(sa.kind, sb.kind);
            assert_eq!(sa.tiles, sb.tiles);
            assert_eq!(sa.specialization, sb.specialization);
        }
    }

    #[test]
    fn impossible_placement_is_a_soft_skip() {
        // All mountains: no kind can center anywhere
        let config = test_config(32, 32);
        let seeds = WorldSeeds::from_master(config.seed);
        let mut grid = Grid::new(config.width, config.height, Terrain::Mountains);
        let settlements = place_settlements(&mut grid, &config, &seeds);
        assert!(settlements.is_empty());
    }

    #[test]
    fn coastal_village_fishes() {
        // Half water, half shore/plains so every survey sees plenty of water
        let mut grid = open_grid(40, 40);
        for (coord, tile) in grid.iter_mut() {
            if coord.row < 20 {
                tile.terrain = Terrain::ShallowWater;
            } else if coord.row == 20 {
                tile.terrain = Terrain::Shore;
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let spec = pick_specialization(&grid, TileCoord::new(20, 21), &mut rng);
        assert_eq!(spec, Specialization::Fishing);
    }

    #[test]
    fn cluster_stays_on_buildable_land() {
        let mut grid = open_grid(16, 16);
        for (coord, tile) in grid.iter_mut() {
            if coord.col > 8 {
                tile.terrain = Terrain::DeepWater;
            }
        }

        let cluster = grow_cluster(&grid, TileCoord::new(7, 7), 8);
        assert!(cluster.len() <= 8);
        for coord in cluster {
            assert!(grid.get(coord).unwrap().terrain.is_land());
        }
    }
}
