//! Movement edge-cost tables
//!
//! The pathfinder never computes costs itself; it asks a [`MoveCost`]
//! implementation per edge. The contract: non-negative, terrain-dependent
//! base cost, roads reduce cost toward a floor, roughness and tree density
//! add cost, and the same inputs always yield the same cost.

use crate::tile::Terrain;

/// Per-edge movement cost, parameterized by the destination tile's state,
/// both terrains, and the post-move embarked state.
pub trait MoveCost {
    fn edge_cost(
        &self,
        has_road: bool,
        is_rough: bool,
        tree_density: f32,
        from: Terrain,
        to: Terrain,
        embarked: bool,
    ) -> f32;
}

// Cost tuning
const ROAD_FACTOR: f32 = 0.5;
const ROAD_FLOOR: f32 = 0.5;
const ROUGH_PENALTY: f32 = 0.5;
const TREE_PENALTY: f32 = 0.75;
const BOAT_COST: f32 = 1.0;

/// Default terrain cost table.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCost;

impl DefaultCost {
    fn base(terrain: Terrain) -> f32 {
        match terrain {
            Terrain::DeepWater | Terrain::ShallowWater => BOAT_COST,
            Terrain::Shore => 1.0,
            Terrain::Plains => 1.0,
            Terrain::Hills => 1.5,
            Terrain::Mountains => 2.5,
        }
    }
}

impl MoveCost for DefaultCost {
    fn edge_cost(
        &self,
        has_road: bool,
        is_rough: bool,
        tree_density: f32,
        _from: Terrain,
        to: Terrain,
        embarked: bool,
    ) -> f32 {
        // Water traversal while legally embarked is flat; legality was
        // already settled before we are asked for a cost. An embarked
        // traveler moving over land pays land costs.
        if embarked && to.is_water() {
            return BOAT_COST;
        }

        let mut cost = Self::base(to);
        if has_road {
            // Roads reduce but never eliminate cost
            return (cost * ROAD_FACTOR).max(ROAD_FLOOR);
        }
        if is_rough {
            cost += ROUGH_PENALTY;
        }
        cost += tree_density * TREE_PENALTY;
        cost
    }
}
