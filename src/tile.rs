//! Core tile types for the hex world

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a settlement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementId(pub u32);

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Settlement#{}", self.0)
    }
}

/// Column/row coordinate of a tile on the hex grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub fn new(col: i32, row: i32) -> Self {
        TileCoord { col, row }
    }

    /// Euclidean distance on raw grid coordinates (used for road pairing,
    /// not for hex movement range)
    pub fn euclidean(&self, other: &TileCoord) -> f32 {
        let dc = (self.col - other.col) as f32;
        let dr = (self.row - other.row) as f32;
        (dc * dc + dr * dr).sqrt()
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Terrain classification, bucketed from elevation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    DeepWater,
    ShallowWater,
    Shore,
    Plains,
    Hills,
    Mountains,
}

impl Terrain {
    /// Open water, traversable only while embarked (or via a pier/dock)
    pub fn is_water(&self) -> bool {
        matches!(self, Terrain::DeepWater | Terrain::ShallowWater)
    }

    /// Land that can carry vegetation, buildings and roads
    pub fn is_land(&self) -> bool {
        !self.is_water()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::DeepWater => "Deep Water",
            Terrain::ShallowWater => "Shallow Water",
            Terrain::Shore => "Shore",
            Terrain::Plains => "Plains",
            Terrain::Hills => "Hills",
            Terrain::Mountains => "Mountains",
        }
    }
}

/// Vegetation growing on a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vegetation {
    #[default]
    None,
    Bush,
    Tree,
}

/// Buildings that can occupy a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Building {
    #[default]
    None,
    /// Water-crossing structure placed by the road generator
    Pier,
    /// Harbor structure in fishing settlements
    Dock,
    House,
    Market,
    FishingHut,
    LumberCamp,
    Mine,
    Farm,
    Tavern,
    /// City landmark
    Castle,
}

impl Building {
    /// Structures that make an otherwise-impassable water edge legal
    pub fn is_water_access(&self) -> bool {
        matches!(self, Building::Pier | Building::Dock)
    }
}

/// A single hex tile. Identity is its position in the grid; all other
/// fields are mutated in place by the generation passes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    pub elevation: f32,
    pub vegetation: Vegetation,
    /// Meaningful only when `vegetation == Tree`, in [0, 1]
    pub tree_density: f32,
    pub is_rough: bool,
    pub has_road: bool,
    pub building: Building,
    pub settlement_id: Option<SettlementId>,
    /// Fog-of-war state, owned by runtime code; generation never touches it
    pub explored: bool,
    pub visible: bool,
}

impl Tile {
    pub fn new(terrain: Terrain, elevation: f32) -> Self {
        Tile {
            terrain,
            elevation,
            vegetation: Vegetation::None,
            tree_density: 0.0,
            is_rough: false,
            has_road: false,
            building: Building::None,
            settlement_id: None,
            explored: false,
            visible: false,
        }
    }

    /// Turn the tile into cleared road ground. Roads override terrain
    /// decoration: no vegetation, no roughness.
    pub fn lay_road(&mut self) {
        self.has_road = true;
        self.vegetation = Vegetation::None;
        self.tree_density = 0.0;
        self.is_rough = false;
    }
}
