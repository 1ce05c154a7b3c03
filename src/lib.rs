//! Hex world generation library
//!
//! Generates a bounded hexagonal world (terrain, vegetation, settlements,
//! roads) from a seed, and provides the A* pathfinding engine that carves
//! the roads at generation time and drives movement at runtime.

pub mod ascii;
pub mod config;
pub mod cost;
pub mod export;
pub mod grid;
pub mod pathfind;
pub mod roads;
pub mod seeds;
pub mod settlement;
pub mod terrain;
pub mod tile;
pub mod vegetation;
pub mod world_map;
pub mod worldgen;

pub use config::WorldGenConfig;
pub use cost::{DefaultCost, MoveCost};
pub use grid::{hex_distance, Grid};
pub use pathfind::{cross_edge, find_path, is_path_valid, PathMap, PathResult};
pub use settlement::{Settlement, SettlementKind, Specialization};
pub use tile::{Building, SettlementId, Terrain, Tile, TileCoord, Vegetation};
pub use world_map::{WorldError, WorldMap};
pub use worldgen::{generate, World};
