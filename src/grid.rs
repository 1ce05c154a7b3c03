//! Bounded hex grid storage and coordinate math.
//!
//! Tiles are stored densely in row-major order. The grid uses axial-style
//! hex offsets on a rectangular col/row array: the six neighbors of a tile
//! are east/west, north/south, and the two diagonals that share the same
//! col-minus-row difference sign. Under this scheme the distance formula
//! `max(|dc|, |dr|, |dc - dr|)` ranks every neighbor at exactly 1.

use serde::{Deserialize, Serialize};

use crate::tile::{Terrain, Tile, TileCoord};

/// The six hex neighbor offsets (dc, dr). No row parity: this is an axial
/// layout stored on a rectangular array.
pub const HEX_OFFSETS: [(i32, i32); 6] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
];

/// Hex graph distance between two coordinates.
pub fn hex_distance(a: TileCoord, b: TileCoord) -> u32 {
    let dc = a.col - b.col;
    let dr = a.row - b.row;
    dc.abs().max(dr.abs()).max((dc - dr).abs()) as u32
}

/// A bounded width x height grid of hex tiles.
#[derive(Clone, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocate a grid with every tile set to the given terrain/elevation.
    pub fn new(width: u32, height: u32, terrain: Terrain) -> Self {
        Grid {
            width,
            height,
            tiles: vec![Tile::new(terrain, 0.0); (width * height) as usize],
        }
    }

    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.col >= 0
            && coord.row >= 0
            && (coord.col as u32) < self.width
            && (coord.row as u32) < self.height
    }

    fn index(&self, coord: TileCoord) -> usize {
        coord.row as usize * self.width as usize + coord.col as usize
    }

    pub fn get(&self, coord: TileCoord) -> Option<&Tile> {
        if self.in_bounds(coord) {
            Some(&self.tiles[self.index(coord)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: TileCoord) -> Option<&mut Tile> {
        if self.in_bounds(coord) {
            let idx = self.index(coord);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// In-bounds neighbors of a coordinate, up to 6.
    pub fn neighbors(&self, coord: TileCoord) -> Vec<TileCoord> {
        let mut result = Vec::with_capacity(6);
        for &(dc, dr) in HEX_OFFSETS.iter() {
            let n = TileCoord::new(coord.col + dc, coord.row + dr);
            if self.in_bounds(n) {
                result.push(n);
            }
        }
        result
    }

    /// Iterate over all tiles with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &Tile)> {
        let width = self.width as usize;
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            let coord = TileCoord::new((idx % width) as i32, (idx / width) as i32);
            (coord, tile)
        })
    }

    /// Iterate mutably over all tiles with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TileCoord, &mut Tile)> {
        let width = self.width as usize;
        self.tiles.iter_mut().enumerate().map(move |(idx, tile)| {
            let coord = TileCoord::new((idx % width) as i32, (idx / width) as i32);
            (coord, tile)
        })
    }

    /// Coordinates at exactly hex distance `radius` from `center`, in a
    /// deterministic scan order. Radius 0 yields just the center.
    pub fn ring(&self, center: TileCoord, radius: u32) -> Vec<TileCoord> {
        let mut result = Vec::new();
        let r = radius as i32;
        for dr in -r..=r {
            for dc in -r..=r {
                let coord = TileCoord::new(center.col + dc, center.row + dr);
                if self.in_bounds(coord) && hex_distance(center, coord) == radius {
                    result.push(coord);
                }
            }
        }
        result
    }
}
