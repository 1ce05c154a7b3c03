//! ASCII rendering of generated worlds
//!
//! Renders the terrain with building, road, and vegetation overlays for
//! quick CLI inspection of a generated map.

use crate::grid::Grid;
use crate::settlement::Settlement;
use crate::tile::{Building, Terrain, Tile, Vegetation};

/// Get the display character for a terrain type
pub fn terrain_char(terrain: Terrain) -> char {
    match terrain {
        Terrain::DeepWater => '~',
        Terrain::ShallowWater => '-',
        Terrain::Shore => '.',
        Terrain::Plains => ',',
        Terrain::Hills => 'n',
        Terrain::Mountains => '^',
    }
}

/// Display character for a tile: buildings over roads over vegetation
/// over bare terrain.
pub fn tile_char(tile: &Tile) -> char {
    match tile.building {
        Building::Castle => return 'C',
        Building::Pier => return 'P',
        Building::Dock => return 'D',
        Building::None => {}
        // Any other settlement building
        _ => return '#',
    }
    if tile.has_road {
        return '+';
    }
    match tile.vegetation {
        Vegetation::Tree => 'T',
        Vegetation::Bush => 'b',
        Vegetation::None => terrain_char(tile.terrain),
    }
}

/// Render the whole grid as one string, one row per line.
pub fn render_map(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width as usize + 1) * grid.height as usize);
    for row in 0..grid.height as i32 {
        for col in 0..grid.width as i32 {
            let tile = grid
                .get(crate::tile::TileCoord::new(col, row))
                .expect("in-bounds scan");
            out.push(tile_char(tile));
        }
        out.push('\n');
    }
    out
}

/// One-line summary per settlement for the CLI listing.
pub fn settlement_summary(settlement: &Settlement) -> String {
    let spec = settlement
        .specialization
        .map(|s| s.name())
        .unwrap_or("-");
    format!(
        "{:<8} at {:<10} spec: {:<8} tiles: {}",
        settlement.kind.name(),
        settlement.center.to_string(),
        spec,
        settlement.tiles.len(),
    )
}
