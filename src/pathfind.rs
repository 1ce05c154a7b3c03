//! A* pathfinding over hex maps, with embark/disembark legality
//!
//! The search is generic over anything exposing adjacency and a distance
//! heuristic (the [`PathMap`] trait), so the same engine carves roads at
//! generation time and answers interactive movement queries at runtime.
//! Edge costs come from an external [`MoveCost`] table; water-edge
//! legality is decided by the shared [`cross_edge`] predicate before any
//! cost is asked for.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::cost::MoveCost;
use crate::grid::{hex_distance, Grid};
use crate::tile::{Tile, TileCoord};

/// Adjacency + distance contract any searchable map must satisfy.
pub trait PathMap {
    fn tile(&self, coord: TileCoord) -> Option<&Tile>;
    /// Adjacent coordinates, up to 6.
    fn neighbors(&self, coord: TileCoord) -> Vec<TileCoord>;
    /// Hex graph distance, used as the A* heuristic.
    fn hex_distance(&self, a: TileCoord, b: TileCoord) -> u32;
}

impl PathMap for Grid {
    fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.get(coord)
    }

    fn neighbors(&self, coord: TileCoord) -> Vec<TileCoord> {
        Grid::neighbors(self, coord)
    }

    fn hex_distance(&self, a: TileCoord, b: TileCoord) -> u32 {
        hex_distance(a, b)
    }
}

/// Result of a path search. `found == false` is a normal outcome, not an
/// error; callers must check it before using the path.
#[derive(Clone, Debug, Default)]
pub struct PathResult {
    /// Tiles from the first step to the goal; the start tile is excluded.
    pub path: Vec<TileCoord>,
    pub total_cost: f32,
    pub found: bool,
}

/// Decide whether the edge `from -> to` is legal for a traveler in the
/// given embark state. Returns the post-move embarked state when legal.
///
/// Onto water: legal if the destination has a pier/dock (stay on foot),
/// the traveler is already embarked, or the current tile has a pier/dock
/// (board, becoming embarked); otherwise the edge is skipped. Onto land:
/// always legal. A traveler on foot stays on foot; an embarked traveler
/// disembarks when a pier/dock sits at either end of the edge, and
/// otherwise beaches with the boat, keeping the embarked state so the
/// water can be re-entered.
pub fn cross_edge(from: &Tile, to: &Tile, embarked: bool) -> Option<bool> {
    if to.terrain.is_water() {
        if to.building.is_water_access() {
            Some(false)
        } else if embarked || from.building.is_water_access() {
            Some(true)
        } else {
            None
        }
    } else if !embarked {
        Some(false)
    } else if to.building.is_water_access() || from.building.is_water_access() {
        // Orderly disembark at a pier
        Some(false)
    } else {
        // Beached: still carrying the boat
        Some(true)
    }
}

/// Search-local node. Created and discarded entirely within one
/// `find_path` call.
struct PathNode {
    coord: TileCoord,
    g_cost: f32,
    embarked: bool,
    parent: Option<usize>,
}

/// Open-set entry. The heap is ordered by lowest f-cost, ties broken by
/// lower h-cost, then insertion order.
struct OpenEntry {
    f_cost: f32,
    h_cost: f32,
    seq: u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    // Reverse ordering so the lowest f-cost pops first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .h_cost
                    .partial_cmp(&self.h_cost)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal`.
///
/// With `only_explored`, unexplored tiles are invisible to the search and
/// an unexplored goal fails immediately without expanding anything.
/// `embarked` is the traveler's starting navigation mode; the state flips
/// along a branch as piers are boarded and left.
pub fn find_path(
    map: &impl PathMap,
    costs: &impl MoveCost,
    start: TileCoord,
    goal: TileCoord,
    only_explored: bool,
    embarked: bool,
) -> PathResult {
    if start == goal {
        return PathResult {
            path: Vec::new(),
            total_cost: 0.0,
            found: true,
        };
    }

    let goal_tile = match map.tile(goal) {
        Some(tile) => tile,
        None => return PathResult::default(),
    };
    if only_explored && !goal_tile.explored {
        return PathResult::default();
    }
    if map.tile(start).is_none() {
        return PathResult::default();
    }

    // Node arena, alive only for this search
    let mut nodes: Vec<PathNode> = vec![PathNode {
        coord: start,
        g_cost: 0.0,
        embarked,
        parent: None,
    }];

    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(OpenEntry {
        f_cost: map.hex_distance(start, goal) as f32,
        h_cost: map.hex_distance(start, goal) as f32,
        seq,
        node: 0,
    });

    let mut best_g: HashMap<TileCoord, f32> = HashMap::new();
    best_g.insert(start, 0.0);
    let mut closed: HashSet<TileCoord> = HashSet::new();

    while let Some(entry) = open.pop() {
        let current = entry.node;
        let coord = nodes[current].coord;

        // Stale heap entry for an already-settled tile
        if !closed.insert(coord) {
            continue;
        }

        if coord == goal {
            return PathResult {
                total_cost: nodes[current].g_cost,
                path: reconstruct(&nodes, current),
                found: true,
            };
        }

        let from_tile = match map.tile(coord) {
            Some(tile) => tile,
            None => continue,
        };

        for neighbor in map.neighbors(coord) {
            if closed.contains(&neighbor) {
                continue;
            }
            let to_tile = match map.tile(neighbor) {
                Some(tile) => tile,
                None => continue,
            };
            if only_explored && !to_tile.explored {
                continue;
            }

            let new_embarked = match cross_edge(from_tile, to_tile, nodes[current].embarked) {
                Some(state) => state,
                None => continue,
            };

            let step_cost = costs.edge_cost(
                to_tile.has_road,
                to_tile.is_rough,
                to_tile.tree_density,
                from_tile.terrain,
                to_tile.terrain,
                new_embarked,
            );
            let g = nodes[current].g_cost + step_cost;

            if best_g.get(&neighbor).map(|&known| g < known).unwrap_or(true) {
                best_g.insert(neighbor, g);
                let h = map.hex_distance(neighbor, goal) as f32;
                nodes.push(PathNode {
                    coord: neighbor,
                    g_cost: g,
                    embarked: new_embarked,
                    parent: Some(current),
                });
                seq += 1;
                open.push(OpenEntry {
                    f_cost: g + h,
                    h_cost: h,
                    seq,
                    node: nodes.len() - 1,
                });
            }
        }
    }

    PathResult::default()
}

/// Walk parent links back from the goal node, excluding the start tile.
fn reconstruct(nodes: &[PathNode], goal: usize) -> Vec<TileCoord> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(parent) = nodes[current].parent {
        path.push(nodes[current].coord);
        current = parent;
    }
    path.reverse();
    path
}

/// Cost comparisons tolerate accumulated float error
const AP_EPSILON: f32 = 1e-4;

/// Replay a path's legality and cost tile by tile without searching.
/// Returns false on the first illegal transition, broken adjacency, or
/// when the accumulated cost exceeds `available_ap`. Used to re-validate
/// a cached path against current state.
pub fn is_path_valid(
    path: &[TileCoord],
    start: TileCoord,
    available_ap: f32,
    map: &impl PathMap,
    costs: &impl MoveCost,
    embarked: bool,
) -> bool {
    let mut current = start;
    let mut state = embarked;
    let mut spent = 0.0f32;

    for &step in path {
        if map.hex_distance(current, step) != 1 {
            return false;
        }
        let (from_tile, to_tile) = match (map.tile(current), map.tile(step)) {
            (Some(from), Some(to)) => (from, to),
            _ => return false,
        };
        state = match cross_edge(from_tile, to_tile, state) {
            Some(next) => next,
            None => return false,
        };
        spent += costs.edge_cost(
            to_tile.has_road,
            to_tile.is_rough,
            to_tile.tree_density,
            from_tile.terrain,
            to_tile.terrain,
            state,
        );
        if spent > available_ap + AP_EPSILON {
            return false;
        }
        current = step;
    }

    true
}
