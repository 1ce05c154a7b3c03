//! Seed management for world generation
//!
//! Each generation system gets its own seed derived from the master seed,
//! so varying one system (e.g. settlements) leaves the others unchanged.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for all world generation systems.
#[derive(Clone, Copy, Debug)]
pub struct WorldSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Base elevation field
    pub terrain: u64,
    /// High-frequency elevation detail layer
    pub detail: u64,
    /// Tree/bush field
    pub vegetation: u64,
    /// Rough-terrain patches
    pub rough: u64,
    /// Settlement candidate scan and specialization rolls
    pub settlements: u64,
}

impl WorldSeeds {
    /// Derive all sub-seeds deterministically from a master seed.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            terrain: derive_seed(master, "terrain"),
            detail: derive_seed(master, "detail"),
            vegetation: derive_seed(master, "vegetation"),
            rough: derive_seed(master, "rough"),
            settlements: derive_seed(master, "settlements"),
        }
    }
}

/// Derive a sub-seed from a master seed and a system name.
/// Hashing ensures different systems get different but deterministic seeds.
fn derive_seed(master: u64, system: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    system.hash(&mut hasher);
    hasher.finish()
}
