//! Respawn position searches.
//!
//! All searches are pure reads against a [`RespawnLevel`]; they never load
//! chunks and never place anything. Failure is always `None`.
//!
//! - [`find_column_respawn`] scans one block column.
//! - [`find_chunk_respawn`] scans the 256 columns of a chunk in a fixed order.
//! - [`find_initial_spawn`] spirals outwards over chunks to pick a world spawn.
//! - [`find_fuzzed_respawn`] spreads players over columns around the world spawn.

pub mod fuzz;
pub mod initial;
pub mod level;
pub mod respawn;

pub use fuzz::{FuzzedCandidates, find_fuzzed_respawn, fuzz_radius};
pub use initial::{InitialSpawn, SpiralIter, find_initial_spawn};
pub use level::{DebugVoidTerrain, RespawnLevel, SpawnBlockState, VoidTerrainCheck};
pub use respawn::{find_chunk_respawn, find_column_respawn};
