//! # Ingot Utils
//!
//! Shared value types and logging setup for the ingot crates.

pub mod logger;
pub mod math;
pub mod types;

pub use types::{BlockPos, ChunkPos};
