//! # Ingot Core
//!
//! Chunk keep-alive tickets and the respawn position search.
//!
//! - [`ticket`] defines tickets, their types and the ordering an external
//!   scheduler relies on.
//! - [`spawn`] finds safe positions inside chunks through the narrow
//!   [`spawn::RespawnLevel`] view of a world.

pub mod chunk;
pub mod config;
pub mod spawn;
pub mod ticket;

pub use config::{ConfigError, SpawnConfig};
