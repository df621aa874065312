//! Chunk level bookkeeping and heightmap kinds.

pub mod chunk_level;
pub mod heightmap;

pub use chunk_level::{ChunkLevel, FullChunkStatus};
pub use heightmap::HeightmapType;
