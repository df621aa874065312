//! Heightmap kinds a world exposes per column.

/// The kinds of per-column height a chunk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightmapType {
    /// Highest non-air block, during world generation.
    WorldSurfaceWg,
    /// Highest non-air block.
    WorldSurface,
    /// Highest motion blocking block, during world generation.
    OceanFloorWg,
    /// Highest motion blocking block, ignoring fluids.
    OceanFloor,
    /// Highest block that blocks motion or holds a fluid.
    MotionBlocking,
    /// Like [`Self::MotionBlocking`], ignoring leaves.
    MotionBlockingNoLeaves,
}
