//! The read-only world view the spawn searches run against.

use ingot_utils::{BlockPos, ChunkPos};

use crate::{SpawnConfig, chunk::HeightmapType};

/// The two block properties a respawn scan looks at.
pub trait SpawnBlockState {
    /// Returns `true` if the block holds any fluid, source or flowing.
    fn has_fluid(&self) -> bool;

    /// Returns `true` if the block's collision shape covers its whole top face.
    fn is_upper_face_full(&self) -> bool;
}

/// Queries a dimension answers for the respawn searches.
///
/// Implementors hand out data that is already resident; the searches never
/// ask for chunks to be loaded or generated.
pub trait RespawnLevel {
    /// The block state type returned by [`Self::block_state`].
    type BlockState: SpawnBlockState;

    /// Whether the dimension has a bedrock ceiling, like the nether.
    fn has_ceiling(&self) -> bool;

    /// The lowest buildable y.
    fn min_build_height(&self) -> i32;

    /// The height stored in the given heightmap for a block column.
    fn height(&self, heightmap: HeightmapType, x: i32, z: i32) -> i32;

    /// The block state at a position.
    fn block_state(&self, pos: &BlockPos) -> Self::BlockState;

    /// The fixed spawn height the dimension's generator suggests.
    fn generator_spawn_height(&self) -> i32;
}

/// Flags chunks that are intentionally left empty.
pub trait VoidTerrainCheck {
    /// Returns `true` if the chunk is void terrain and must not be searched.
    fn is_void_terrain(&self, pos: ChunkPos) -> bool;
}

impl<F: Fn(ChunkPos) -> bool> VoidTerrainCheck for F {
    fn is_void_terrain(&self, pos: ChunkPos) -> bool {
        self(pos)
    }
}

/// The debug void terrain switch.
///
/// When enabled, everything outside a strip of blocks starting at the
/// origin (x in `0..=8192`, z in `0..=1024`) is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugVoidTerrain {
    enabled: bool,
}

impl DebugVoidTerrain {
    /// Void terrain disabled; nothing is void.
    pub const DISABLED: Self = Self { enabled: false };

    /// Void terrain enabled.
    pub const ENABLED: Self = Self { enabled: true };

    const MAX_BLOCK_X: i32 = 8192;
    const MAX_BLOCK_Z: i32 = 1024;

    /// Reads the switch from the spawn config.
    #[must_use]
    pub const fn from_config(config: &SpawnConfig) -> Self {
        Self {
            enabled: config.debug_void_terrain,
        }
    }

    /// Whether the switch is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl VoidTerrainCheck for DebugVoidTerrain {
    fn is_void_terrain(&self, pos: ChunkPos) -> bool {
        if !self.enabled {
            return false;
        }
        let x = pos.min_block_x();
        let z = pos.min_block_z();
        !(0..=Self::MAX_BLOCK_X).contains(&x) || !(0..=Self::MAX_BLOCK_Z).contains(&z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_switch_never_voids() {
        assert!(!DebugVoidTerrain::DISABLED.is_void_terrain(ChunkPos::new(-10, -10)));
        assert!(!DebugVoidTerrain::default().is_enabled());
    }

    #[test]
    fn enabled_switch_keeps_the_debug_strip() {
        let check = DebugVoidTerrain::ENABLED;
        assert!(!check.is_void_terrain(ChunkPos::new(0, 0)));
        assert!(!check.is_void_terrain(ChunkPos::new(512, 64)));
        assert!(check.is_void_terrain(ChunkPos::new(513, 0)));
        assert!(check.is_void_terrain(ChunkPos::new(0, 65)));
        assert!(check.is_void_terrain(ChunkPos::new(-1, 0)));
        assert!(check.is_void_terrain(ChunkPos::new(0, -1)));
    }

    #[test]
    fn closures_are_void_checks() {
        let only_origin = |pos: ChunkPos| pos == ChunkPos::new(0, 0);
        assert!(only_origin.is_void_terrain(ChunkPos::new(0, 0)));
        assert!(!only_origin.is_void_terrain(ChunkPos::new(0, 1)));
    }

    #[test]
    fn config_switch() {
        let config = SpawnConfig {
            debug_void_terrain: true,
            ..SpawnConfig::default()
        };
        assert!(DebugVoidTerrain::from_config(&config).is_enabled());
    }
}
