//! Column and chunk respawn scans.

use ingot_utils::{BlockPos, ChunkPos};

use crate::chunk::HeightmapType;

use super::{RespawnLevel, SpawnBlockState, VoidTerrainCheck};

/// Finds a safe respawn position in a single block column.
///
/// The scan starts one block above the column's motion blocking height (or
/// the generator's spawn height in dimensions with a ceiling) and walks
/// down to the minimum build height. The first block with a full top face
/// wins and the position above it is returned. A fluid anywhere on the way
/// down ends the search for this column.
///
/// Columns whose world surface sits at or below the start height while
/// still being above the ocean floor are rejected up front: that is a thin
/// pocket over a flooded floor.
pub fn find_column_respawn<L>(level: &L, x: i32, z: i32) -> Option<BlockPos>
where
    L: RespawnLevel + ?Sized,
{
    let min_y = level.min_build_height();
    let start_y = if level.has_ceiling() {
        level.generator_spawn_height()
    } else {
        level.height(HeightmapType::MotionBlocking, x, z)
    };

    if start_y < min_y {
        return None;
    }

    let surface_y = level.height(HeightmapType::WorldSurface, x, z);
    if surface_y <= start_y && surface_y > level.height(HeightmapType::OceanFloor, x, z) {
        log::trace!("Column ({x}, {z}) rejected: surface {surface_y} over a flooded floor");
        return None;
    }

    let mut cursor = BlockPos::new(x, start_y, z);
    for y in (min_y..=start_y.saturating_add(1)).rev() {
        cursor.0.y = y;
        let state = level.block_state(&cursor);

        if state.has_fluid() {
            log::trace!("Column ({x}, {z}) blocked by fluid at y={y}");
            return None;
        }
        if state.is_upper_face_full() {
            return Some(cursor.above());
        }
    }

    None
}

/// Finds the first safe respawn position inside a chunk.
///
/// Columns are tried with x ascending in the outer loop and z ascending in
/// the inner loop. This order is part of the contract: the same terrain
/// always yields the same position.
pub fn find_chunk_respawn<L, V>(level: &L, void_terrain: &V, chunk: ChunkPos) -> Option<BlockPos>
where
    L: RespawnLevel + ?Sized,
    V: VoidTerrainCheck + ?Sized,
{
    if void_terrain.is_void_terrain(chunk) {
        log::trace!("Skipping void terrain chunk {chunk}");
        return None;
    }

    let (min_z, max_z) = (chunk.min_block_z(), chunk.max_block_z());
    (chunk.min_block_x()..=chunk.max_block_x())
        .flat_map(|x| (min_z..=max_z).map(move |z| (x, z)))
        .find_map(|(x, z)| find_column_respawn(level, x, z))
}
