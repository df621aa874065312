//! An in-memory world for the spawn search tests.
#![allow(dead_code)]

use std::cell::Cell;

use ingot_core::{
    chunk::HeightmapType,
    spawn::{RespawnLevel, SpawnBlockState},
};
use ingot_utils::{BlockPos, ChunkPos};
use rustc_hash::FxHashMap;

/// Blocks with the properties the scan cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestBlock {
    Air,
    Stone,
    Water,
    /// A bottom slab: solid, but its top face is not full.
    BottomSlab,
    /// A waterlogged top slab: full top face and a fluid.
    WaterloggedSlab,
}

impl SpawnBlockState for TestBlock {
    fn has_fluid(&self) -> bool {
        matches!(self, Self::Water | Self::WaterloggedSlab)
    }

    fn is_upper_face_full(&self) -> bool {
        matches!(self, Self::Stone | Self::WaterloggedSlab)
    }
}

/// A block column with explicit heightmap values.
#[derive(Debug, Clone, Default)]
pub struct Column {
    blocks: FxHashMap<i32, TestBlock>,
    motion_blocking: i32,
    world_surface: i32,
    ocean_floor: i32,
}

impl Column {
    /// Dry land: a single block at `ground` with all heightmaps at `top`.
    pub fn dry(ground: i32, top: i32) -> Self {
        Self::default()
            .with_block(ground, TestBlock::Stone)
            .with_heights(top, top, top)
    }

    pub fn with_block(mut self, y: i32, block: TestBlock) -> Self {
        self.blocks.insert(y, block);
        self
    }

    pub fn with_heights(mut self, motion_blocking: i32, world_surface: i32, ocean_floor: i32) -> Self {
        self.motion_blocking = motion_blocking;
        self.world_surface = world_surface;
        self.ocean_floor = ocean_floor;
        self
    }
}

/// A dimension made of explicitly placed columns. Missing columns are
/// empty with every heightmap below the world.
pub struct ColumnWorld {
    min_y: i32,
    ceiling: bool,
    spawn_height: i32,
    columns: FxHashMap<(i32, i32), Column>,
    block_queries: Cell<usize>,
}

impl ColumnWorld {
    pub fn new(min_y: i32) -> Self {
        Self {
            min_y,
            ceiling: false,
            spawn_height: 64,
            columns: FxHashMap::default(),
            block_queries: Cell::new(0),
        }
    }

    pub fn with_ceiling(mut self, ceiling: bool) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn with_spawn_height(mut self, spawn_height: i32) -> Self {
        self.spawn_height = spawn_height;
        self
    }

    pub fn set_column(&mut self, x: i32, z: i32, column: Column) {
        self.columns.insert((x, z), column);
    }

    /// Places a copy of `column` in every column of `chunk`.
    pub fn fill_chunk(&mut self, chunk: ChunkPos, column: &Column) {
        for x in chunk.min_block_x()..=chunk.max_block_x() {
            for z in chunk.min_block_z()..=chunk.max_block_z() {
                self.set_column(x, z, column.clone());
            }
        }
    }

    pub fn block_queries(&self) -> usize {
        self.block_queries.get()
    }
}

impl RespawnLevel for ColumnWorld {
    type BlockState = TestBlock;

    fn has_ceiling(&self) -> bool {
        self.ceiling
    }

    fn min_build_height(&self) -> i32 {
        self.min_y
    }

    fn height(&self, heightmap: HeightmapType, x: i32, z: i32) -> i32 {
        let Some(column) = self.columns.get(&(x, z)) else {
            return self.min_y - 1;
        };
        match heightmap {
            HeightmapType::MotionBlocking | HeightmapType::MotionBlockingNoLeaves => {
                column.motion_blocking
            }
            HeightmapType::WorldSurface | HeightmapType::WorldSurfaceWg => column.world_surface,
            HeightmapType::OceanFloor | HeightmapType::OceanFloorWg => column.ocean_floor,
        }
    }

    fn block_state(&self, pos: &BlockPos) -> TestBlock {
        self.block_queries.set(self.block_queries.get() + 1);
        self.columns
            .get(&(pos.x(), pos.z()))
            .and_then(|column| column.blocks.get(&pos.y()).copied())
            .unwrap_or(TestBlock::Air)
    }

    fn generator_spawn_height(&self) -> i32 {
        self.spawn_height
    }
}
