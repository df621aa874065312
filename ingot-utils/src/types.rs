// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::fmt::{self, Display};

use crate::math::{vector2::Vector2, vector3::Vector3};

/// Number of blocks along one horizontal edge of a chunk.
pub const CHUNK_WIDTH: i32 = 16;

// A chunk position. `.0.y` holds the chunk's z coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos(pub Vector2<i32>);

// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl ChunkPos {
    /// Creates a chunk position from chunk coordinates.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    /// The chunk's x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The chunk's z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.y
    }

    /// Returns the chunk containing the given block.
    #[must_use]
    pub const fn containing(pos: &BlockPos) -> Self {
        Self::new(pos.0.x >> 4, pos.0.z >> 4)
    }

    /// Packs the position into a single `i64`, x in the low half and z in the high half.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        (self.0.x as i64 & 0xFFFF_FFFF) | ((self.0.y as i64 & 0xFFFF_FFFF) << 32)
    }

    /// Unpacks a position produced by [`ChunkPos::as_i64`].
    #[must_use]
    pub const fn from_i64(packed: i64) -> Self {
        Self::new(packed as i32, (packed >> 32) as i32)
    }

    /// Lowest block x inside this chunk.
    #[must_use]
    pub const fn min_block_x(&self) -> i32 {
        self.0.x * CHUNK_WIDTH
    }

    /// Lowest block z inside this chunk.
    #[must_use]
    pub const fn min_block_z(&self) -> i32 {
        self.0.y * CHUNK_WIDTH
    }

    /// Highest block x inside this chunk (inclusive).
    #[must_use]
    pub const fn max_block_x(&self) -> i32 {
        self.min_block_x() + CHUNK_WIDTH - 1
    }

    /// Highest block z inside this chunk (inclusive).
    #[must_use]
    pub const fn max_block_z(&self) -> i32 {
        self.min_block_z() + CHUNK_WIDTH - 1
    }

    /// The block at the chunk's minimum corner, at y = 0.
    #[must_use]
    pub const fn world_position(&self) -> BlockPos {
        BlockPos::new(self.min_block_x(), 0, self.min_block_z())
    }

    /// Returns this position shifted by the given chunk offsets.
    #[must_use]
    pub const fn offset(&self, dx: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dz)
    }
}

impl Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0.x, self.0.y)
    }
}

impl BlockPos {
    /// Creates a block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns this position shifted by the given offsets.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// The position directly above.
    #[must_use]
    pub const fn above(&self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The position directly below.
    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
