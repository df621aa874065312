/// How much of a chunk is available at a given ticket level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FullChunkStatus {
    /// Not loaded as a full chunk.
    Inaccessible,
    /// Loaded, but neither blocks nor entities tick.
    Border,
    /// Blocks tick.
    Ticking,
    /// Blocks and entities tick.
    EntityTicking,
}

/// Utilities for converting between chunk levels and statuses.
pub struct ChunkLevel;

impl ChunkLevel {
    /// Ticket levels at or below this threshold require a full chunk.
    pub const FULL_STATUS_LEVEL: u8 = 33;

    /// Number of levels above [`Self::FULL_STATUS_LEVEL`] spent on partially generated chunks.
    pub const GENERATION_RADIUS: u8 = 11;

    /// Levels at or above this value unload the chunk.
    pub const MAX_LEVEL: u8 = Self::FULL_STATUS_LEVEL + Self::GENERATION_RADIUS;

    /// Returns the level a region ticket with the given radius is placed at.
    ///
    /// A radius of zero keeps only the center chunk full; larger radii
    /// strengthen the ticket one level per ring.
    #[must_use]
    pub const fn from_radius(radius: u8) -> u8 {
        Self::FULL_STATUS_LEVEL.saturating_sub(radius)
    }

    /// Returns the full status for the given level.
    #[must_use]
    pub const fn full_status(level: u8) -> FullChunkStatus {
        match level {
            0..=31 => FullChunkStatus::EntityTicking,
            32 => FullChunkStatus::Ticking,
            33 => FullChunkStatus::Border,
            _ => FullChunkStatus::Inaccessible,
        }
    }

    /// Returns `true` if a chunk at this level is kept loaded at all.
    #[must_use]
    pub const fn is_loaded(level: u8) -> bool {
        level < Self::MAX_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_radius_lowers_the_level() {
        assert_eq!(ChunkLevel::from_radius(0), 33);
        assert_eq!(ChunkLevel::from_radius(2), 31);
        assert_eq!(ChunkLevel::from_radius(200), 0);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(ChunkLevel::full_status(34), FullChunkStatus::Inaccessible);
        assert_eq!(ChunkLevel::full_status(33), FullChunkStatus::Border);
        assert_eq!(ChunkLevel::full_status(32), FullChunkStatus::Ticking);
        assert_eq!(ChunkLevel::full_status(31), FullChunkStatus::EntityTicking);
        assert_eq!(ChunkLevel::full_status(0), FullChunkStatus::EntityTicking);
        assert!(ChunkLevel::is_loaded(43));
        assert!(!ChunkLevel::is_loaded(ChunkLevel::MAX_LEVEL));
    }
}
