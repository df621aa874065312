//! Picking a dimension's initial spawn point.
//!
//! Chunks around the center are visited in a square spiral and the first
//! chunk with a respawn position wins. If none has one, the spawn falls back
//! to the middle of the center chunk at the generator's spawn height.

use ingot_utils::{BlockPos, ChunkPos};

use crate::chunk::HeightmapType;

use super::{RespawnLevel, VoidTerrainCheck, respawn::find_chunk_respawn};

/// Iterates chunk offsets in a square spiral around `(0, 0)`.
///
/// The walk starts at the center, steps east, then turns counter-clockwise
/// each time it reaches a corner. It takes `(2r + 1)²` steps and only yields
/// offsets inside `[-r, r]` on both axes.
#[derive(Debug, Clone)]
pub struct SpiralIter {
    radius: i32,
    x: i32,
    z: i32,
    dx: i32,
    dz: i32,
    remaining: u32,
}

impl SpiralIter {
    /// Creates a spiral covering `radius` rings around the center.
    #[must_use]
    pub fn new(radius: u8) -> Self {
        let side = u32::from(radius) * 2 + 1;
        Self {
            radius: i32::from(radius),
            x: 0,
            z: 0,
            dx: 0,
            dz: -1,
            remaining: side * side,
        }
    }

    const fn in_bounds(&self) -> bool {
        self.x >= -self.radius && self.x <= self.radius && self.z >= -self.radius && self.z <= self.radius
    }

    fn advance(&mut self) {
        let (x, z) = (self.x, self.z);
        if x == z || (x < 0 && x == -z) || (x > 0 && x == 1 - z) {
            let previous_dx = self.dx;
            self.dx = -self.dz;
            self.dz = previous_dx;
        }
        self.x += self.dx;
        self.z += self.dz;
    }
}

impl Iterator for SpiralIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let current = (self.x, self.z);
            let in_bounds = self.in_bounds();
            self.advance();
            if in_bounds {
                return Some(current);
            }
        }
        None
    }
}

/// The outcome of [`find_initial_spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialSpawn {
    /// The chosen spawn position.
    pub pos: BlockPos,
    /// `false` if no chunk had a respawn position and `pos` is the fallback.
    pub exact: bool,
}

/// Finds the initial spawn point of a dimension around `center`.
///
/// `radius` is the number of chunk rings searched around the center.
pub fn find_initial_spawn<L, V>(
    level: &L,
    void_terrain: &V,
    center: ChunkPos,
    radius: u8,
) -> InitialSpawn
where
    L: RespawnLevel + ?Sized,
    V: VoidTerrainCheck + ?Sized,
{
    log::debug!("Searching {radius} chunk rings around {center} for the initial spawn");

    let found = SpiralIter::new(radius)
        .find_map(|(dx, dz)| find_chunk_respawn(level, void_terrain, center.offset(dx, dz)));

    if let Some(pos) = found {
        log::debug!("Initial spawn found at {pos}");
        return InitialSpawn { pos, exact: true };
    }

    let pos = fallback_spawn(level, center);
    log::warn!("No safe spawn within {radius} chunks of {center}, falling back to {pos}");
    InitialSpawn { pos, exact: false }
}

/// The middle of `center` at the generator's spawn height, or at the world
/// surface when that height lies below the world.
fn fallback_spawn<L: RespawnLevel + ?Sized>(level: &L, center: ChunkPos) -> BlockPos {
    let origin = center.world_position();
    let mut y = level.generator_spawn_height();
    if y < level.min_build_height() {
        y = level.height(HeightmapType::WorldSurface, origin.x() + 8, origin.z() + 8);
    }
    origin.offset(8, y, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn spiral_starts_at_center_and_walks_the_first_ring() {
        let first: Vec<_> = SpiralIter::new(1).take(9).collect();
        assert_eq!(
            first,
            vec![
                (0, 0),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
            ]
        );
    }

    #[test]
    fn spiral_covers_the_square_once() {
        for radius in [0u8, 1, 2, 5] {
            let side = i32::from(radius) * 2 + 1;
            let visited: Vec<_> = SpiralIter::new(radius).collect();
            let unique: FxHashSet<_> = visited.iter().copied().collect();

            assert_eq!(visited.len(), (side * side) as usize);
            assert_eq!(unique.len(), visited.len());
            let r = i32::from(radius);
            assert!(unique.iter().all(|&(x, z)| x.abs() <= r && z.abs() <= r));
        }
    }
}
