//! Spreading player spawns around the world spawn.
//!
//! Every column in a square around the spawn point is tried exactly once,
//! in an order that starts at a random cell and then steps by a stride
//! coprime to the number of cells.

use ingot_utils::BlockPos;
use rand::Rng;

use super::{RespawnLevel, respawn::find_column_respawn};

/// Clamps the configured spawn radius to the world border.
///
/// `border_distance` is the whole number of blocks between the spawn point
/// and the nearest border edge. The radius never exceeds it, and a border
/// one block away or closer still leaves a radius of one.
#[must_use]
pub fn fuzz_radius(spawn_radius: u32, border_distance: i32) -> u32 {
    if border_distance <= 1 {
        return 1;
    }
    spawn_radius.min(border_distance as u32)
}

/// Column coordinates around a center, each visited exactly once.
#[derive(Debug, Clone)]
pub struct FuzzedCandidates {
    center_x: i32,
    center_z: i32,
    radius: u64,
    side: u64,
    area: u64,
    stride: u64,
    start: u64,
    step: u64,
}

impl FuzzedCandidates {
    /// Candidates around `center` within `radius`, starting at cell `start`.
    ///
    /// `start` is taken modulo the number of cells.
    #[must_use]
    pub fn with_start(center: BlockPos, radius: u32, start: u64) -> Self {
        let radius = u64::from(radius);
        let side = radius * 2 + 1;
        let area = side.saturating_mul(side).min(i32::MAX as u64);
        Self {
            center_x: center.x(),
            center_z: center.z(),
            radius,
            side,
            area,
            stride: coprime_stride(area),
            start: start % area,
            step: 0,
        }
    }

    /// Number of cells in the square.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.area
    }
}

impl Iterator for FuzzedCandidates {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.area {
            return None;
        }
        let cell = (self.start + self.stride * self.step) % self.area;
        self.step += 1;

        let dx = (cell % self.side) as i64 - self.radius as i64;
        let dz = (cell / self.side) as i64 - self.radius as i64;
        Some((
            (i64::from(self.center_x) + dx) as i32,
            (i64::from(self.center_z) + dz) as i32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.area - self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FuzzedCandidates {}

/// A stride that visits every cell of an `area` sized square once.
///
/// Small areas step by `area - 1`; larger ones by the first of a few small
/// primes that does not divide the area.
fn coprime_stride(area: u64) -> u64 {
    if area <= 16 {
        return area.saturating_sub(1).max(1);
    }
    [17, 19, 23, 29, 31]
        .into_iter()
        .find(|prime| area % prime != 0)
        .unwrap_or(1)
}

/// Finds a respawn position in a random column within `radius` of `center`.
///
/// Every column of the square is tried once before giving up.
pub fn find_fuzzed_respawn<L, R>(
    level: &L,
    center: BlockPos,
    radius: u32,
    rng: &mut R,
) -> Option<BlockPos>
where
    L: RespawnLevel + ?Sized,
    R: Rng,
{
    let area = FuzzedCandidates::with_start(center, radius, 0).area();
    let start = rng.random_range(0..area);

    let found = FuzzedCandidates::with_start(center, radius, start)
        .find_map(|(x, z)| find_column_respawn(level, x, z));
    if found.is_none() {
        log::debug!("No respawn column within {radius} blocks of {center}");
    }
    found
}
