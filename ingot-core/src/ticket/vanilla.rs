//! Built-in ticket types.
//!
//! These use fixed ids below the range handed out by
//! [`TicketType::with_comparator`], so their relative order never depends
//! on which static is touched first.

use std::{
    cmp::Ordering,
    sync::{Arc, LazyLock},
};

use ingot_utils::{BlockPos, ChunkPos};

use super::TicketType;

/// Keeps the spawn area loaded while the server starts.
pub static START: LazyLock<Arc<TicketType<()>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(0, "start", <()>::cmp, 0)));

/// Keeps the end fight area loaded.
pub static DRAGON: LazyLock<Arc<TicketType<()>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(1, "dragon", <()>::cmp, 0)));

/// Keeps chunks around a player loaded.
pub static PLAYER: LazyLock<Arc<TicketType<ChunkPos>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(2, "player", compare_chunk_pos, 0)));

/// Force loaded chunks.
pub static FORCED: LazyLock<Arc<TicketType<ChunkPos>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(3, "forced", compare_chunk_pos, 0)));

/// Keeps chunks loaded while their light is computed.
pub static LIGHT: LazyLock<Arc<TicketType<ChunkPos>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(4, "light", compare_chunk_pos, 0)));

/// Keeps the area around a used portal loaded for a while.
pub static PORTAL: LazyLock<Arc<TicketType<BlockPos>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(5, "portal", compare_block_pos, 300)));

/// Keeps the destination of a teleport loaded for a few ticks. Keyed by entity id.
pub static POST_TELEPORT: LazyLock<Arc<TicketType<i32>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(6, "post_teleport", i32::cmp, 5)));

/// Short lived ticket for chunks requested without a more specific reason.
pub static UNKNOWN: LazyLock<Arc<TicketType<ChunkPos>>> =
    LazyLock::new(|| Arc::new(TicketType::with_id(7, "unknown", compare_chunk_pos, 1)));

/// Orders chunk keys by their packed representation.
#[must_use]
pub fn compare_chunk_pos(a: &ChunkPos, b: &ChunkPos) -> Ordering {
    a.as_i64().cmp(&b.as_i64())
}

/// Orders block keys by y, then z, then x.
#[must_use]
pub fn compare_block_pos(a: &BlockPos, b: &BlockPos) -> Ordering {
    a.y()
        .cmp(&b.y())
        .then_with(|| a.z().cmp(&b.z()))
        .then_with(|| a.x().cmp(&b.x()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::Ticket;

    #[test]
    fn builtin_ids_are_fixed_and_distinct() {
        let ids = [
            UNKNOWN.id(),
            START.id(),
            PORTAL.id(),
            DRAGON.id(),
            PLAYER.id(),
            POST_TELEPORT.id(),
            FORCED.id(),
            LIGHT.id(),
        ];
        assert_eq!(ids, [7, 0, 5, 1, 2, 6, 3, 4]);
    }

    #[test]
    fn builtin_timeouts() {
        assert_eq!(START.timeout(), 0);
        assert_eq!(PLAYER.timeout(), 0);
        assert_eq!(PORTAL.timeout(), 300);
        assert_eq!(POST_TELEPORT.timeout(), 5);
        assert_eq!(UNKNOWN.timeout(), 1);
    }

    #[test]
    fn chunk_keys_order_by_packed_value() {
        // z lives in the high half, so it dominates.
        let a = ChunkPos::new(100, 0);
        let b = ChunkPos::new(0, 1);
        assert_eq!(compare_chunk_pos(&a, &b), Ordering::Less);
        // Negative x sets the low half to a large unsigned value.
        assert_eq!(
            compare_chunk_pos(&ChunkPos::new(-1, 0), &ChunkPos::new(1, 0)),
            Ordering::Greater
        );
    }

    #[test]
    fn block_keys_order_by_height_first() {
        let low = BlockPos::new(50, 10, 50);
        let high = BlockPos::new(0, 11, 0);
        assert_eq!(compare_block_pos(&low, &high), Ordering::Less);
        assert_eq!(
            compare_block_pos(&BlockPos::new(1, 0, 0), &BlockPos::new(0, 0, 1)),
            Ordering::Less
        );
    }

    #[test]
    fn same_level_orders_by_builtin_id() {
        let forced = Ticket::new(&FORCED, 31, ChunkPos::new(0, 0));
        let player = Ticket::new(&PLAYER, 31, ChunkPos::new(0, 0));
        assert!(crate::ticket::AnyTicket::new(player) < crate::ticket::AnyTicket::new(forced));
    }

    #[test]
    fn portal_ticket_expires_after_three_hundred_ticks() {
        let mut ticket = Ticket::region(&PORTAL, 3, BlockPos::new(8, 70, 8));
        ticket.set_created_tick(1_000);
        assert_eq!(ticket.level(), 30);
        assert!(!ticket.timed_out(1_300));
        assert!(ticket.timed_out(1_301));
    }
}
