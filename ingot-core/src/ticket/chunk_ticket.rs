//! The ticket value and its ordering.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::chunk::ChunkLevel;

use super::TicketType;

/// Scheduler owned bookkeeping of a ticket.
///
/// None of these fields take part in equality, hashing or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketSchedule {
    /// Tick at which the scheduler admitted the ticket.
    pub created_tick: u64,
    /// Ticks after `created_tick` until the ticket expires. Zero never expires.
    pub unload_delay: u64,
    /// Secondary scheduling hint.
    pub priority: i32,
}

impl TicketSchedule {
    /// Returns `true` once more than `unload_delay` ticks passed since creation.
    ///
    /// A ticket is still alive on the tick where exactly `unload_delay` ticks passed.
    #[must_use]
    pub const fn timed_out(&self, current_tick: u64) -> bool {
        self.unload_delay != 0 && current_tick.saturating_sub(self.created_tick) > self.unload_delay
    }
}

/// A request to keep a chunk loaded at `level` or stronger.
///
/// Tickets order by level first (lower levels are stronger and sort
/// first), then by the registration id of their type, then by the type's
/// key comparator. Equality covers exactly the level, the type and the key.
pub struct Ticket<K> {
    ticket_type: Arc<TicketType<K>>,
    level: u8,
    key: K,
    schedule: TicketSchedule,
}

impl<K> Ticket<K> {
    /// Creates a ticket. The unload delay starts at the type's default timeout.
    pub fn new(ticket_type: &Arc<TicketType<K>>, level: u8, key: K) -> Self {
        Self {
            ticket_type: Arc::clone(ticket_type),
            level,
            key,
            schedule: TicketSchedule {
                created_tick: 0,
                unload_delay: ticket_type.timeout(),
                priority: 0,
            },
        }
    }

    /// Creates a ticket that keeps `radius` rings of chunks around its target fully loaded.
    pub fn region(ticket_type: &Arc<TicketType<K>>, radius: u8, key: K) -> Self {
        Self::new(ticket_type, ChunkLevel::from_radius(radius), key)
    }

    /// The ticket's type.
    #[must_use]
    pub fn ticket_type(&self) -> &Arc<TicketType<K>> {
        &self.ticket_type
    }

    /// The requested level. Lower is stronger.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// The ticket's key.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The scheduler bookkeeping.
    #[must_use]
    pub const fn schedule(&self) -> &TicketSchedule {
        &self.schedule
    }

    /// Tick at which the ticket was admitted.
    #[must_use]
    pub const fn created_tick(&self) -> u64 {
        self.schedule.created_tick
    }

    /// Stamps the admission tick.
    ///
    /// The scheduler stamps a ticket once, when it admits it. Stamping again
    /// simply replaces the tick and restarts the timeout window.
    pub fn set_created_tick(&mut self, tick: u64) {
        self.schedule.created_tick = tick;
    }

    /// Current unload delay in ticks.
    #[must_use]
    pub const fn unload_delay(&self) -> u64 {
        self.schedule.unload_delay
    }

    /// Overrides the unload delay. Zero makes the ticket permanent.
    pub fn set_unload_delay(&mut self, delay: u64) {
        self.schedule.unload_delay = delay;
    }

    /// Secondary scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.schedule.priority
    }

    /// Sets the secondary scheduling priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.schedule.priority = priority;
    }

    /// Returns `true` if the ticket expired by `current_tick`.
    #[must_use]
    pub const fn timed_out(&self, current_tick: u64) -> bool {
        self.schedule.timed_out(current_tick)
    }
}

impl<K: Clone> Clone for Ticket<K> {
    fn clone(&self) -> Self {
        Self {
            ticket_type: Arc::clone(&self.ticket_type),
            level: self.level,
            key: self.key.clone(),
            schedule: self.schedule,
        }
    }
}

impl<K: PartialEq> PartialEq for Ticket<K> {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.ticket_type == other.ticket_type && self.key == other.key
    }
}

impl<K: Eq> Eq for Ticket<K> {}

impl<K: Hash> Hash for Ticket<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
        self.ticket_type.id().hash(state);
        self.key.hash(state);
    }
}

impl<K: Eq> PartialOrd for Ticket<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Eq> Ord for Ticket<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.level.cmp(&other.level) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.ticket_type.id().cmp(&other.ticket_type.id()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.ticket_type.compare_keys(&self.key, &other.key)
    }
}

impl<K: fmt::Debug> fmt::Debug for Ticket<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticket")
            .field("ticket_type", &self.ticket_type.name())
            .field("level", &self.level)
            .field("key", &self.key)
            .field("schedule", &self.schedule)
            .finish()
    }
}

impl<K: fmt::Debug> fmt::Display for Ticket<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket[{} {} ({:?})] at {}",
            self.ticket_type, self.level, self.key, self.schedule.created_tick
        )
    }
}
