//! Type erased tickets.
//!
//! A scheduler keeps tickets of every type for a chunk in one ordered
//! collection. [`AnyTicket`] hides the key type while keeping the same
//! ordering, equality, hashing and timeout behaviour as [`Ticket`].

use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::{Ticket, TicketSchedule};

trait ErasedTicket: Send + Sync {
    fn level(&self) -> u8;
    fn ticket_type_id(&self) -> u32;
    fn type_name(&self) -> &str;
    fn schedule(&self) -> &TicketSchedule;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Only called when both tickets share a type id.
    fn cmp_key(&self, other: &dyn ErasedTicket) -> Ordering;
    /// Only called when both tickets share a type id.
    fn eq_key(&self, other: &dyn ErasedTicket) -> bool;
    fn hash_key(&self, state: &mut dyn Hasher);
    fn fmt_ticket(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<K> ErasedTicket for Ticket<K>
where
    K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn level(&self) -> u8 {
        Ticket::level(self)
    }

    fn ticket_type_id(&self) -> u32 {
        self.ticket_type().id()
    }

    fn type_name(&self) -> &str {
        self.ticket_type().name()
    }

    fn schedule(&self) -> &TicketSchedule {
        Ticket::schedule(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn cmp_key(&self, other: &dyn ErasedTicket) -> Ordering {
        // Equal type ids imply the same `TicketType<K>` and therefore the same `K`.
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(Ordering::Equal, |other| {
                self.ticket_type().compare_keys(self.key(), other.key())
            })
    }

    fn eq_key(&self, other: &dyn ErasedTicket) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.key() == other.key())
    }

    fn hash_key(&self, mut state: &mut dyn Hasher) {
        self.key().hash(&mut state);
    }

    fn fmt_ticket(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A ticket whose key type has been erased.
pub struct AnyTicket(Box<dyn ErasedTicket>);

impl AnyTicket {
    /// Erases the key type of `ticket`.
    pub fn new<K>(ticket: Ticket<K>) -> Self
    where
        K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    {
        Self(Box::new(ticket))
    }

    /// The requested level. Lower is stronger.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.0.level()
    }

    /// Registration id of the ticket's type.
    #[must_use]
    pub fn ticket_type_id(&self) -> u32 {
        self.0.ticket_type_id()
    }

    /// Name of the ticket's type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    /// The scheduler bookkeeping.
    #[must_use]
    pub fn schedule(&self) -> &TicketSchedule {
        self.0.schedule()
    }

    /// Returns `true` if the ticket expired by `current_tick`.
    #[must_use]
    pub fn timed_out(&self, current_tick: u64) -> bool {
        self.0.schedule().timed_out(current_tick)
    }

    /// Returns the typed ticket if its key type is `K`.
    #[must_use]
    pub fn downcast_ref<K: 'static>(&self) -> Option<&Ticket<K>> {
        self.0.as_any().downcast_ref()
    }

    /// Returns the typed ticket mutably if its key type is `K`.
    pub fn downcast_mut<K: 'static>(&mut self) -> Option<&mut Ticket<K>> {
        self.0.as_any_mut().downcast_mut()
    }
}

impl<K> From<Ticket<K>> for AnyTicket
where
    K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn from(ticket: Ticket<K>) -> Self {
        Self::new(ticket)
    }
}

impl PartialEq for AnyTicket {
    fn eq(&self, other: &Self) -> bool {
        self.level() == other.level()
            && self.ticket_type_id() == other.ticket_type_id()
            && self.0.eq_key(other.0.as_ref())
    }
}

impl Eq for AnyTicket {}

impl Hash for AnyTicket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level().hash(state);
        self.ticket_type_id().hash(state);
        self.0.hash_key(state);
    }
}

impl PartialOrd for AnyTicket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyTicket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level()
            .cmp(&other.level())
            .then_with(|| self.ticket_type_id().cmp(&other.ticket_type_id()))
            .then_with(|| self.0.cmp_key(other.0.as_ref()))
    }
}

impl fmt::Debug for AnyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_ticket(f)
    }
}

impl fmt::Display for AnyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_ticket(f)
    }
}
