//! Ticket type descriptors.

use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering as AtomicOrdering},
    },
};

/// Compares two ticket keys of the same type.
pub type KeyComparator<K> = fn(&K, &K) -> Ordering;

/// Ids below this value are reserved for the built-in types in [`super::vanilla`].
pub(crate) const FIRST_REGISTERED_ID: u32 = 16;

static NEXT_TICKET_TYPE_ID: AtomicU32 = AtomicU32::new(FIRST_REGISTERED_ID);

/// A kind of keep-alive request.
///
/// Every constructed type receives a unique registration id, so two types
/// are only equal if they are the same registration, even when their name,
/// comparator and timeout match. Ids grow monotonically in registration
/// order, which makes the ordering of tickets reproducible between runs
/// that register their types in the same order.
pub struct TicketType<K> {
    id: u32,
    name: Cow<'static, str>,
    comparator: KeyComparator<K>,
    timeout: u64,
}

impl<K: Ord> TicketType<K> {
    /// Registers a ticket type whose keys are ordered by their [`Ord`] impl.
    ///
    /// A `timeout` of zero means tickets of this type never time out.
    pub fn new(name: impl Into<Cow<'static, str>>, timeout: u64) -> Arc<Self> {
        Self::with_comparator(name, K::cmp, timeout)
    }
}

impl<K> TicketType<K> {
    /// Registers a ticket type with a custom key ordering.
    pub fn with_comparator(
        name: impl Into<Cow<'static, str>>,
        comparator: KeyComparator<K>,
        timeout: u64,
    ) -> Arc<Self> {
        let id = NEXT_TICKET_TYPE_ID.fetch_add(1, AtomicOrdering::Relaxed);
        Arc::new(Self::with_id(id, name, comparator, timeout))
    }

    pub(crate) fn with_id(
        id: u32,
        name: impl Into<Cow<'static, str>>,
        comparator: KeyComparator<K>,
        timeout: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            comparator,
            timeout,
        }
    }

    /// The registration id, used to order tickets of different types with equal levels.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The type's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default unload delay in ticks for tickets of this type. Zero is permanent.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Orders two keys of this type.
    pub fn compare_keys(&self, a: &K, b: &K) -> Ordering {
        (self.comparator)(a, b)
    }
}

impl<K> PartialEq for TicketType<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K> Eq for TicketType<K> {}

impl<K> fmt::Debug for TicketType<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketType")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<K> fmt::Display for TicketType<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_registrations_are_distinct() {
        let a = TicketType::<u32>::new("test", 20);
        let b = TicketType::<u32>::new("test", 20);
        assert_ne!(*a, *b);
        assert_eq!(*a, *a);
        assert!(a.id() < b.id());
    }

    #[test]
    fn registered_ids_skip_the_reserved_range() {
        let ty = TicketType::<()>::new("late", 0);
        assert!(ty.id() >= FIRST_REGISTERED_ID);
    }

    #[test]
    fn custom_comparator_is_used() {
        let reversed = TicketType::<i32>::with_comparator("reversed", |a, b| b.cmp(a), 0);
        assert_eq!(reversed.compare_keys(&1, &2), Ordering::Greater);
        assert_eq!(reversed.timeout(), 0);
        assert_eq!(reversed.to_string(), "reversed");
    }
}
