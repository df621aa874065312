//! Chunk keep-alive tickets.
//!
//! A [`Ticket`] asks for a chunk to stay loaded at a level. Tickets are
//! created by an external scheduler, which stamps their creation tick,
//! keeps them in ordered collections and periodically drops the ones that
//! [`Ticket::timed_out`]. This module only defines the ticket values and
//! their ordering.
//!
//! # Ordering
//!
//! 1. Level, ascending (lower is stronger).
//! 2. [`TicketType::id`], ascending.
//! 3. The type's key comparator.

mod any_ticket;
mod chunk_ticket;
mod ticket_type;
pub mod vanilla;

pub use any_ticket::AnyTicket;
pub use chunk_ticket::{Ticket, TicketSchedule};
pub use ticket_type::{KeyComparator, TicketType};
