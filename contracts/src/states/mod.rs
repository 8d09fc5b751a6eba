//! Ledger records for the ticketing system.

pub mod event;
pub mod ticket;

pub use event::{EventActivity, EventState};
pub use ticket::TicketState;
