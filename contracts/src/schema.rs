//! Flat row shapes for the external query store.
//!
//! Rows are derived from a record version and never read back by verification.

use crate::states::{EventState, TicketState};
use crate::types::{EventStatus, Money, TicketCategory, TicketStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticket_ledger_core::{LinearId, LinearState, QueryableState, StatusState};

/// Table holding event rows
pub const EVENT_TABLE: &str = "event_states";

/// Table holding ticket rows
pub const TICKET_TABLE: &str = "ticket_states";

/// One event version as stored in [`EVENT_TABLE`].
///
/// Detail columns are empty for versions without details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    /// Logical identity
    pub linear_id: LinearId,
    /// Event name
    pub name: Option<String>,
    /// Venue name
    pub venue: Option<String>,
    /// Venue capacity
    pub capacity: Option<u32>,
    /// City
    pub city: Option<String>,
    /// Start of the event
    pub start_time: Option<DateTime<Utc>>,
    /// End of the event
    pub end_time: Option<DateTime<Utc>>,
    /// Lifecycle status
    pub status: Option<EventStatus>,
    /// Logical identities of the referenced tickets, in order
    pub tickets: Vec<LinearId>,
    /// Name of the owning agency
    pub agency: String,
}

/// One ticket version as stored in [`TICKET_TABLE`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRow {
    /// Logical identity
    pub linear_id: LinearId,
    /// Logical identity of the event the ticket admits to
    pub event_id: LinearId,
    /// Ticket category
    pub category: TicketCategory,
    /// Price
    pub price: Money,
    /// Name of the issuer
    pub issuer: String,
    /// Name of the current holder
    pub holder: String,
    /// Lifecycle status
    pub status: Option<TicketStatus>,
}

impl QueryableState for EventState {
    type Row = EventRow;

    fn to_row(&self) -> EventRow {
        let details = self.details();
        EventRow {
            linear_id: self.linear_id(),
            name: details.map(|d| d.name.clone()),
            venue: details.map(|d| d.venue.clone()),
            capacity: details.map(|d| d.capacity.value()),
            city: details.map(|d| d.city.clone()),
            start_time: details.map(|d| d.start_time),
            end_time: details.map(|d| d.end_time),
            status: self.status(),
            tickets: self.tickets().iter().map(|ticket| ticket.pointer()).collect(),
            agency: self.agency().name().to_string(),
        }
    }
}

impl QueryableState for TicketState {
    type Row = TicketRow;

    fn to_row(&self) -> TicketRow {
        TicketRow {
            linear_id: self.linear_id(),
            event_id: self.event().pointer(),
            category: self.category(),
            price: self.price(),
            issuer: self.issuer().name().to_string(),
            holder: self.holder().name().to_string(),
            status: self.status(),
        }
    }
}
