//! Ready-made parties and records.
//!
//! Every party has a fixed key, so fixtures built in different tests compare equal.

use crate::mocks::test_time;
use chrono::Duration;
use ticket_ledger_contracts::{
    Capacity, EventDetails, EventState, Money, TicketCategory, TicketState,
};
use ticket_ledger_core::{LinearId, LinearPointer, LinearState, Party, PublicKey};

/// The agency owning fixture events
#[must_use]
pub fn agency() -> Party {
    Party::new("Agency", PublicKey::from_bytes([1; 32]))
}

/// The issuer of fixture tickets
#[must_use]
pub fn issuer() -> Party {
    Party::new("Issuer", PublicKey::from_bytes([2; 32]))
}

/// A party that books fixture tickets
#[must_use]
pub fn customer() -> Party {
    Party::new("Customer", PublicKey::from_bytes([3; 32]))
}

/// A party with no role in any fixture record
#[must_use]
pub fn stranger() -> Party {
    Party::new("Stranger", PublicKey::from_bytes([9; 32]))
}

/// One-hour event details starting at [`test_time`]
#[must_use]
pub fn event_details(capacity: u32) -> EventDetails {
    let start_time = test_time();
    EventDetails {
        name: "Harbour Lights".to_string(),
        event_type: "Festival".to_string(),
        venue: "Pier 4".to_string(),
        capacity: Capacity::new(capacity),
        city: "Porto".to_string(),
        start_time,
        end_time: start_time + Duration::hours(1),
        description: "Three stages by the water".to_string(),
    }
}

/// Pointers to `count` fresh ticket identities
#[must_use]
pub fn ticket_pointers(count: usize) -> Vec<LinearPointer<TicketState>> {
    (0..count).map(|_| LinearPointer::new(LinearId::new())).collect()
}

/// An upcoming event for 100 attendees owned by [`agency`]
#[must_use]
pub fn upcoming_event(tickets: usize) -> EventState {
    EventState::new(event_details(100), ticket_pointers(tickets), agency())
}

/// A new GOLD ticket for `event`, issued by [`issuer`]
#[must_use]
pub fn ticket_for(event: &EventState) -> TicketState {
    TicketState::new(
        LinearPointer::new(event.linear_id()),
        TicketCategory::Gold,
        Money::from_cents(4_500),
        issuer(),
    )
}
