//! proptest strategies for ledger records

use crate::fixtures::{agency, event_details, issuer, ticket_pointers};
use proptest::prelude::*;
use ticket_ledger_contracts::{
    EventState, EventStatus, Money, TicketCategory, TicketState, TicketStatus,
};
use ticket_ledger_core::{LinearId, LinearPointer, Party, PublicKey};

/// Venue capacities, never zero
pub fn arb_capacity() -> impl Strategy<Value = u32> {
    1u32..=500
}

/// Ticket prices in cents, never zero
pub fn arb_price() -> impl Strategy<Value = Money> {
    (1u64..=1_000_000).prop_map(Money::from_cents)
}

/// Any ticket category
pub fn arb_category() -> impl Strategy<Value = TicketCategory> {
    prop_oneof![
        Just(TicketCategory::Silver),
        Just(TicketCategory::Gold),
        Just(TicketCategory::Platinum),
    ]
}

/// Any event status
pub fn arb_event_status() -> impl Strategy<Value = EventStatus> {
    prop_oneof![
        Just(EventStatus::Upcoming),
        Just(EventStatus::Ongoing),
        Just(EventStatus::Cancelled),
        Just(EventStatus::Ended),
    ]
}

/// Any ticket status
pub fn arb_ticket_status() -> impl Strategy<Value = TicketStatus> {
    prop_oneof![
        Just(TicketStatus::New),
        Just(TicketStatus::Booked),
        Just(TicketStatus::Redeemed),
    ]
}

/// Parties with random names and keys
pub fn arb_party() -> impl Strategy<Value = Party> {
    ("[A-Z][a-z]{2,10}", any::<[u8; 32]>())
        .prop_map(|(name, key)| Party::new(name, PublicKey::from_bytes(key)))
}

/// Upcoming events owned by the fixture agency, with `capacity` and `tickets` drawn
/// independently so both over- and under-booked events occur
pub fn arb_upcoming_event() -> impl Strategy<Value = EventState> {
    (arb_capacity(), 0usize..=600).prop_map(|(capacity, tickets)| {
        EventState::new(event_details(capacity), ticket_pointers(tickets), agency())
    })
}

/// New tickets issued by the fixture issuer
pub fn arb_new_ticket() -> impl Strategy<Value = TicketState> {
    (arb_category(), arb_price()).prop_map(|(category, price)| {
        TicketState::new(
            LinearPointer::new(LinearId::new()),
            category,
            price,
            issuer(),
        )
    })
}
