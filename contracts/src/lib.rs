//! # Ticket Ledger Contracts
//!
//! Event and Ticket records, and the rule sets deciding which transitions of them may be
//! committed to the ledger.
//!
//! ```
//! use ticket_ledger_contracts::{EventCommand, LedgerTransaction, validate};
//!
//! let tx = LedgerTransaction::builder().command(EventCommand::Create).build();
//! let rejections = validate(&tx).unwrap_err();
//! assert_eq!(rejections.first().message(), "Only one output should be created");
//! ```

pub mod config;
pub mod ledger;
pub mod rules;
pub mod schema;
pub mod states;
pub mod types;

pub use config::{ConfigError, ContractConfig};
pub use ledger::{Command, LedgerState, LedgerTransaction, validate, verifier};
pub use rules::event::{EventCommand, EventContract};
pub use rules::ticket::{TicketCommand, TicketContract};
pub use schema::{EventRow, TicketRow};
pub use states::{EventActivity, EventState, TicketState};
pub use types::{Capacity, EventDetails, EventStatus, Money, TicketCategory, TicketStatus};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use crate::states::{EventState, TicketState};
    use crate::types::{Capacity, EventDetails, Money, TicketCategory};
    use chrono::{DateTime, Duration};
    use ticket_ledger_core::{LinearId, LinearPointer, Party, PublicKey};

    pub fn agency() -> Party {
        Party::new("Agency", PublicKey::from_bytes([1; 32]))
    }

    pub fn issuer() -> Party {
        Party::new("Issuer", PublicKey::from_bytes([2; 32]))
    }

    pub fn customer() -> Party {
        Party::new("Customer", PublicKey::from_bytes([3; 32]))
    }

    pub fn stranger() -> Party {
        Party::new("Stranger", PublicKey::from_bytes([9; 32]))
    }

    pub fn details(capacity: u32) -> EventDetails {
        let start_time = DateTime::from_timestamp(1_900_000_000, 0).unwrap();
        EventDetails {
            name: "Summer Nights".to_string(),
            event_type: "Concert".to_string(),
            venue: "Riverside Arena".to_string(),
            capacity: Capacity::new(capacity),
            city: "Lisbon".to_string(),
            start_time,
            end_time: start_time + Duration::hours(1),
            description: "Open air".to_string(),
        }
    }

    pub fn ticket_refs(count: usize) -> Vec<LinearPointer<TicketState>> {
        (0..count).map(|_| LinearPointer::new(LinearId::new())).collect()
    }

    /// An upcoming event at a 100 seat venue referencing `tickets` tickets
    pub fn event(tickets: usize) -> EventState {
        EventState::new(details(100), ticket_refs(tickets), agency())
    }

    pub fn ticket() -> TicketState {
        TicketState::new(
            LinearPointer::new(LinearId::new()),
            TicketCategory::Gold,
            Money::from_cents(7_500),
            issuer(),
        )
    }
}
