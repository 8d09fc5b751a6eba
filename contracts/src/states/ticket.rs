//! The Ticket record.

use crate::states::event::EventState;
use crate::types::{Money, TicketCategory, TicketStatus};
use serde::{Deserialize, Serialize};
use ticket_ledger_core::{ContractState, LinearId, LinearPointer, LinearState, Party, StatusState};

/// One version of a ticket issued against an event.
///
/// A NEW ticket is held by its issuer; booking hands it to another party, cancelling a
/// booking hands it back, and redeeming marks it used without moving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketState {
    linear_id: LinearId,
    event: LinearPointer<EventState>,
    category: TicketCategory,
    price: Money,
    issuer: Party,
    holder: Party,
    status: Option<TicketStatus>,
}

impl TicketState {
    /// Issues a new ticket, held by its issuer
    #[must_use]
    pub fn new(
        event: LinearPointer<EventState>,
        category: TicketCategory,
        price: Money,
        issuer: Party,
    ) -> Self {
        Self::from_parts(
            LinearId::new(),
            event,
            category,
            price,
            issuer.clone(),
            issuer,
            Some(TicketStatus::New),
        )
    }

    /// Reassembles a version from its parts, e.g. when loaded from the ledger
    #[must_use]
    pub const fn from_parts(
        linear_id: LinearId,
        event: LinearPointer<EventState>,
        category: TicketCategory,
        price: Money,
        issuer: Party,
        holder: Party,
        status: Option<TicketStatus>,
    ) -> Self {
        Self {
            linear_id,
            event,
            category,
            price,
            issuer,
            holder,
            status,
        }
    }

    /// The event this ticket admits to
    #[must_use]
    pub const fn event(&self) -> LinearPointer<EventState> {
        self.event
    }

    /// Ticket tier
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Face value
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Party that minted the ticket
    #[must_use]
    pub const fn issuer(&self) -> &Party {
        &self.issuer
    }

    /// Party currently holding the ticket
    #[must_use]
    pub const fn holder(&self) -> &Party {
        &self.holder
    }

    /// Returns `true` if event, price, category and issuer all match `other`
    #[must_use]
    pub fn same_terms_as(&self, other: &Self) -> bool {
        self.event == other.event
            && self.price == other.price
            && self.category == other.category
            && self.issuer == other.issuer
    }

    /// Next version with a different status
    #[must_use]
    pub fn with_status(&self, status: Option<TicketStatus>) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Next version held by another party, status unchanged
    #[must_use]
    pub fn with_holder(&self, holder: Party) -> Self {
        Self {
            holder,
            ..self.clone()
        }
    }

    /// Next version at another price
    #[must_use]
    pub fn with_price(&self, price: Money) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Next version in another category
    #[must_use]
    pub fn with_category(&self, category: TicketCategory) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    /// Next version pointing at another event
    #[must_use]
    pub fn with_event(&self, event: LinearPointer<EventState>) -> Self {
        Self {
            event,
            ..self.clone()
        }
    }

    /// A version of this ticket under another logical identity
    #[must_use]
    pub fn with_linear_id(&self, linear_id: LinearId) -> Self {
        Self {
            linear_id,
            ..self.clone()
        }
    }

    /// Next version booked by `holder`
    #[must_use]
    pub fn book(&self, holder: Party) -> Self {
        Self {
            holder,
            status: Some(TicketStatus::Booked),
            ..self.clone()
        }
    }

    /// Next version with the booking released back to the issuer
    #[must_use]
    pub fn cancel(&self) -> Self {
        Self {
            holder: self.issuer.clone(),
            status: Some(TicketStatus::New),
            ..self.clone()
        }
    }

    /// Next version marked as used
    #[must_use]
    pub fn redeem(&self) -> Self {
        self.with_status(Some(TicketStatus::Redeemed))
    }
}

impl ContractState for TicketState {
    fn participants(&self) -> Vec<&Party> {
        vec![&self.issuer, &self.holder]
    }
}

impl LinearState for TicketState {
    fn linear_id(&self) -> LinearId {
        self.linear_id
    }
}

impl StatusState for TicketState {
    type Status = TicketStatus;

    fn status(&self) -> Option<TicketStatus> {
        self.status
    }
}
