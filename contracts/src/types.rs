//! Value objects and status enums for Event and Ticket records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ticket_ledger_core::Status;

// ============================================================================
// Value Objects
// ============================================================================

/// Venue capacity (number of attendees)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Capacity(pub u32);

impl Capacity {
    /// Creates a new `Capacity`
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the capacity value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Checks if the capacity is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `count` attendees fit
    #[must_use]
    pub fn admits(&self, count: usize) -> bool {
        u32::try_from(count).is_ok_and(|count| count <= self.0)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents money in the smallest currency unit (cents)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Descriptive metadata of an event.
///
/// Compared field by field; two versions of an event have "unchanged details" exactly
/// when their `EventDetails` are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name
    pub name: String,
    /// Kind of event (concert, conference, ...)
    pub event_type: String,
    /// Venue name
    pub venue: String,
    /// Venue capacity
    pub capacity: Capacity,
    /// City the venue is in
    pub city: String,
    /// When the event starts
    pub start_time: DateTime<Utc>,
    /// When the event ends
    pub end_time: DateTime<Utc>,
    /// Free-form description
    pub description: String,
}

impl EventDetails {
    /// Returns `true` if everything except the description matches `other`
    #[must_use]
    pub fn same_apart_from_description(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.venue == other.venue
            && self.city == other.city
            && self.name == other.name
            && self.event_type == other.event_type
            && self.start_time == other.start_time
            && self.end_time == other.end_time
    }
}

/// Ticket category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    /// Entry tier
    Silver,
    /// Middle tier
    Gold,
    /// Top tier
    Platinum,
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silver => write!(f, "SILVER"),
            Self::Gold => write!(f, "GOLD"),
            Self::Platinum => write!(f, "PLATINUM"),
        }
    }
}

// ============================================================================
// Statuses
// ============================================================================

/// Lifecycle of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Scheduled, not started yet
    Upcoming,
    /// Running now
    Ongoing,
    /// Called off before it ended
    Cancelled,
    /// Finished
    Ended,
}

impl EventStatus {
    /// Returns `true` for statuses after which no tickets may remain attached
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Ended)
    }
}

impl Status for EventStatus {}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "UPCOMING"),
            Self::Ongoing => write!(f, "ONGOING"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Ended => write!(f, "ENDED"),
        }
    }
}

/// Lifecycle of a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Issued, held by its issuer
    New,
    /// Assigned to someone other than the issuer
    Booked,
    /// Used at the event
    Redeemed,
}

impl Status for TicketStatus {}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Booked => write!(f, "BOOKED"),
            Self::Redeemed => write!(f, "REDEEMED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_admits() {
        let capacity = Capacity::new(2);
        assert!(capacity.admits(0));
        assert!(capacity.admits(2));
        assert!(!capacity.admits(3));
        assert!(Capacity::new(0).is_zero());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(5_005).to_string(), "$50.05");
        assert!(Money::from_cents(0).is_zero());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(EventStatus::Cancelled.is_terminal());
        assert!(EventStatus::Ended.is_terminal());
        assert!(!EventStatus::Upcoming.is_terminal());
        assert!(!EventStatus::Ongoing.is_terminal());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&EventStatus::Upcoming).unwrap(), r#""UPCOMING""#);
        assert_eq!(serde_json::to_string(&TicketStatus::Booked).unwrap(), r#""BOOKED""#);
        assert_eq!(
            serde_json::to_string(&TicketCategory::Platinum).unwrap(),
            r#""PLATINUM""#
        );
    }
}
