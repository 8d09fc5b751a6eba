//! The Event record.

use crate::config::DEFAULT_CANCELLATION_MARKER;
use crate::states::ticket::TicketState;
use crate::types::{EventDetails, EventStatus};
use serde::{Deserialize, Serialize};
use ticket_ledger_core::{
    ContractState, LinearId, LinearPointer, LinearState, Party, Schedulable, ScheduledActivity,
    StatusState,
};

/// One version of an event.
///
/// Versions are immutable. A transition consumes the current version and produces the
/// next one through the `with_*` and lifecycle methods, which keep the linear id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventState {
    linear_id: LinearId,
    details: Option<EventDetails>,
    tickets: Vec<LinearPointer<TicketState>>,
    agency: Party,
    status: Option<EventStatus>,
}

impl EventState {
    /// Creates the first version of a new, upcoming event
    #[must_use]
    pub fn new(
        details: EventDetails,
        tickets: Vec<LinearPointer<TicketState>>,
        agency: Party,
    ) -> Self {
        Self::from_parts(
            LinearId::new(),
            Some(details),
            tickets,
            agency,
            Some(EventStatus::Upcoming),
        )
    }

    /// Reassembles a version from its parts, e.g. when loaded from the ledger
    #[must_use]
    pub const fn from_parts(
        linear_id: LinearId,
        details: Option<EventDetails>,
        tickets: Vec<LinearPointer<TicketState>>,
        agency: Party,
        status: Option<EventStatus>,
    ) -> Self {
        Self {
            linear_id,
            details,
            tickets,
            agency,
            status,
        }
    }

    /// Event metadata, absent only on malformed versions
    #[must_use]
    pub const fn details(&self) -> Option<&EventDetails> {
        self.details.as_ref()
    }

    /// Tickets issued against this event, by reference
    #[must_use]
    pub fn tickets(&self) -> &[LinearPointer<TicketState>] {
        &self.tickets
    }

    /// Owning agency
    #[must_use]
    pub const fn agency(&self) -> &Party {
        &self.agency
    }

    /// Next version with a different status
    #[must_use]
    pub fn with_status(&self, status: Option<EventStatus>) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Next version with different details
    #[must_use]
    pub fn with_details(&self, details: Option<EventDetails>) -> Self {
        Self {
            details,
            ..self.clone()
        }
    }

    /// Next version with a different ticket list
    #[must_use]
    pub fn with_tickets(&self, tickets: Vec<LinearPointer<TicketState>>) -> Self {
        Self {
            tickets,
            ..self.clone()
        }
    }

    /// Next version owned by a different agency
    #[must_use]
    pub fn with_agency(&self, agency: Party) -> Self {
        Self {
            agency,
            ..self.clone()
        }
    }

    /// A version of this event under another logical identity
    #[must_use]
    pub fn with_linear_id(&self, linear_id: LinearId) -> Self {
        Self {
            linear_id,
            ..self.clone()
        }
    }

    /// Next version once the event has started
    #[must_use]
    pub fn start(&self) -> Self {
        self.with_status(Some(EventStatus::Ongoing))
    }

    /// Next version once the event has ended; tickets are released
    #[must_use]
    pub fn end(&self) -> Self {
        Self {
            status: Some(EventStatus::Ended),
            tickets: Vec::new(),
            ..self.clone()
        }
    }

    /// Next version once the event is called off; tickets are released and the
    /// description records why
    #[must_use]
    pub fn cancel(&self, reason: &str) -> Self {
        let details = self.details.as_ref().map(|details| EventDetails {
            description: format!("{DEFAULT_CANCELLATION_MARKER}{reason}"),
            ..details.clone()
        });
        Self {
            details,
            status: Some(EventStatus::Cancelled),
            tickets: Vec::new(),
            ..self.clone()
        }
    }
}

impl ContractState for EventState {
    fn participants(&self) -> Vec<&Party> {
        vec![&self.agency]
    }
}

impl LinearState for EventState {
    fn linear_id(&self) -> LinearId {
        self.linear_id
    }
}

impl StatusState for EventState {
    type Status = EventStatus;

    fn status(&self) -> Option<EventStatus> {
        self.status
    }
}

/// Follow-up an event asks the scheduler to propose
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventActivity {
    /// Move the event from UPCOMING to ONGOING
    Start(LinearId),
    /// Move the event from ONGOING to ENDED
    End(LinearId),
}

impl Schedulable for EventState {
    type Action = EventActivity;

    fn next_scheduled_activity(&self) -> Option<ScheduledActivity<EventActivity>> {
        let details = self.details.as_ref()?;
        match self.status? {
            EventStatus::Upcoming => Some(ScheduledActivity::new(
                EventActivity::Start(self.linear_id),
                details.start_time,
            )),
            EventStatus::Ongoing => Some(ScheduledActivity::new(
                EventActivity::End(self.linear_id),
                details.end_time,
            )),
            EventStatus::Cancelled | EventStatus::Ended => None,
        }
    }
}
