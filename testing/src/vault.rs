//! In-memory ledger vault for tests
//!
//! Holds the live version of every record, keyed by linear id, so tests can resolve
//! pointers and feed resolved snapshots back into transactions as references.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use ticket_ledger_contracts::{EventState, LedgerState, LedgerTransaction, TicketState};
use ticket_ledger_core::{LinearId, LinearState, StateResolver};

/// In-memory record store.
///
/// # Example
///
/// ```
/// use ticket_ledger_testing::InMemoryVault;
/// use ticket_ledger_testing::fixtures::upcoming_event;
/// use ticket_ledger_core::{LinearState, StateResolver};
/// use ticket_ledger_contracts::EventState;
///
/// let vault = InMemoryVault::new();
/// let event = upcoming_event(2);
/// vault.record(event.clone());
///
/// let resolved: Option<EventState> = vault.resolve(event.linear_id());
/// assert_eq!(resolved, Some(event));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryVault {
    states: Arc<RwLock<HashMap<LinearId, LedgerState>>>,
}

fn linear_id_of(state: &LedgerState) -> LinearId {
    match state {
        LedgerState::Event(event) => event.linear_id(),
        LedgerState::Ticket(ticket) => ticket.linear_id(),
    }
}

impl InMemoryVault {
    /// Create an empty vault
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `state` as the live version of its record
    pub fn record(&self, state: impl Into<LedgerState>) {
        let state = state.into();
        self.states.write().unwrap().insert(linear_id_of(&state), state);
    }

    /// Apply an accepted transaction: inputs are consumed, outputs become live
    pub fn commit(&self, tx: &LedgerTransaction) {
        let mut states = self.states.write().unwrap();
        for input in tx.inputs() {
            states.remove(&linear_id_of(input));
        }
        for output in tx.outputs() {
            states.insert(linear_id_of(output), output.clone());
        }
    }

    /// Number of live records
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.read().unwrap().len()
    }

    /// Check if the vault holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.read().unwrap().is_empty()
    }

    /// Check if a record with `id` is live
    #[must_use]
    pub fn contains(&self, id: LinearId) -> bool {
        self.states.read().unwrap().contains_key(&id)
    }
}

impl StateResolver<EventState> for InMemoryVault {
    fn resolve(&self, id: LinearId) -> Option<EventState> {
        match self.states.read().unwrap().get(&id) {
            Some(LedgerState::Event(event)) => Some(event.clone()),
            _ => None,
        }
    }
}

impl StateResolver<TicketState> for InMemoryVault {
    fn resolve(&self, id: LinearId) -> Option<TicketState> {
        match self.states.read().unwrap().get(&id) {
            Some(LedgerState::Ticket(ticket)) => Some(ticket.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{issuer, ticket_for, upcoming_event};
    use ticket_ledger_contracts::TicketCommand;

    #[test]
    fn test_resolve_checks_record_type() {
        let vault = InMemoryVault::new();
        let event = upcoming_event(1);
        vault.record(event.clone());

        let as_ticket: Option<TicketState> = vault.resolve(event.linear_id());
        assert_eq!(as_ticket, None);
        assert_eq!(vault.len(), 1);
    }

    #[test]
    fn test_commit_replaces_consumed_versions() {
        let vault = InMemoryVault::new();
        let event = upcoming_event(1);
        let ticket = ticket_for(&event);
        vault.record(ticket.clone());

        let tx = LedgerTransaction::builder()
            .input(ticket.clone())
            .command(TicketCommand::Complete)
            .signer(*issuer().owning_key())
            .build();
        vault.commit(&tx);

        assert!(!vault.contains(ticket.linear_id()));
        assert!(vault.is_empty());
    }

    #[test]
    fn test_pointer_resolves_through_vault() {
        let vault = InMemoryVault::new();
        let event = upcoming_event(1);
        let ticket = ticket_for(&event);
        vault.record(event.clone());

        assert_eq!(ticket.event().resolve(&vault), Some(event));
    }
}
