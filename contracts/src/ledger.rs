//! The ledger's closed sets of records and commands, and the validation entry point.

use crate::config::ContractConfig;
use crate::rules::event::{EventCommand, EventContract};
use crate::rules::ticket::{TicketCommand, TicketContract};
use crate::states::{EventState, TicketState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use ticket_ledger_core::{OfType, Rejections, TransactionContext, Verifier};

/// Any record that can appear in a transaction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "state")]
pub enum LedgerState {
    /// An Event record
    Event(EventState),
    /// A Ticket record
    Ticket(TicketState),
}

impl From<EventState> for LedgerState {
    fn from(state: EventState) -> Self {
        Self::Event(state)
    }
}

impl From<TicketState> for LedgerState {
    fn from(state: TicketState) -> Self {
        Self::Ticket(state)
    }
}

impl OfType<EventState> for LedgerState {
    fn of_type(&self) -> Option<&EventState> {
        match self {
            Self::Event(state) => Some(state),
            Self::Ticket(_) => None,
        }
    }
}

impl OfType<TicketState> for LedgerState {
    fn of_type(&self) -> Option<&TicketState> {
        match self {
            Self::Ticket(state) => Some(state),
            Self::Event(_) => None,
        }
    }
}

/// Any command a transaction can declare
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "contract", content = "command")]
pub enum Command {
    /// A command for the Event contract
    Event(EventCommand),
    /// A command for the Ticket contract
    Ticket(TicketCommand),
}

impl From<EventCommand> for Command {
    fn from(command: EventCommand) -> Self {
        Self::Event(command)
    }
}

impl From<TicketCommand> for Command {
    fn from(command: TicketCommand) -> Self {
        Self::Ticket(command)
    }
}

impl OfType<EventCommand> for Command {
    fn of_type(&self) -> Option<&EventCommand> {
        match self {
            Self::Event(command) => Some(command),
            Self::Ticket(_) => None,
        }
    }
}

impl OfType<TicketCommand> for Command {
    fn of_type(&self) -> Option<&TicketCommand> {
        match self {
            Self::Ticket(command) => Some(command),
            Self::Event(_) => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(command) => write!(f, "Event.{command}"),
            Self::Ticket(command) => write!(f, "Ticket.{command}"),
        }
    }
}

/// A transaction over Event and Ticket records
pub type LedgerTransaction = TransactionContext<LedgerState, Command>;

/// Builds a verifier running the Event contract, then the Ticket contract
#[must_use]
pub fn verifier(config: &ContractConfig) -> Verifier<LedgerState, Command> {
    Verifier::new()
        .with_contract(EventContract::new(config))
        .with_contract(TicketContract::new(config))
}

static DEFAULT_VERIFIER: LazyLock<Verifier<LedgerState, Command>> =
    LazyLock::new(|| verifier(&ContractConfig::default()));

/// Decides whether `tx` may be committed, using the default configuration.
///
/// # Errors
///
/// Returns the ordered rejections if any contract refuses the transaction.
pub fn validate(tx: &LedgerTransaction) -> Result<(), Rejections> {
    DEFAULT_VERIFIER.verify(tx)
}
