//! Ticket Rule Set.
//!
//! Guards every transition of a [`TicketState`]: minting against an upcoming event,
//! booking, cancelling a booking, redemption at an ongoing event and retirement.

use crate::config::ContractConfig;
use crate::ledger::{Command, LedgerState};
use crate::states::{EventState, TicketState};
use crate::types::{EventStatus, TicketStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use ticket_ledger_core::error::Result;
use ticket_ledger_core::{
    Contract, LinearState, StatusState, TransactionContext, require_none, require_signer,
    require_single, require_that,
};

type Tx = TransactionContext<LedgerState, Command>;

const COMMAND_FAMILY: &str = "TicketContract";

/// Intent of a transaction touching a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCommand {
    /// Mint a ticket against an upcoming event
    Create,
    /// Assign the ticket to a new holder
    Book,
    /// Release a booking
    Cancel,
    /// Use the ticket at an ongoing event
    Redeem,
    /// Retire the ticket's lineage
    Complete,
}

impl fmt::Display for TicketCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "Create"),
            Self::Book => write!(f, "Book"),
            Self::Cancel => write!(f, "Cancel"),
            Self::Redeem => write!(f, "Redeem"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Rule set for Ticket records
#[derive(Clone, Debug)]
pub struct TicketContract {
    id: String,
}

impl TicketContract {
    /// Creates the contract from configuration
    #[must_use]
    pub fn new(config: &ContractConfig) -> Self {
        Self {
            id: config.ticket_contract_id.clone(),
        }
    }
}

impl Default for TicketContract {
    fn default() -> Self {
        Self::new(&ContractConfig::default())
    }
}

/// Returns `true` if any reference-only event is currently in `status`
fn references_event_in(tx: &Tx, status: EventStatus) -> bool {
    tx.references_of_type::<EventState>()
        .iter()
        .any(|event| event.has_status(status))
}

impl Contract<LedgerState, Command> for TicketContract {
    fn id(&self) -> &str {
        &self.id
    }

    fn applies_to(&self, tx: &Tx) -> bool {
        tx.involves::<TicketState>() || tx.has_command_of_type::<TicketCommand>()
    }

    fn verify_universal(&self, tx: &Tx) -> Result<()> {
        for state in tx.states_of_type::<TicketState>() {
            require_that! {
                "Event on the ticket must exist." => state.event().is_resolvable(),
                "Ticket price must be a non zero positive value." => !state.price().is_zero(),
            }?;
        }
        Ok(())
    }

    fn verify_status(&self, tx: &Tx) -> Result<()> {
        for state in tx.states_of_type::<TicketState>() {
            match state.status() {
                Some(TicketStatus::New) => require_that! {
                    "Holder must be same as issuer." => state.holder() == state.issuer(),
                }?,
                Some(TicketStatus::Booked) => require_that! {
                    "Holder must not be same as issuer." => state.holder() != state.issuer(),
                }?,
                Some(TicketStatus::Redeemed) | None => {}
            }
        }
        Ok(())
    }

    fn verify_linear_id(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<TicketCommand>(COMMAND_FAMILY)?;
        let inputs = tx.inputs_of_type::<TicketState>();
        let outputs = tx.outputs_of_type::<TicketState>();

        require_that! {
            "When using LinearStates there should be a maximum of one Primary input state." =>
                inputs.len() <= 1,
            "When using LinearStates there should be a maximum of one Primary output state." =>
                outputs.len() <= 1,
        }?;

        match command {
            TicketCommand::Book | TicketCommand::Redeem => {
                let input_id = inputs.first().map(|state| state.linear_id());
                let output_id = outputs.first().map(|state| state.linear_id());
                require_that! {
                    format!("When the Command is {command} the LinearID must not change.") =>
                        input_id == output_id,
                }
            }
            TicketCommand::Create | TicketCommand::Cancel | TicketCommand::Complete => Ok(()),
        }
    }

    fn verify_command(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<TicketCommand>(COMMAND_FAMILY)?;
        let inputs = tx.inputs_of_type::<TicketState>();
        let outputs = tx.outputs_of_type::<TicketState>();

        match command {
            TicketCommand::Create => require_that! {
                "Event on the ticket must be an upcoming event only." =>
                    references_event_in(tx, EventStatus::Upcoming),
            },
            TicketCommand::Book | TicketCommand::Cancel => {
                let input = require_single("One Input Expected", &inputs)?;
                let output = require_single("One Output Expected", &outputs)?;
                require_that! {
                    "Event, price, category and issuer on the ticket must be same." =>
                        output.same_terms_as(input),
                    "Holder must be updated." => output.holder() != input.holder(),
                }
            }
            TicketCommand::Redeem => {
                let input = require_single("One Input Expected", &inputs)?;
                let output = require_single("One Output Expected", &outputs)?;
                require_that! {
                    "Event, price, category, holder and issuer on the ticket must be same." =>
                        output.same_terms_as(input) && output.holder() == input.holder(),
                    "Event on the ticket must be an ongoing event only." =>
                        references_event_in(tx, EventStatus::Ongoing),
                }
            }
            TicketCommand::Complete => {
                require_single("One Input Expected", &inputs)?;
                require_none("No Output Expected", &outputs)
            }
        }
    }

    fn verify_signers(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<TicketCommand>(COMMAND_FAMILY)?;
        let input = tx.inputs_of_type::<TicketState>().first().copied();
        let output = tx.outputs_of_type::<TicketState>().first().copied();

        match command {
            TicketCommand::Create => {
                require_signer(tx, command, "output issuer", output.map(TicketState::issuer))
            }
            TicketCommand::Book | TicketCommand::Cancel => {
                require_signer(tx, command, "output holder", output.map(TicketState::holder))
            }
            TicketCommand::Redeem => {
                require_signer(tx, command, "output issuer", output.map(TicketState::issuer))?;
                require_signer(tx, command, "output holder", output.map(TicketState::holder))
            }
            TicketCommand::Complete => {
                require_signer(tx, command, "input issuer", input.map(TicketState::issuer))
            }
        }
    }
}
