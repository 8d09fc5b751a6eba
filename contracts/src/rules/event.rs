//! Event Rule Set.
//!
//! Guards every transition of an [`EventState`]: creation with an initial ticket list,
//! start, cancellation, end and final completion. Checks run in five phases
//! (universal, status, linear id, command, signers) and the first failure rejects.

use crate::config::ContractConfig;
use crate::ledger::{Command, LedgerState};
use crate::states::EventState;
use crate::types::EventDetails;
use serde::{Deserialize, Serialize};
use std::fmt;
use ticket_ledger_core::error::Result;
use ticket_ledger_core::{
    Contract, LinearState, Rejection, StatusState, TransactionContext, require_none,
    require_signer, require_single, require_that,
};

type Tx = TransactionContext<LedgerState, Command>;

const COMMAND_FAMILY: &str = "EventContract";

/// Intent of a transaction touching an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCommand {
    /// Create a new event with its initial ticket list
    Create,
    /// UPCOMING → ONGOING
    Start,
    /// Call the event off
    Cancel,
    /// ONGOING → ENDED
    End,
    /// Retire the event's lineage
    Complete,
}

impl fmt::Display for EventCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "Create"),
            Self::Start => write!(f, "Start"),
            Self::Cancel => write!(f, "Cancel"),
            Self::End => write!(f, "End"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Rule set for Event records
#[derive(Clone, Debug)]
pub struct EventContract {
    id: String,
    cancellation_marker: String,
}

impl EventContract {
    /// Creates the contract from configuration
    #[must_use]
    pub fn new(config: &ContractConfig) -> Self {
        Self {
            id: config.event_contract_id.clone(),
            cancellation_marker: config.cancellation_marker.clone(),
        }
    }
}

impl Default for EventContract {
    fn default() -> Self {
        Self::new(&ContractConfig::default())
    }
}

/// Details of a version that already passed the universal phase
fn details_of(state: &EventState) -> Result<&EventDetails> {
    state
        .details()
        .ok_or_else(|| Rejection::requirement("Event details must not be empty or null."))
}

impl Contract<LedgerState, Command> for EventContract {
    fn id(&self) -> &str {
        &self.id
    }

    fn applies_to(&self, tx: &Tx) -> bool {
        tx.involves::<EventState>() || tx.has_command_of_type::<EventCommand>()
    }

    fn verify_universal(&self, tx: &Tx) -> Result<()> {
        for state in tx.states_of_type::<EventState>() {
            let details = details_of(state)?;
            require_that! {
                "Event capacity must be greater than zero." => !details.capacity.is_zero(),
                "Event end time must be greater than event start time." =>
                    details.start_time < details.end_time,
            }?;
        }
        Ok(())
    }

    fn verify_status(&self, tx: &Tx) -> Result<()> {
        for state in tx.states_of_type::<EventState>() {
            if state.status().is_some_and(|status| status.is_terminal()) {
                require_that! {
                    "List of event tickets must be empty." => state.tickets().is_empty(),
                }?;
            }
        }
        Ok(())
    }

    fn verify_linear_id(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<EventCommand>(COMMAND_FAMILY)?;
        let inputs = tx.inputs_of_type::<EventState>();
        let outputs = tx.outputs_of_type::<EventState>();

        require_that! {
            "When using LinearStates there should be a maximum of one Primary input state." =>
                inputs.len() <= 1,
            "When using LinearStates there should be a maximum of one Primary output state." =>
                outputs.len() <= 1,
        }?;

        match command {
            EventCommand::Start | EventCommand::Cancel | EventCommand::End => {
                let input_id = inputs.first().map(|state| state.linear_id());
                let output_id = outputs.first().map(|state| state.linear_id());
                require_that! {
                    format!("When the Command is {command} the LinearID must not change.") =>
                        input_id == output_id,
                }
            }
            EventCommand::Create | EventCommand::Complete => Ok(()),
        }
    }

    fn verify_command(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<EventCommand>(COMMAND_FAMILY)?;
        let inputs = tx.inputs_of_type::<EventState>();
        let outputs = tx.outputs_of_type::<EventState>();

        match command {
            EventCommand::Create => {
                require_none("No inputs should be consumed while creating an Event", &inputs)?;
                let output = require_single("Only one output should be created", &outputs)?;
                let capacity = details_of(output)?.capacity;
                let tickets = output.tickets().len();
                require_that! {
                    "Ticket list must be initialised and updated." => tickets > 0,
                    format!(
                        "Ticket list size must be less than or equal to event capacity \
                         ({tickets} tickets, capacity {capacity})."
                    ) => capacity.admits(tickets),
                }
            }
            EventCommand::Start | EventCommand::End => {
                let input = require_single("One Input Expected", &inputs)?;
                let output = require_single("One Output Expected", &outputs)?;
                require_that! {
                    "Event details must remain same" => input.details() == output.details(),
                }
            }
            EventCommand::Cancel => {
                let input = details_of(require_single("One Input Expected", &inputs)?)?;
                let output = details_of(require_single("One Output Expected", &outputs)?)?;
                require_that! {
                    "Event description should be updated with cancellation reason." =>
                        output.description.contains(self.cancellation_marker.as_str()),
                    "All other event details must remain same" =>
                        output.same_apart_from_description(input),
                }
            }
            EventCommand::Complete => {
                require_single("One Input Expected", &inputs)?;
                require_none("No Output Expected", &outputs)
            }
        }
    }

    fn verify_signers(&self, tx: &Tx) -> Result<()> {
        let command = tx.require_single_command::<EventCommand>(COMMAND_FAMILY)?;
        let input = tx.inputs_of_type::<EventState>().first().copied();
        let output = tx.outputs_of_type::<EventState>().first().copied();

        match command {
            EventCommand::Create
            | EventCommand::Start
            | EventCommand::Cancel
            | EventCommand::End => require_signer(
                tx,
                command,
                "output agency",
                output.map(EventState::agency),
            ),
            EventCommand::Complete => {
                require_signer(tx, command, "input agency", input.map(EventState::agency))
            }
        }
    }
}
