//! Contract configuration.
//!
//! Identifiers used when building transactions, and the marker a cancelled event's
//! description must carry. Every participant has to run with the same values, otherwise
//! verdicts diverge; [`ContractConfig::default`] gives the canonical ones.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Identifier of the Event contract
pub const DEFAULT_EVENT_CONTRACT_ID: &str = "ticket_ledger.contracts.EventContract";

/// Identifier of the Ticket contract
pub const DEFAULT_TICKET_CONTRACT_ID: &str = "ticket_ledger.contracts.TicketContract";

/// Substring a cancelled event's description must contain
pub const DEFAULT_CANCELLATION_MARKER: &str = "Cancelled because ";

/// Configuration error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was set to an empty string
    #[error("Configuration value {key} must not be empty")]
    Empty {
        /// Offending key
        key: &'static str,
    },
}

/// Contract configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Identifier of the Event contract
    pub event_contract_id: String,
    /// Identifier of the Ticket contract
    pub ticket_contract_id: String,
    /// Substring a cancelled event's description must contain
    pub cancellation_marker: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            event_contract_id: DEFAULT_EVENT_CONTRACT_ID.to_string(),
            ticket_contract_id: DEFAULT_TICKET_CONTRACT_ID.to_string(),
            cancellation_marker: DEFAULT_CANCELLATION_MARKER.to_string(),
        }
    }
}

impl ContractConfig {
    /// Environment variable overriding the Event contract identifier
    pub const EVENT_CONTRACT_ID_VAR: &'static str = "TICKET_LEDGER_EVENT_CONTRACT_ID";
    /// Environment variable overriding the Ticket contract identifier
    pub const TICKET_CONTRACT_ID_VAR: &'static str = "TICKET_LEDGER_TICKET_CONTRACT_ID";
    /// Environment variable overriding the cancellation marker
    pub const CANCELLATION_MARKER_VAR: &'static str = "TICKET_LEDGER_CANCELLATION_MARKER";

    /// Load configuration from environment variables, falling back to the defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if a variable is set to an empty string.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if a looked-up value is empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            event_contract_id: lookup(Self::EVENT_CONTRACT_ID_VAR)
                .unwrap_or(defaults.event_contract_id),
            ticket_contract_id: lookup(Self::TICKET_CONTRACT_ID_VAR)
                .unwrap_or(defaults.ticket_contract_id),
            cancellation_marker: lookup(Self::CANCELLATION_MARKER_VAR)
                .unwrap_or(defaults.cancellation_marker),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that no value is empty
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] naming the first empty value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            (Self::EVENT_CONTRACT_ID_VAR, &self.event_contract_id),
            (Self::TICKET_CONTRACT_ID_VAR, &self.ticket_contract_id),
            (Self::CANCELLATION_MARKER_VAR, &self.cancellation_marker),
        ];
        match values.into_iter().find(|(_, value)| value.is_empty()) {
            Some((key, _)) => Err(ConfigError::Empty { key }),
            None => Ok(()),
        }
    }
}
