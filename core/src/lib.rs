//! # Ticket Ledger Core
//!
//! Record-agnostic building blocks for validating state transitions on an append-only
//! ledger.
//!
//! A proposed transition ("transaction") consumes zero or more record versions, produces
//! zero or more new versions, may read reference-only records, declares one command and
//! lists the keys that signed it. Every participant re-runs the same contracts against the
//! same transaction and must reach the same verdict, so everything here is a pure function
//! of transaction content.
//!
//! ## Core Concepts
//!
//! - **Record**: an immutable, versioned value tracked under a stable [`LinearId`]
//! - **Transaction context**: the read-only view contracts consume ([`TransactionContext`])
//! - **Contract**: a five-phase rule set for one record type ([`Contract`])
//! - **Verifier**: runs every applicable contract and collects [`Rejections`]
//!
//! ## Example
//!
//! ```ignore
//! use ticket_ledger_core::{TransactionContext, Verifier};
//!
//! let verifier = Verifier::new()
//!     .with_contract(EventContract::default())
//!     .with_contract(TicketContract::default());
//!
//! let tx = TransactionContext::builder()
//!     .output(event)
//!     .command(EventCommand::Create)
//!     .signer(*agency.owning_key())
//!     .build();
//!
//! verifier.verify(&tx)?;
//! ```

pub mod contract;
pub mod error;
pub mod identity;
pub mod requirement;
pub mod schedule;
pub mod state;
pub mod transaction;
pub mod verifier;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use contract::{Contract, Phase, require_signer};
pub use error::{Rejection, Rejections};
pub use identity::{LinearId, Party, PublicKey};
pub use requirement::{require_none, require_single};
pub use schedule::{Schedulable, ScheduledActivity};
pub use state::{
    ContractState, LinearPointer, LinearState, QueryableState, StateResolver, Status, StatusState,
};
pub use transaction::{OfType, TransactionBuilder, TransactionContext};
pub use verifier::Verifier;
