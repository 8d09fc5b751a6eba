//! The contract abstraction: a rule set for one record type.
//!
//! Every contract checks a transaction in five fixed phases. The phases run strictly in
//! order and the first failing phase ends verification of that contract; later phases may
//! rely on what earlier phases established (e.g. that there is at most one input).

use crate::error::{Rejection, Result};
use crate::identity::Party;
use crate::transaction::TransactionContext;
use std::fmt;

/// One of the five ordered rule categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Field invariants that hold for every record version
    Universal,
    /// Invariants tied to the record's lifecycle status
    Status,
    /// Linear-state discipline and identity continuity
    LinearId,
    /// Rules specific to the declared command
    Command,
    /// Required signers
    Signers,
}

impl Phase {
    /// All phases, in evaluation order
    pub const ALL: [Self; 5] = [
        Self::Universal,
        Self::Status,
        Self::LinearId,
        Self::Command,
        Self::Signers,
    ];

    /// Stable lowercase name, used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::Status => "status",
            Self::LinearId => "linear_id",
            Self::Command => "command",
            Self::Signers => "signers",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule set for one record type.
///
/// Implementations must be pure functions of the transaction: no I/O, no clocks, no
/// shared mutable state. Every participant runs the same contract against the same
/// transaction and must reach the same verdict.
///
/// # Type Parameters
///
/// - `S`: the ledger's record enum
/// - `C`: the ledger's command enum
pub trait Contract<S, C>: Send + Sync {
    /// Identifier of this contract
    fn id(&self) -> &str;

    /// Whether this contract has anything to say about `tx`
    fn applies_to(&self, tx: &TransactionContext<S, C>) -> bool;

    /// Invariants over every input and output of this contract's record type
    ///
    /// # Errors
    ///
    /// Returns the first failed requirement.
    fn verify_universal(&self, tx: &TransactionContext<S, C>) -> Result<()>;

    /// Status-dependent invariants over every input and output
    ///
    /// # Errors
    ///
    /// Returns the first failed requirement.
    fn verify_status(&self, tx: &TransactionContext<S, C>) -> Result<()>;

    /// At most one input and one output; identity continuity for transitions
    ///
    /// # Errors
    ///
    /// Returns the first failed requirement, or a malformed rejection if the command is
    /// missing or belongs to another contract.
    fn verify_linear_id(&self, tx: &TransactionContext<S, C>) -> Result<()>;

    /// Rules specific to the declared command
    ///
    /// # Errors
    ///
    /// Returns the first failed requirement.
    fn verify_command(&self, tx: &TransactionContext<S, C>) -> Result<()>;

    /// Required signers for the declared command
    ///
    /// # Errors
    ///
    /// Returns the first failed requirement.
    fn verify_signers(&self, tx: &TransactionContext<S, C>) -> Result<()>;

    /// Runs a single phase
    ///
    /// # Errors
    ///
    /// Returns the phase's first failed requirement.
    fn verify_phase(&self, phase: Phase, tx: &TransactionContext<S, C>) -> Result<()> {
        match phase {
            Phase::Universal => self.verify_universal(tx),
            Phase::Status => self.verify_status(tx),
            Phase::LinearId => self.verify_linear_id(tx),
            Phase::Command => self.verify_command(tx),
            Phase::Signers => self.verify_signers(tx),
        }
    }

    /// Runs all five phases in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the rejection raised by the first failing phase.
    fn verify(&self, tx: &TransactionContext<S, C>) -> Result<()> {
        for phase in Phase::ALL {
            if let Err(rejection) = self.verify_phase(phase, tx) {
                tracing::debug!(
                    contract = self.id(),
                    phase = %phase,
                    reason = %rejection,
                    "Contract phase failed"
                );
                return Err(rejection);
            }
        }
        Ok(())
    }
}

/// Requires that `party` exists and its key is among the transaction's signers.
///
/// `description` names the role being checked (e.g. `"output issuer"`); a missing party
/// counts as an absent signature.
///
/// # Errors
///
/// Returns a [`Rejection::Requirement`] naming the command and the missing role.
pub fn require_signer<S, C>(
    tx: &TransactionContext<S, C>,
    command: &dyn fmt::Display,
    description: &str,
    party: Option<&Party>,
) -> Result<()> {
    if party.is_some_and(|party| tx.is_signed_by(party.owning_key())) {
        Ok(())
    } else {
        Err(Rejection::requirement(format!(
            "When the Command is {command} the {description} must sign."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::PublicKey;
    use std::sync::Mutex;

    struct Recording {
        failing: Option<Phase>,
        seen: Mutex<Vec<Phase>>,
    }

    impl Recording {
        fn record(&self, phase: Phase) -> Result<()> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(phase);
            }
            if self.failing == Some(phase) {
                Err(Rejection::requirement(phase.as_str()))
            } else {
                Ok(())
            }
        }
    }

    impl Contract<(), ()> for Recording {
        fn id(&self) -> &str {
            "recording"
        }
        fn applies_to(&self, _tx: &TransactionContext<(), ()>) -> bool {
            true
        }
        fn verify_universal(&self, _tx: &TransactionContext<(), ()>) -> Result<()> {
            self.record(Phase::Universal)
        }
        fn verify_status(&self, _tx: &TransactionContext<(), ()>) -> Result<()> {
            self.record(Phase::Status)
        }
        fn verify_linear_id(&self, _tx: &TransactionContext<(), ()>) -> Result<()> {
            self.record(Phase::LinearId)
        }
        fn verify_command(&self, _tx: &TransactionContext<(), ()>) -> Result<()> {
            self.record(Phase::Command)
        }
        fn verify_signers(&self, _tx: &TransactionContext<(), ()>) -> Result<()> {
            self.record(Phase::Signers)
        }
    }

    fn seen(contract: &Recording) -> Vec<Phase> {
        contract.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    #[test]
    fn test_phases_run_in_order() {
        let contract = Recording {
            failing: None,
            seen: Mutex::new(Vec::new()),
        };
        let tx = TransactionContext::<(), ()>::builder().build();

        assert_eq!(contract.verify(&tx), Ok(()));
        assert_eq!(seen(&contract), Phase::ALL.to_vec());
    }

    #[test]
    fn test_first_failing_phase_stops_verification() {
        let contract = Recording {
            failing: Some(Phase::LinearId),
            seen: Mutex::new(Vec::new()),
        };
        let tx = TransactionContext::<(), ()>::builder().build();

        assert_eq!(
            contract.verify(&tx),
            Err(Rejection::requirement("linear_id"))
        );
        assert_eq!(
            seen(&contract),
            vec![Phase::Universal, Phase::Status, Phase::LinearId]
        );
    }

    #[test]
    fn test_require_signer() {
        let key = PublicKey::from_bytes([3; 32]);
        let issuer = Party::new("Issuer", key);
        let stranger = Party::new("Stranger", PublicKey::from_bytes([4; 32]));
        let tx = TransactionContext::<(), ()>::builder().signer(key).build();

        assert_eq!(require_signer(&tx, &"Create", "output issuer", Some(&issuer)), Ok(()));
        assert_eq!(
            require_signer(&tx, &"Create", "output holder", Some(&stranger)),
            Err(Rejection::requirement(
                "When the Command is Create the output holder must sign."
            ))
        );
        assert!(require_signer(&tx, &"Complete", "input issuer", None).is_err());
    }
}
