//! Runs every applicable contract against a transaction.
//!
//! The verifier is the single entry point of the validation engine. It first checks the
//! transaction's shape (exactly one command), then hands the transaction to each
//! registered contract that applies to it, in registration order. It holds no mutable
//! state, so one verifier can be shared across threads and used for any number of
//! concurrent validations.

use crate::contract::Contract;
use crate::error::Rejections;
use crate::transaction::TransactionContext;
use std::fmt;

/// Ordered collection of contracts that together decide admissibility.
pub struct Verifier<S, C> {
    contracts: Vec<Box<dyn Contract<S, C>>>,
}

impl<S, C> Verifier<S, C> {
    /// Creates a verifier with no contracts
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contracts: Vec::new(),
        }
    }

    /// Registers a contract; contracts run in registration order
    #[must_use]
    pub fn with_contract(mut self, contract: impl Contract<S, C> + 'static) -> Self {
        self.contracts.push(Box::new(contract));
        self
    }

    /// Identifiers of the registered contracts
    pub fn contract_ids(&self) -> impl Iterator<Item = &str> {
        self.contracts.iter().map(|contract| contract.id())
    }

    /// Decides whether `tx` is admissible.
    ///
    /// A transaction without exactly one command is rejected as malformed before any
    /// contract runs. Otherwise each applicable contract contributes at most one
    /// rejection, its first failed check.
    ///
    /// # Errors
    ///
    /// Returns the ordered, non-empty list of rejections if any contract refuses `tx`.
    pub fn verify(&self, tx: &TransactionContext<S, C>) -> Result<(), Rejections> {
        if let Err(rejection) = tx.single_command() {
            tracing::info!(
                commands = tx.commands().len(),
                verdict = "malformed",
                reason = %rejection,
                "Transaction rejected"
            );
            return Err(rejection.into());
        }

        let mut rejections: Option<Rejections> = None;
        for contract in self.contracts.iter().filter(|contract| contract.applies_to(tx)) {
            tracing::debug!(contract = contract.id(), "Verifying contract");
            if let Err(rejection) = contract.verify(tx) {
                match rejections.as_mut() {
                    Some(list) => list.push(rejection),
                    None => rejections = Some(Rejections::new(rejection)),
                }
            }
        }

        match rejections {
            None => {
                tracing::info!(
                    inputs = tx.inputs().len(),
                    outputs = tx.outputs().len(),
                    references = tx.references().len(),
                    verdict = "accepted",
                    "Transaction verified"
                );
                Ok(())
            }
            Some(rejections) => {
                tracing::info!(
                    inputs = tx.inputs().len(),
                    outputs = tx.outputs().len(),
                    references = tx.references().len(),
                    verdict = "rejected",
                    reason = %rejections.first(),
                    "Transaction rejected"
                );
                Err(rejections)
            }
        }
    }
}

impl<S, C> Default for Verifier<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> fmt::Debug for Verifier<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("contracts", &self.contract_ids().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{Rejection, Result};
    use crate::transaction::OfType;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget(u8);

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Touch;

    impl OfType<Widget> for Widget {
        fn of_type(&self) -> Option<&Widget> {
            Some(self)
        }
    }

    /// Rejects any widget above a limit; applies when widgets are present.
    struct Limit {
        id: &'static str,
        max: u8,
    }

    impl Contract<Widget, Touch> for Limit {
        fn id(&self) -> &str {
            self.id
        }
        fn applies_to(&self, tx: &TransactionContext<Widget, Touch>) -> bool {
            tx.involves::<Widget>()
        }
        fn verify_universal(&self, tx: &TransactionContext<Widget, Touch>) -> Result<()> {
            for widget in tx.states_of_type::<Widget>() {
                crate::require_that! {
                    format!("{} over limit", self.id) => widget.0 <= self.max,
                }?;
            }
            Ok(())
        }
        fn verify_status(&self, _tx: &TransactionContext<Widget, Touch>) -> Result<()> {
            Ok(())
        }
        fn verify_linear_id(&self, _tx: &TransactionContext<Widget, Touch>) -> Result<()> {
            Ok(())
        }
        fn verify_command(&self, _tx: &TransactionContext<Widget, Touch>) -> Result<()> {
            Ok(())
        }
        fn verify_signers(&self, _tx: &TransactionContext<Widget, Touch>) -> Result<()> {
            Ok(())
        }
    }

    fn verifier() -> Verifier<Widget, Touch> {
        Verifier::new()
            .with_contract(Limit { id: "low", max: 5 })
            .with_contract(Limit { id: "high", max: 10 })
    }

    #[test]
    fn test_missing_command_is_malformed_and_skips_contracts() {
        let tx = TransactionContext::builder().output(Widget(50)).build();
        let rejections = verifier().verify(&tx).unwrap_err();
        assert_eq!(rejections.len(), 1);
        assert!(rejections.first().is_malformed());
    }

    #[test]
    fn test_collects_one_rejection_per_contract_in_order() {
        let tx = TransactionContext::builder()
            .output(Widget(50))
            .command(Touch)
            .build();
        let rejections = verifier().verify(&tx).unwrap_err();
        assert_eq!(
            rejections.iter().cloned().collect::<Vec<_>>(),
            vec![
                Rejection::requirement("low over limit"),
                Rejection::requirement("high over limit"),
            ]
        );
    }

    #[test]
    fn test_accepts_when_every_contract_passes() {
        let tx = TransactionContext::builder()
            .input(Widget(1))
            .output(Widget(2))
            .command(Touch)
            .build();
        assert!(verifier().verify(&tx).is_ok());
    }

    #[test]
    fn test_contract_ids_in_registration_order() {
        let verifier = verifier();
        assert_eq!(verifier.contract_ids().collect::<Vec<_>>(), vec!["low", "high"]);
        assert_eq!(format!("{verifier:?}"), r#"Verifier { contracts: ["low", "high"] }"#);
    }
}
