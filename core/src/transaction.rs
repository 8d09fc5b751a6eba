//! Read-only view of a proposed transaction.
//!
//! A [`TransactionContext`] bundles the consumed record versions (inputs), the new
//! versions (outputs), records read but not consumed (references), the declared
//! command(s) and the set of keys whose signatures were verified upstream. Contracts only
//! ever see this view; nothing in it can be mutated once built.

use crate::error::{Rejection, Result};
use crate::identity::PublicKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Narrows a closed set of record (or command) kinds to one concrete kind.
///
/// Implemented by the ledger's state and command enums once per variant, so that
/// transaction accessors can filter by type without any runtime type inspection.
pub trait OfType<T> {
    /// Returns the inner value if `self` is of kind `T`
    fn of_type(&self) -> Option<&T>;
}

/// Read-only view over one proposed transaction.
///
/// # Type Parameters
///
/// - `S`: the ledger's record enum
/// - `C`: the ledger's command enum
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionContext<S, C> {
    inputs: Vec<S>,
    outputs: Vec<S>,
    #[serde(default = "Vec::new")]
    references: Vec<S>,
    commands: Vec<C>,
    #[serde(default = "BTreeSet::new")]
    signers: BTreeSet<PublicKey>,
}

impl<S, C> TransactionContext<S, C> {
    /// Starts building a transaction
    #[must_use]
    pub const fn builder() -> TransactionBuilder<S, C> {
        TransactionBuilder::new()
    }

    /// Consumed record versions, in declaration order
    #[must_use]
    pub fn inputs(&self) -> &[S] {
        &self.inputs
    }

    /// Produced record versions, in declaration order
    #[must_use]
    pub fn outputs(&self) -> &[S] {
        &self.outputs
    }

    /// Records read for context but not consumed
    #[must_use]
    pub fn references(&self) -> &[S] {
        &self.references
    }

    /// Declared commands
    #[must_use]
    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    /// Keys whose signatures were verified upstream
    #[must_use]
    pub const fn signers(&self) -> &BTreeSet<PublicKey> {
        &self.signers
    }

    /// Returns `true` if `key` is among the verified signers
    #[must_use]
    pub fn is_signed_by(&self, key: &PublicKey) -> bool {
        self.signers.contains(key)
    }

    /// Inputs of record type `T`
    #[must_use]
    pub fn inputs_of_type<T>(&self) -> Vec<&T>
    where
        S: OfType<T>,
    {
        self.inputs.iter().filter_map(<S as OfType<T>>::of_type).collect()
    }

    /// Outputs of record type `T`
    #[must_use]
    pub fn outputs_of_type<T>(&self) -> Vec<&T>
    where
        S: OfType<T>,
    {
        self.outputs.iter().filter_map(<S as OfType<T>>::of_type).collect()
    }

    /// Reference-only records of type `T`
    #[must_use]
    pub fn references_of_type<T>(&self) -> Vec<&T>
    where
        S: OfType<T>,
    {
        self.references.iter().filter_map(<S as OfType<T>>::of_type).collect()
    }

    /// Inputs followed by outputs of record type `T`
    #[must_use]
    pub fn states_of_type<T>(&self) -> Vec<&T>
    where
        S: OfType<T>,
    {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .filter_map(<S as OfType<T>>::of_type)
            .collect()
    }

    /// Returns `true` if any input or output is of record type `T`
    #[must_use]
    pub fn involves<T>(&self) -> bool
    where
        S: OfType<T>,
    {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .any(|state| <S as OfType<T>>::of_type(state).is_some())
    }

    /// Returns `true` if any command belongs to command family `T`
    #[must_use]
    pub fn has_command_of_type<T>(&self) -> bool
    where
        C: OfType<T>,
    {
        self.commands.iter().any(|command| <C as OfType<T>>::of_type(command).is_some())
    }

    /// The transaction's one and only command.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::Malformed`] unless exactly one command instance is present.
    pub fn single_command(&self) -> Result<&C> {
        match self.commands.as_slice() {
            [command] => Ok(command),
            commands => Err(Rejection::malformed(format!(
                "One command expected, found {}",
                commands.len()
            ))),
        }
    }

    /// The transaction's single command, narrowed to command family `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::Malformed`] unless exactly one command is present and it
    /// belongs to `family`.
    pub fn require_single_command<T>(&self, family: &str) -> Result<&T>
    where
        C: OfType<T>,
    {
        <C as OfType<T>>::of_type(self.single_command()?)
            .ok_or_else(|| Rejection::malformed(format!("Required {family} command")))
    }
}

/// Assembles a [`TransactionContext`].
///
/// Construction is the proposer's job; contracts only receive the finished view.
#[derive(Debug)]
pub struct TransactionBuilder<S, C> {
    inputs: Vec<S>,
    outputs: Vec<S>,
    references: Vec<S>,
    commands: Vec<C>,
    signers: BTreeSet<PublicKey>,
}

impl<S, C> TransactionBuilder<S, C> {
    /// Creates an empty builder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            references: Vec::new(),
            commands: Vec::new(),
            signers: BTreeSet::new(),
        }
    }

    /// Adds a consumed record version
    #[must_use]
    pub fn input(mut self, state: impl Into<S>) -> Self {
        self.inputs.push(state.into());
        self
    }

    /// Adds a produced record version
    #[must_use]
    pub fn output(mut self, state: impl Into<S>) -> Self {
        self.outputs.push(state.into());
        self
    }

    /// Adds a reference-only record
    #[must_use]
    pub fn reference(mut self, state: impl Into<S>) -> Self {
        self.references.push(state.into());
        self
    }

    /// Adds a command
    #[must_use]
    pub fn command(mut self, command: impl Into<C>) -> Self {
        self.commands.push(command.into());
        self
    }

    /// Adds a verified signer key
    #[must_use]
    pub fn signer(mut self, key: PublicKey) -> Self {
        self.signers.insert(key);
        self
    }

    /// Adds several verified signer keys
    #[must_use]
    pub fn signers(mut self, keys: impl IntoIterator<Item = PublicKey>) -> Self {
        self.signers.extend(keys);
        self
    }

    /// Finishes the transaction
    #[must_use]
    pub fn build(self) -> TransactionContext<S, C> {
        TransactionContext {
            inputs: self.inputs,
            outputs: self.outputs,
            references: self.references,
            commands: self.commands,
            signers: self.signers,
        }
    }
}

impl<S, C> Default for TransactionBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
