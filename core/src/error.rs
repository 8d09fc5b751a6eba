//! Rejection types produced by transaction verification.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Result type alias for a single verification step.
pub type Result<T> = std::result::Result<T, Rejection>;

/// Why a transaction was refused.
///
/// Verification is deterministic, so a rejection carries no retry hint: resubmitting the
/// same transaction always fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The transaction does not have the shape any contract can evaluate.
    ///
    /// Raised before any rule runs, e.g. when there is not exactly one command.
    #[error("Malformed transaction: {reason}")]
    Malformed {
        /// What is wrong with the transaction's shape
        reason: String,
    },

    /// A named rule evaluated to false.
    #[error("Failed requirement: {message}")]
    Requirement {
        /// Description of the violated rule
        message: String,
    },
}

impl Rejection {
    /// Creates a [`Rejection::Malformed`]
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Creates a [`Rejection::Requirement`]
    #[must_use]
    pub fn requirement(message: impl Into<String>) -> Self {
        Self::Requirement {
            message: message.into(),
        }
    }

    /// The bare reason, without the variant prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Malformed { reason } => reason,
            Self::Requirement { message } => message,
        }
    }

    /// Returns `true` for a malformed transaction
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Non-empty, ordered list of rejections for one transaction.
///
/// The first entry is the first failed check in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejections {
    first: Rejection,
    rest: SmallVec<[Rejection; 1]>,
}

impl Rejections {
    /// Starts a list with its first rejection
    #[must_use]
    pub fn new(first: Rejection) -> Self {
        Self {
            first,
            rest: SmallVec::new(),
        }
    }

    /// Appends a later rejection
    pub fn push(&mut self, rejection: Rejection) {
        self.rest.push(rejection);
    }

    /// The first failed check
    #[must_use]
    pub const fn first(&self) -> &Rejection {
        &self.first
    }

    /// Number of rejections (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; present for API symmetry with collections
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the rejections in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &Rejection> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Rendered messages, in evaluation order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl From<Rejection> for Rejections {
    fn from(rejection: Rejection) -> Self {
        Self::new(rejection)
    }
}

impl fmt::Display for Rejections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for rejection in &self.rest {
            write!(f, "; {rejection}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejections {}

impl<'a> IntoIterator for &'a Rejections {
    type Item = &'a Rejection;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a Rejection>, std::slice::Iter<'a, Rejection>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}
