//! Identities carried by ledger records.
//!
//! A record version is addressed by its [`LinearId`], which stays stable across every
//! version of the same logical record. Approvals are expressed through [`PublicKey`]s,
//! and the parties that own or hold records are [`Party`] values.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable logical identity of a linear record.
///
/// Every version of the same record shares one `LinearId`; a transition that consumes a
/// version and produces the next one must carry the identity over unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinearId(Uuid);

impl LinearId {
    /// Creates a new random `LinearId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identity, which never addresses a record
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Returns `true` for the nil identity
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for LinearId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a signing key.
///
/// The verifier never checks signatures itself; it only checks that a key appears in the
/// transaction's already-authenticated signer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wraps raw key bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A named participant identified by its owning key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    name: String,
    owning_key: PublicKey,
}

impl Party {
    /// Creates a new `Party`
    #[must_use]
    pub fn new(name: impl Into<String>, owning_key: PublicKey) -> Self {
        Self {
            name: name.into(),
            owning_key,
        }
    }

    /// Human-readable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key whose signature stands for this party's approval
    #[must_use]
    pub const fn owning_key(&self) -> &PublicKey {
        &self.owning_key
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_linear_id() {
        assert!(LinearId::nil().is_nil());
        assert!(!LinearId::new().is_nil());
    }

    #[test]
    fn test_public_key_display_is_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let rendered = PublicKey::from_bytes(bytes).to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("ab00"));
        assert!(rendered.ends_with("01"));
    }

    #[test]
    fn test_parties_differ_by_key() {
        let a = Party::new("Agency", PublicKey::from_bytes([1; 32]));
        let b = Party::new("Agency", PublicKey::from_bytes([2; 32]));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "Agency");
    }
}
