//! Capabilities shared by every ledger record.
//!
//! Records are plain immutable values. The traits here let generic code ask a record for
//! its participants, its logical identity, its lifecycle status or its projection row
//! without knowing which record type it is looking at.

use crate::identity::{LinearId, Party};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A record that can live on the ledger.
pub trait ContractState {
    /// Parties with a stake in this record version
    fn participants(&self) -> Vec<&Party>;
}

/// A record with at most one live version per logical identity.
pub trait LinearState: ContractState {
    /// Logical identity shared by every version of this record
    fn linear_id(&self) -> LinearId;
}

/// Marker for a closed set of lifecycle states belonging to one record type.
pub trait Status: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// A record that carries a lifecycle status.
///
/// The status is optional so that a version with no status-bearing predecessor can be
/// represented while it is being created.
pub trait StatusState: ContractState {
    /// The status enum of this record type
    type Status: Status;

    /// Current status, if any
    fn status(&self) -> Option<Self::Status>;

    /// Returns `true` when the record is currently in `status`
    fn has_status(&self, status: Self::Status) -> bool {
        self.status() == Some(status)
    }
}

/// A record that can be flattened into a row for an external query store.
pub trait QueryableState {
    /// Row shape handed to the projection store
    type Row: Serialize;

    /// Flattens this record version into a row
    fn to_row(&self) -> Self::Row;
}

/// Resolves a [`LinearPointer`] to the current version of the record it addresses.
///
/// Implemented by the ledger store. Verification never resolves pointers itself; callers
/// hand it already-resolved snapshots as reference-only records.
pub trait StateResolver<T> {
    /// Returns the live version of the record with `id`, if any
    fn resolve(&self, id: LinearId) -> Option<T>;
}

/// Lazy reference to another record by logical identity.
///
/// The pointer names the record type it expects but never owns or embeds the target.
pub struct LinearPointer<T> {
    id: LinearId,
    target: PhantomData<fn() -> T>,
}

impl<T> LinearPointer<T> {
    /// Creates a pointer to the record with `id`
    #[must_use]
    pub const fn new(id: LinearId) -> Self {
        Self {
            id,
            target: PhantomData,
        }
    }

    /// Logical identity of the target record
    #[must_use]
    pub const fn pointer(&self) -> LinearId {
        self.id
    }

    /// Returns `true` if the pointer addresses a record at all
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        !self.id.is_nil()
    }

    /// Resolves the pointer through the given ledger store
    pub fn resolve<R>(&self, resolver: &R) -> Option<T>
    where
        R: StateResolver<T> + ?Sized,
    {
        if self.is_resolvable() {
            resolver.resolve(self.id)
        } else {
            None
        }
    }
}

impl<T> Clone for LinearPointer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LinearPointer<T> {}

impl<T> PartialEq for LinearPointer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for LinearPointer<T> {}

impl<T> Hash for LinearPointer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for LinearPointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearPointer")
            .field("id", &self.id)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Serialize for LinearPointer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for LinearPointer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        LinearId::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: LinearId,
    }

    struct Vault(HashMap<LinearId, Note>);

    impl StateResolver<Note> for Vault {
        fn resolve(&self, id: LinearId) -> Option<Note> {
            self.0.get(&id).cloned()
        }
    }

    #[test]
    fn test_pointer_resolves_through_store() {
        let note = Note { id: LinearId::new() };
        let vault = Vault(HashMap::from([(note.id, note.clone())]));

        let pointer = LinearPointer::<Note>::new(note.id);
        assert_eq!(pointer.resolve(&vault), Some(note));

        let dangling = LinearPointer::<Note>::new(LinearId::new());
        assert_eq!(dangling.resolve(&vault), None);
    }

    #[test]
    fn test_nil_pointer_is_not_resolvable() {
        let pointer = LinearPointer::<Note>::new(LinearId::nil());
        assert!(!pointer.is_resolvable());
        assert_eq!(pointer.resolve(&Vault(HashMap::new())), None);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_pointer_serializes_as_bare_id() {
        let id = LinearId::new();
        let pointer = LinearPointer::<Note>::new(id);
        let json = serde_json::to_string(&pointer).unwrap();
        assert_eq!(json, serde_json::to_string(&id).unwrap());

        let back: LinearPointer<Note> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pointer);
    }
}
