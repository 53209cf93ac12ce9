//! Read-only family graph access and traversals.
//!
//! The engine never talks to storage directly. It reads a [`FamilyGraph`],
//! normally an immutable [`FamilySnapshot`] built once per request or
//! cached by the calling layer.

pub mod snapshot;
pub mod ancestry;
pub mod lca;
pub mod pathfinder;

use crate::types::{ParentLinks, Person, PersonId};

/// Synchronous, read-only view of a family graph.
///
/// Implementations must return children and spouses in ascending id order;
/// path search relies on it for deterministic tie-breaking.
pub trait FamilyGraph: Send + Sync {
    /// Fetch a person by ID.
    fn person(&self, id: PersonId) -> Option<&Person>;

    /// Father and mother links of a person (empty for unknown ids).
    fn parents(&self, id: PersonId) -> ParentLinks {
        self.person(id).map(Person::parents).unwrap_or_default()
    }

    /// Children of a person, ascending by id.
    fn children(&self, id: PersonId) -> &[PersonId];

    /// Spouses of a person, ascending by id.
    fn spouses(&self, id: PersonId) -> &[PersonId];

    /// Whether the person exists in this graph.
    fn contains(&self, id: PersonId) -> bool {
        self.person(id).is_some()
    }
}

pub use snapshot::{FamilySnapshot, SnapshotInput, SnapshotError};
pub use ancestry::{ancestors_of, is_own_ancestor, AncestryMap};
pub use lca::{lowest_common_ancestor, CommonAncestor};
pub use pathfinder::PathFinder;
