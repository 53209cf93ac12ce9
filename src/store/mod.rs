//! Family record storage boundary.
//!
//! Persistence belongs to the calling application. The kernel only needs
//! the four reads below to build a snapshot; anything that can answer
//! them (a relational database, a graph database, a fixture) can back the
//! [`crate::service::KinshipService`].

pub mod memory;

use async_trait::async_trait;
use crate::types::{FamilyId, ParentLinks, Person, PersonId};

/// Trait for family record backends.
///
/// Implementations must guarantee deterministic ordering of results.
/// All methods are async to support async database access.
#[async_trait]
pub trait FamilyStore: Send + Sync {
    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync;

    /// Fetch a person by ID.
    async fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error>;

    /// Fetch the father and mother links of a person.
    async fn get_parent_edges(&self, id: PersonId) -> Result<ParentLinks, Self::Error>;

    /// Fetch spouse IDs (ascending).
    async fn get_spouse_edges(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error>;

    /// Fetch every person of a family group (ascending by ID).
    async fn get_all_persons_in_family(&self, family: FamilyId) -> Result<Vec<Person>, Self::Error>;
}

pub use memory::{InMemoryFamilyStore, InMemoryError};
