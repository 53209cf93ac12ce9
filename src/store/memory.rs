//! In-memory family store for testing.

use std::collections::{BTreeMap, BTreeSet};
use async_trait::async_trait;

use crate::types::{FamilyId, ParentLinks, Person, PersonId};
use super::FamilyStore;

/// Error type for in-memory store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InMemoryError {
    /// Person not found.
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}

/// In-memory family store for testing.
///
/// Uses BTreeMap/BTreeSet for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFamilyStore {
    /// Persons by ID.
    persons: BTreeMap<PersonId, Person>,
    /// Person -> spouses mapping (symmetric).
    spouses: BTreeMap<PersonId, BTreeSet<PersonId>>,
    /// Family -> members mapping.
    members: BTreeMap<FamilyId, BTreeSet<PersonId>>,
}

impl InMemoryFamilyStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a person.
    pub fn add_person(&mut self, person: Person) {
        if let Some(previous) = self.persons.get(&person.id) {
            if let Some(set) = self.members.get_mut(&previous.family_id) {
                set.remove(&person.id);
            }
        }
        self.members.entry(person.family_id).or_default().insert(person.id);
        self.persons.insert(person.id, person);
    }

    /// Record a marriage between two stored persons.
    pub fn add_marriage(&mut self, a: PersonId, b: PersonId) -> Result<(), InMemoryError> {
        for id in [a, b] {
            if !self.persons.contains_key(&id) {
                return Err(InMemoryError::PersonNotFound(id));
            }
        }
        self.spouses.entry(a).or_default().insert(b);
        self.spouses.entry(b).or_default().insert(a);
        Ok(())
    }

    /// Get number of persons.
    pub fn num_persons(&self) -> usize {
        self.persons.len()
    }

    /// Get number of marriages.
    pub fn num_marriages(&self) -> usize {
        self.spouses.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[async_trait]
impl FamilyStore for InMemoryFamilyStore {
    type Error = InMemoryError;

    async fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error> {
        Ok(self.persons.get(&id).cloned())
    }

    async fn get_parent_edges(&self, id: PersonId) -> Result<ParentLinks, Self::Error> {
        self.persons
            .get(&id)
            .map(Person::parents)
            .ok_or(InMemoryError::PersonNotFound(id))
    }

    async fn get_spouse_edges(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error> {
        if !self.persons.contains_key(&id) {
            return Err(InMemoryError::PersonNotFound(id));
        }
        Ok(self.spouses
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn get_all_persons_in_family(&self, family: FamilyId) -> Result<Vec<Person>, Self::Error> {
        Ok(self.members
            .get(&family)
            .map(|ids| ids.iter().filter_map(|id| self.persons.get(id).cloned()).collect())
            .unwrap_or_default())
    }
}
