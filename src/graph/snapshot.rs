//! Immutable family graph snapshots.
//!
//! A `FamilySnapshot` is built once from person records and marriages,
//! validated against the data-model invariants, and then shared read-only
//! (`Arc<FamilySnapshot>`) across any number of concurrent queries. Its
//! fingerprint identifies the exact family state a description was
//! computed against.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::canonical::canonical_hash_hex;
use crate::types::{FamilyId, Gender, Person, PersonId, RelationEdge};
use crate::KINSHIP_SCHEMA_VERSION;

use super::ancestry::is_own_ancestor;
use super::FamilyGraph;

/// Error type for snapshot construction.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// A father/mother id references a person that is not in the input.
    #[error("Person {person} references unknown parent {parent}")]
    UnknownParent {
        /// Child whose link is dangling.
        person: PersonId,
        /// Missing parent id.
        parent: PersonId,
    },
    /// A parent belongs to a different family group than the child.
    #[error("Person {person} has parent {parent} outside family {family}")]
    ParentOutsideFamily {
        /// Child.
        person: PersonId,
        /// Parent in another family group.
        parent: PersonId,
        /// The child's family group.
        family: FamilyId,
    },
    /// The same person id was supplied twice.
    #[error("Duplicate person: {0}")]
    DuplicatePerson(PersonId),
    /// A marriage references a person that is not in the input.
    #[error("Marriage references unknown person {0}")]
    UnknownSpouse(PersonId),
    /// Fingerprint encoding failed.
    #[error("Canonical encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Input data for building a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotInput {
    /// All persons in the snapshot.
    pub persons: Vec<Person>,
    /// Marriages as unordered pairs.
    pub marriages: Vec<(PersonId, PersonId)>,
}

impl SnapshotInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person.
    pub fn person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    /// Add a marriage.
    pub fn marriage(mut self, a: PersonId, b: PersonId) -> Self {
        self.marriages.push((a, b));
        self
    }
}

/// A validated, immutable view of one or more family groups.
#[derive(Debug, Clone)]
pub struct FamilySnapshot {
    persons: BTreeMap<PersonId, Person>,
    children: BTreeMap<PersonId, Vec<PersonId>>,
    spouses: BTreeMap<PersonId, Vec<PersonId>>,
    marriage_count: usize,
    fingerprint: String,
}

impl FamilySnapshot {
    /// Build a snapshot, enforcing that parents exist in the same family
    /// group and that every id is unique.
    ///
    /// Parent cycles are accepted; see [`FamilySnapshot::parent_cycles`].
    pub fn build(input: SnapshotInput) -> Result<Self, SnapshotError> {
        let mut persons: BTreeMap<PersonId, Person> = BTreeMap::new();
        for person in input.persons {
            let id = person.id;
            if persons.insert(id, person).is_some() {
                return Err(SnapshotError::DuplicatePerson(id));
            }
        }

        let mut children: BTreeMap<PersonId, BTreeSet<PersonId>> = BTreeMap::new();
        for person in persons.values() {
            for parent in person.parents().iter() {
                let parent_record = persons.get(&parent).ok_or(SnapshotError::UnknownParent {
                    person: person.id,
                    parent,
                })?;
                if parent_record.family_id != person.family_id {
                    return Err(SnapshotError::ParentOutsideFamily {
                        person: person.id,
                        parent,
                        family: person.family_id,
                    });
                }
                children.entry(parent).or_default().insert(person.id);
            }
        }

        let mut spouses: BTreeMap<PersonId, BTreeSet<PersonId>> = BTreeMap::new();
        let mut marriages: BTreeSet<(PersonId, PersonId)> = BTreeSet::new();
        for (a, b) in input.marriages {
            for id in [a, b] {
                if !persons.contains_key(&id) {
                    return Err(SnapshotError::UnknownSpouse(id));
                }
            }
            if a == b {
                continue;
            }
            for edge in RelationEdge::spouse_pair(a, b) {
                spouses.entry(edge.source).or_default().insert(edge.target);
            }
            marriages.insert((a.min(b), a.max(b)));
        }

        let fingerprint = compute_fingerprint(&persons, &marriages)?;

        Ok(Self {
            persons,
            children: flatten(children),
            spouses: flatten(spouses),
            marriage_count: marriages.len(),
            fingerprint,
        })
    }

    /// Build a snapshot from persons and marriage pairs.
    pub fn from_persons(
        persons: Vec<Person>,
        marriages: Vec<(PersonId, PersonId)>,
    ) -> Result<Self, SnapshotError> {
        Self::build(SnapshotInput { persons, marriages })
    }

    /// Deterministic fingerprint of the snapshot content (xxh64 hex).
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Number of persons.
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Number of distinct marriages.
    pub fn marriage_count(&self) -> usize {
        self.marriage_count
    }

    /// All persons, ascending by id.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// All relation edges in canonical order.
    pub fn edges(&self) -> Vec<RelationEdge> {
        let mut edges = Vec::new();
        for person in self.persons.values() {
            if let Some(father) = person.father_id {
                edges.push(RelationEdge::father_of(father, person.id));
            }
            if let Some(mother) = person.mother_id {
                edges.push(RelationEdge::mother_of(mother, person.id));
            }
        }
        for (a, partners) in &self.spouses {
            for b in partners {
                if a < b {
                    edges.extend(RelationEdge::spouse_pair(*a, *b));
                }
            }
        }
        edges.sort();
        edges
    }

    /// Persons that are their own ancestor, ascending by id.
    ///
    /// Such cycles are a data fault. Traversals stay bounded regardless;
    /// this list lets the caller report the fault.
    pub fn parent_cycles(&self) -> Vec<PersonId> {
        self.persons
            .keys()
            .copied()
            .filter(|id| is_own_ancestor(self, *id))
            .collect()
    }
}

impl FamilyGraph for FamilySnapshot {
    fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }

    fn children(&self, id: PersonId) -> &[PersonId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn spouses(&self, id: PersonId) -> &[PersonId] {
        self.spouses.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn flatten(map: BTreeMap<PersonId, BTreeSet<PersonId>>) -> BTreeMap<PersonId, Vec<PersonId>> {
    map.into_iter()
        .map(|(id, set)| (id, set.into_iter().collect()))
        .collect()
}

/// Fields of a person that influence classification.
#[derive(Serialize)]
struct PersonFingerprint {
    id: PersonId,
    gender: Gender,
    birth_date: Option<NaiveDate>,
    father_id: Option<PersonId>,
    mother_id: Option<PersonId>,
    family_id: FamilyId,
}

/// Internal struct for computing the fingerprint hash.
#[derive(Serialize)]
struct FingerprintInput {
    schema_version: &'static str,
    person_count: usize,
    marriage_count: usize,
    person_hash: String,
    marriage_hash: String,
}

fn compute_fingerprint(
    persons: &BTreeMap<PersonId, Person>,
    marriages: &BTreeSet<(PersonId, PersonId)>,
) -> Result<String, serde_json::Error> {
    let records: Vec<PersonFingerprint> = persons
        .values()
        .map(|p| PersonFingerprint {
            id: p.id,
            gender: p.gender,
            birth_date: p.birth_date,
            father_id: p.father_id,
            mother_id: p.mother_id,
            family_id: p.family_id,
        })
        .collect();
    let pairs: Vec<&(PersonId, PersonId)> = marriages.iter().collect();

    let input = FingerprintInput {
        schema_version: KINSHIP_SCHEMA_VERSION,
        person_count: persons.len(),
        marriage_count: marriages.len(),
        person_hash: canonical_hash_hex(&records)?,
        marriage_hash: canonical_hash_hex(&pairs)?,
    };
    canonical_hash_hex(&input)
}
