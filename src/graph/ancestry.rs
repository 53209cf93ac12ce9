//! Ancestor sets with generation distances.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::PersonId;
use super::FamilyGraph;

/// Ancestors of a root person with their minimum generation distance.
///
/// The root itself is included at distance 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryMap {
    root: PersonId,
    distances: BTreeMap<PersonId, u32>,
    cycle_detected: bool,
}

impl AncestryMap {
    /// The person this map is rooted at.
    pub fn root(&self) -> PersonId {
        self.root
    }

    /// Generation distance from the root to `id`, if `id` is an ancestor.
    pub fn distance(&self, id: PersonId) -> Option<u32> {
        self.distances.get(&id).copied()
    }

    /// Whether `id` is the root or one of its ancestors.
    pub fn contains(&self, id: PersonId) -> bool {
        self.distances.contains_key(&id)
    }

    /// Number of entries, root included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Entries ascending by person id.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, u32)> + '_ {
        self.distances.iter().map(|(id, d)| (*id, *d))
    }

    /// Whether some person reached by the walk is its own ancestor.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }
}

/// Breadth-first walk upward from `person` along father then mother links.
///
/// Each ancestor appears once, at its minimum distance. The visited set
/// keeps the walk finite on cyclic data.
pub fn ancestors_of<G: FamilyGraph + ?Sized>(graph: &G, person: PersonId) -> AncestryMap {
    let mut distances = BTreeMap::new();
    let mut queue = VecDeque::new();

    distances.insert(person, 0u32);
    queue.push_back((person, 0u32));

    while let Some((current, dist)) = queue.pop_front() {
        for parent in graph.parents(current).iter() {
            if !distances.contains_key(&parent) {
                distances.insert(parent, dist + 1);
                queue.push_back((parent, dist + 1));
            }
        }
    }

    let cycle_detected = distances.keys().any(|id| is_own_ancestor(graph, *id));

    AncestryMap {
        root: person,
        distances,
        cycle_detected,
    }
}

/// Whether `person` can be reached by walking upward from its own parents.
pub fn is_own_ancestor<G: FamilyGraph + ?Sized>(graph: &G, person: PersonId) -> bool {
    let mut visited = BTreeSet::new();
    let mut stack: Vec<PersonId> = graph.parents(person).iter().collect();

    while let Some(current) = stack.pop() {
        if current == person {
            return true;
        }
        if visited.insert(current) {
            stack.extend(graph.parents(current).iter());
        }
    }
    false
}
