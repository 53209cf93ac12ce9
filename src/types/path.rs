//! Path: a sequence of persons joined by traversal steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::person::{Person, PersonId};

/// Direction of one traversal step, relative to the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Toward a parent (+1).
    Up,
    /// Toward a child (-1).
    Down,
    /// Across a marriage (0).
    Spouse,
}

impl Step {
    /// Signed generation delta of this step.
    pub fn delta(&self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            Self::Spouse => 0,
        }
    }

    /// The same step walked the other way.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Spouse => Self::Spouse,
        }
    }
}

/// The ordered directions of a path, read from the query subject toward
/// the target. Primary key into the classification rule table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSignature(Vec<Step>);

impl DirectionSignature {
    /// Create a signature from steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    /// The steps.
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signed deltas (+1, -1, 0).
    pub fn deltas(&self) -> Vec<i8> {
        self.0.iter().map(Step::delta).collect()
    }

    /// Net generation offset of the target relative to the subject.
    /// Positive when the target belongs to an older generation.
    pub fn generation_offset(&self) -> i32 {
        self.0.iter().map(|s| s.delta() as i32).sum()
    }
}

impl fmt::Display for DirectionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match step {
                Step::Up => write!(f, "+1")?,
                Step::Down => write!(f, "-1")?,
                Step::Spouse => write!(f, "0")?,
            }
        }
        write!(f, "]")
    }
}

/// A path in the family graph: person -step-> person -step-> person ...
///
/// `nodes` always has exactly one more element than `steps`; `steps[i]` is
/// the direction from `nodes[i]` to `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinPath {
    nodes: Vec<Person>,
    steps: Vec<Step>,
}

impl KinPath {
    /// A zero-length path at `person`.
    pub fn single(person: Person) -> Self {
        Self { nodes: vec![person], steps: Vec::new() }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The query subject.
    pub fn start(&self) -> &Person {
        &self.nodes[0]
    }

    /// The target.
    pub fn end(&self) -> &Person {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Person at position `i` (0 = subject).
    pub fn node(&self, i: usize) -> Option<&Person> {
        self.nodes.get(i)
    }

    /// All persons along the path.
    pub fn nodes(&self) -> &[Person] {
        &self.nodes
    }

    /// All steps along the path.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Extend the path with a step and the person it reaches.
    pub fn append(&mut self, step: Step, person: Person) {
        self.steps.push(step);
        self.nodes.push(person);
    }

    /// Direction signature of this path.
    pub fn signature(&self) -> DirectionSignature {
        DirectionSignature::new(self.steps.clone())
    }

    /// Identifiers along the path, subject first.
    pub fn ids(&self) -> Vec<PersonId> {
        self.nodes.iter().map(|p| p.id).collect()
    }

    /// The path without its final step. `None` for a zero-length path.
    pub fn without_last(&self) -> Option<KinPath> {
        if self.steps.is_empty() {
            return None;
        }
        Some(Self {
            nodes: self.nodes[..self.nodes.len() - 1].to_vec(),
            steps: self.steps[..self.steps.len() - 1].to_vec(),
        })
    }

    /// The path without its first step. `None` for a zero-length path.
    pub fn without_first(&self) -> Option<KinPath> {
        if self.steps.is_empty() {
            return None;
        }
        Some(Self {
            nodes: self.nodes[1..].to_vec(),
            steps: self.steps[1..].to_vec(),
        })
    }

    /// The same path walked from the target back to the subject.
    pub fn reversed(&self) -> KinPath {
        Self {
            nodes: self.nodes.iter().rev().cloned().collect(),
            steps: self.steps.iter().rev().map(Step::reversed).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::person::{FamilyId, Gender};

    fn person(id: u64) -> Person {
        Person::new(PersonId::new(id), format!("P{}", id), Gender::Male, FamilyId::new(1))
    }

    fn sample() -> KinPath {
        let mut path = KinPath::single(person(1));
        path.append(Step::Up, person(2));
        path.append(Step::Up, person(3));
        path.append(Step::Down, person(4));
        path
    }

    #[test]
    fn test_signature_display() {
        assert_eq!(sample().signature().to_string(), "[+1, +1, -1]");
        assert_eq!(sample().signature().generation_offset(), 1);
    }

    #[test]
    fn test_truncation() {
        let path = sample();
        let head = path.without_last().unwrap();
        assert_eq!(head.len(), 2);
        assert_eq!(head.end().id, PersonId::new(3));

        let tail = path.without_first().unwrap();
        assert_eq!(tail.start().id, PersonId::new(2));
        assert_eq!(tail.signature().steps(), &[Step::Up, Step::Down]);

        assert!(KinPath::single(person(9)).without_last().is_none());
    }

    #[test]
    fn test_reversed() {
        let rev = sample().reversed();
        assert_eq!(rev.start().id, PersonId::new(4));
        assert_eq!(rev.signature().steps(), &[Step::Up, Step::Down, Step::Down]);
        assert_eq!(rev.reversed(), sample());
    }
}
