//! Kinship engine: the entry point for describing a relation.
//!
//! The engine composes path search, the common-ancestor reading and the
//! classifier over one immutable graph. When the classifier needs another
//! classification (a path with its spouse step stripped, or the relation
//! between two parents) it asks the engine through [`SubQuery`], so graph
//! access and the recursion bound stay in one place.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::classify::{classify, classify_blood, SubQuery};
use crate::graph::{ancestors_of, lowest_common_ancestor, CommonAncestor, FamilyGraph, PathFinder};
use crate::narrative;
use crate::policy::KinshipPolicy;
use crate::types::{KinPath, KinshipTerm, Person, PersonId};

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KinshipError {
    /// An endpoint is absent from the graph.
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}

/// Result of describing `target` relative to `subject`.
///
/// `term == None` means no determinable relationship; it is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// Query subject.
    pub subject: PersonId,
    /// Person being named.
    pub target: PersonId,
    /// Structured term.
    pub term: Option<KinshipTerm>,
    /// Vietnamese rendering of `term`.
    pub label: Option<String>,
    /// English gloss of `term`.
    pub gloss: Option<String>,
    /// Connecting path, subject first; empty when unrelated.
    pub path: Vec<PersonId>,
    /// Step-by-step explanation.
    pub narrative: String,
    /// Nearest shared ancestor, when the two are blood relatives.
    pub blood: Option<CommonAncestor>,
    /// Whether a parent cycle was met in either person's ancestry.
    pub cycle_detected: bool,
}

impl Description {
    /// Description for two persons with no connecting path.
    pub fn unrelated(subject: &Person, target: &Person) -> Self {
        Self {
            subject: subject.id,
            target: target.id,
            term: None,
            label: None,
            gloss: None,
            path: Vec::new(),
            narrative: narrative::unrelated(subject, target),
            blood: None,
            cycle_detected: false,
        }
    }

    /// Vietnamese label, if a term was determined.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Describes kinship between persons of one family graph.
///
/// Cheap to share: the graph is held behind an `Arc` and never mutated.
pub struct KinshipEngine<G: FamilyGraph> {
    graph: Arc<G>,
    policy: KinshipPolicy,
}

impl<G: FamilyGraph> KinshipEngine<G> {
    /// Create an engine over `graph`.
    pub fn new(graph: Arc<G>, policy: KinshipPolicy) -> Self {
        Self { graph, policy }
    }

    /// Describe what `target` is to `subject`.
    pub fn describe(&self, subject: PersonId, target: PersonId) -> Result<Description, KinshipError> {
        let subject_person = self
            .graph
            .person(subject)
            .ok_or(KinshipError::PersonNotFound(subject))?;
        let target_person = self
            .graph
            .person(target)
            .ok_or(KinshipError::PersonNotFound(target))?;

        let ancestry_a = ancestors_of(self.graph.as_ref(), subject);
        let ancestry_b = ancestors_of(self.graph.as_ref(), target);
        let blood = lowest_common_ancestor(&ancestry_a, &ancestry_b);
        let cycle_detected = ancestry_a.cycle_detected() || ancestry_b.cycle_detected();

        let Some(path) = self.shortest_path(subject, target) else {
            debug!(
                subject = %subject,
                target = %target,
                max_path_length = self.policy.max_path_length,
                "No connecting path"
            );
            return Ok(Description {
                blood,
                cycle_detected,
                ..Description::unrelated(subject_person, target_person)
            });
        };

        let term = self.term_for_path(&path, 0);

        debug!(
            subject = %subject,
            target = %target,
            path_len = path.len(),
            term = ?term.as_ref().map(KinshipTerm::label),
            "Described relation"
        );

        Ok(Description {
            subject,
            target,
            label: term.as_ref().map(KinshipTerm::label),
            gloss: term.as_ref().map(KinshipTerm::gloss),
            narrative: narrative::explain(&path, term.as_ref()),
            term,
            path: path.ids(),
            blood,
            cycle_detected,
        })
    }

    /// Just the term of `target` relative to `subject`.
    pub fn term(&self, subject: PersonId, target: PersonId) -> Result<Option<KinshipTerm>, KinshipError> {
        Ok(self.describe(subject, target)?.term)
    }

    /// Shortest connecting path under this engine's policy.
    pub fn shortest_path(&self, from: PersonId, to: PersonId) -> Option<KinPath> {
        PathFinder::new(self.graph.as_ref(), self.policy.max_path_length).shortest_path(from, to)
    }

    /// Get the policy.
    pub fn policy(&self) -> &KinshipPolicy {
        &self.policy
    }

    /// Get a reference to the graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Classify a path, replacing the generic fallback with the
    /// common-ancestor reading when one exists.
    fn term_for_path(&self, path: &KinPath, depth: usize) -> Option<KinshipTerm> {
        let resolver = Resolver { engine: self, depth };
        let term = classify(path, &self.policy, &resolver)?;
        if term.is_generic() {
            if let Some(reading) = self.blood_reading(path.start(), path.end()) {
                debug!(
                    subject = %path.start().id,
                    target = %path.end().id,
                    reading = %reading,
                    "Generic path term replaced by blood reading"
                );
                return Some(reading);
            }
        }
        Some(term)
    }

    fn blood_reading(&self, subject: &Person, target: &Person) -> Option<KinshipTerm> {
        let graph = self.graph.as_ref();
        let common = lowest_common_ancestor(
            &ancestors_of(graph, subject.id),
            &ancestors_of(graph, target.id),
        )?;
        Some(classify_blood(graph, subject, target, &common, self.policy.seniority_fallback))
    }
}

/// Answers classifier sub-queries at a given nesting depth.
struct Resolver<'e, G: FamilyGraph> {
    engine: &'e KinshipEngine<G>,
    depth: usize,
}

impl<G: FamilyGraph> Resolver<'_, G> {
    fn within_bound(&self) -> bool {
        if self.depth >= self.engine.policy.max_recursion_depth {
            debug!(depth = self.depth, "Recursion bound reached");
            return false;
        }
        true
    }
}

impl<G: FamilyGraph> SubQuery for Resolver<'_, G> {
    fn resolve_path(&self, path: &KinPath) -> Option<KinshipTerm> {
        if !self.within_bound() {
            return None;
        }
        self.engine.term_for_path(path, self.depth + 1)
    }

    fn resolve_pair(&self, from: PersonId, to: PersonId) -> Option<KinshipTerm> {
        if !self.within_bound() {
            return None;
        }
        let path = self.engine.shortest_path(from, to)?;
        self.engine.term_for_path(&path, self.depth + 1)
    }
}
