//! Term classification: path shape to kinship term.
//!
//! ## Algorithm
//!
//! 1. Compute the direction signature of the path (subject to target)
//! 2. Reduce it to a [`Shape`]
//! 3. Dispatch on the shape; collateral shapes go through the `(up, down)`
//!    table in [`rules`]
//! 4. Shapes that need another classification (spouse stripping, distant
//!    cousins) ask the caller through [`SubQuery`]
//!
//! The classifier never reads the graph itself. Everything it needs is on
//! the path or comes back from a sub-query, which keeps graph access and
//! recursion bounds with the engine.

pub mod shape;
pub mod rules;
pub mod seniority;
pub mod spouse;
pub mod blood;

use tracing::debug;

use crate::policy::KinshipPolicy;
use crate::types::{KinPath, KinshipTerm, PersonId};

pub use blood::classify_blood;
pub use rules::{collateral_rule, CollateralRule};
pub use seniority::{seniority_of, sibling_kind};
pub use shape::Shape;

/// Classifications the classifier delegates back to the engine.
pub trait SubQuery {
    /// Classify a truncated path (same persons, fewer steps).
    fn resolve_path(&self, path: &KinPath) -> Option<KinshipTerm>;

    /// Classify the relation of `to` relative to `from` from scratch.
    fn resolve_pair(&self, from: PersonId, to: PersonId) -> Option<KinshipTerm>;
}

/// Classify the target of `path` relative to its start.
///
/// Returns `None` only when a delegated sub-query could not be answered
/// (recursion bound reached). Unmatched shapes yield the generic
/// [`KinshipTerm::Relative`] term.
pub fn classify(path: &KinPath, policy: &KinshipPolicy, sub: &dyn SubQuery) -> Option<KinshipTerm> {
    let signature = path.signature();
    let shape = Shape::of(&signature);

    let term = match shape {
        Shape::Empty => KinshipTerm::Oneself,
        Shape::Marriage => KinshipTerm::Spouse { gender: path.end().gender },
        Shape::Lineal { up } => rules::lineal(path, up),
        Shape::Descendant { down } => rules::descendant(path, down),
        Shape::Collateral { up, down } => rules::collateral(path, up, down, policy, sub),
        Shape::SpouseTerminal => spouse::terminal(path, sub)?,
        Shape::SpouseInitial => spouse::initial(path, sub)?,
        Shape::Irregular => rules::generic(&signature),
    };

    debug!(
        signature = %signature,
        shape = ?shape,
        term = %term,
        "Classified path"
    );

    Some(term)
}
