//! Lowest common ancestor of two ancestry maps.

use serde::{Deserialize, Serialize};

use crate::types::PersonId;
use super::ancestry::AncestryMap;

/// Nearest shared ancestor and its distance from each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAncestor {
    /// The shared ancestor.
    pub ancestor: PersonId,
    /// Generations from the first person up to the ancestor.
    pub dist_a: u32,
    /// Generations from the second person up to the ancestor.
    pub dist_b: u32,
}

impl CommonAncestor {
    /// Total generation distance through the ancestor.
    pub fn total(&self) -> u32 {
        self.dist_a + self.dist_b
    }
}

/// Shared ancestor minimizing `dist_a + dist_b`.
///
/// Ties on total distance go to the lowest person id. Identifier order is
/// not a reliable proxy for recency; it only keeps the choice stable.
pub fn lowest_common_ancestor(a: &AncestryMap, b: &AncestryMap) -> Option<CommonAncestor> {
    let mut best: Option<CommonAncestor> = None;

    // ascending id order, so strict comparison keeps the lowest id on ties
    for (ancestor, dist_a) in a.iter() {
        let Some(dist_b) = b.distance(ancestor) else {
            continue;
        };
        let candidate = CommonAncestor { ancestor, dist_a, dist_b };
        if best.map_or(true, |current| candidate.total() < current.total()) {
            best = Some(candidate);
        }
    }

    best
}
