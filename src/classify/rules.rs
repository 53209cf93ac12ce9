//! Rule table for blood shapes.
//!
//! Collateral shapes `Up^u Down^d` are keyed by `(u, d)` through
//! [`collateral_rule`]. Every pair outside the table maps to
//! [`CollateralRule::Unmatched`], which the classifier turns into the
//! generic relative term.

use crate::policy::KinshipPolicy;
use crate::types::{DirectionSignature, KinPath, KinshipTerm, Lineage};

use super::seniority::{seniority_of, sibling_kind};
use super::SubQuery;

/// Rule selected for a collateral `(up, down)` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollateralRule {
    /// `(1, 1)`.
    Sibling,
    /// `(k + 1, k)` for k = 1, 2, 3.
    UncleOrAunt {
        /// Path lengths 5 and 7.
        collateral: bool,
    },
    /// `(k, k + 1)` for k = 1, 2, 3.
    NephewOrNiece {
        /// Path lengths 5 and 7.
        collateral: bool,
    },
    /// `(2, 2)`.
    FirstCousin,
    /// `(n, n)` for n >= 3; seniority inherited from the parents' relation.
    DistantCousin {
        /// `n - 1`.
        degree: u32,
    },
    /// `(3, 1)`, `(4, 1)`, `(4, 2)`.
    GrandUncleOrAunt {
        /// Generations above the subject's parent.
        generations: u32,
        /// Only for `(4, 2)`.
        collateral: bool,
    },
    /// `(1, 3)`, `(1, 4)`, `(2, 4)`.
    GrandNephewOrNiece {
        /// Generations below the subject's child.
        generations: u32,
        /// Only for `(2, 4)`.
        collateral: bool,
    },
    /// No specific term.
    Unmatched,
}

/// Look up the collateral rule for `(up, down)`.
pub fn collateral_rule(up: usize, down: usize) -> CollateralRule {
    use CollateralRule::*;

    match (up, down) {
        (1, 1) => Sibling,
        (2, 1) => UncleOrAunt { collateral: false },
        (3, 2) | (4, 3) => UncleOrAunt { collateral: true },
        (1, 2) => NephewOrNiece { collateral: false },
        (2, 3) | (3, 4) => NephewOrNiece { collateral: true },
        (2, 2) => FirstCousin,
        (n, m) if n == m && n >= 3 => DistantCousin { degree: (n - 1) as u32 },
        (3, 1) => GrandUncleOrAunt { generations: 2, collateral: false },
        (4, 1) => GrandUncleOrAunt { generations: 3, collateral: false },
        (4, 2) => GrandUncleOrAunt { generations: 2, collateral: true },
        (1, 3) => GrandNephewOrNiece { generations: 2, collateral: false },
        (1, 4) => GrandNephewOrNiece { generations: 3, collateral: false },
        (2, 4) => GrandNephewOrNiece { generations: 2, collateral: true },
        _ => Unmatched,
    }
}

/// `Up^n`: the target is an ancestor of the subject.
pub fn lineal(path: &KinPath, up: usize) -> KinshipTerm {
    let gender = path.end().gender;
    match up {
        1 => KinshipTerm::Parent { gender },
        2 => KinshipTerm::Grandparent {
            gender,
            lineage: Lineage::from_parent_gender(path.nodes()[1].gender),
        },
        3 => KinshipTerm::GreatGrandparent { gender },
        n => KinshipTerm::Ancestor { generations: n as u32 },
    }
}

/// `Down^n`: the target is a descendant of the subject.
pub fn descendant(path: &KinPath, down: usize) -> KinshipTerm {
    let gender = path.end().gender;
    match down {
        1 => KinshipTerm::Child { gender },
        2 => KinshipTerm::Grandchild { gender },
        n => KinshipTerm::Descendant { generations: n as u32 },
    }
}

/// `Up^u Down^d` with both sides non-empty.
///
/// `nodes[up]` is the shared ancestor; `nodes[up - 1]` and `nodes[up + 1]`
/// are the heads of the subject's and the target's branches.
pub fn collateral(
    path: &KinPath,
    up: usize,
    down: usize,
    policy: &KinshipPolicy,
    sub: &dyn SubQuery,
) -> KinshipTerm {
    let nodes = path.nodes();
    let subject = path.start();
    let target = path.end();
    let gender = target.gender;
    let fallback = policy.seniority_fallback;
    let branch_seniority = || seniority_of(&nodes[up + 1], &nodes[up - 1], fallback);

    match collateral_rule(up, down) {
        CollateralRule::Sibling => KinshipTerm::Sibling {
            gender,
            seniority: seniority_of(target, subject, fallback),
            kind: sibling_kind(subject, target),
        },
        CollateralRule::UncleOrAunt { collateral } => KinshipTerm::UncleOrAunt {
            gender,
            seniority: branch_seniority(),
            lineage: Lineage::from_parent_gender(nodes[1].gender),
            collateral,
        },
        CollateralRule::NephewOrNiece { collateral } => {
            KinshipTerm::NephewOrNiece { gender, collateral }
        }
        CollateralRule::FirstCousin => KinshipTerm::Cousin {
            gender,
            seniority: branch_seniority(),
            degree: 1,
        },
        CollateralRule::DistantCousin { degree } => {
            let subject_parent = nodes[1].id;
            let target_parent = nodes[nodes.len() - 2].id;
            let seniority = sub
                .resolve_pair(subject_parent, target_parent)
                .and_then(|term| term.seniority())
                .unwrap_or_else(branch_seniority);
            KinshipTerm::Cousin { gender, seniority, degree }
        }
        CollateralRule::GrandUncleOrAunt { generations, collateral } => {
            KinshipTerm::GrandUncleOrAunt { gender, generations, collateral }
        }
        CollateralRule::GrandNephewOrNiece { generations, collateral } => {
            KinshipTerm::GrandNephewOrNiece { gender, generations, collateral }
        }
        CollateralRule::Unmatched => generic(&path.signature()),
    }
}

/// The generic "related, n generations removed" term.
pub fn generic(signature: &DirectionSignature) -> KinshipTerm {
    KinshipTerm::Relative {
        generations: signature.generation_offset(),
        distance: signature.len() as u32,
    }
}
