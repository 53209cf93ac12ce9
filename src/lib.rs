//! # kinship-kernel
//!
//! Deterministic kinship term inference over family graphs.
//!
//! The Kinship Kernel answers one question:
//!
//! > Given two persons linked by parent and marriage edges, **what is the
//! > second person to the first**, in Vietnamese terms of address?
//!
//! ## Core Contract
//!
//! 1. Given a subject and a target, find the shortest connecting path (blood lineage first)
//! 2. Reduce the path to a shape and classify it through an exhaustive rule table
//! 3. Return the term, the path, and a step-by-step narrative
//!
//! ## Architecture
//!
//! ```text
//! describe(A, B) → PathFinder → Shape → rule table → KinshipTerm
//!        ↓              ↓                    ↑
//!   AncestryMap → LCA (blood reading)   SubQuery (spouse stripping,
//!                                        distant cousins)
//!        ↑
//!  FamilySnapshot ← KinshipService ← FamilyStore (memory or caller-provided)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same persons + same snapshot + same policy → identical description
//! - Neighbor expansion is canonical (father, mother, children by id, spouses by id)
//! - Snapshot fingerprints are independent of input order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod store;
pub mod graph;
pub mod classify;
pub mod engine;
pub mod narrative;
pub mod canonical;
pub mod service;

// Re-exports
pub use types::{
    PersonId, FamilyId, Gender, ParentLinks, Person,
    RelationEdge, EdgeKind,
    Step, DirectionSignature, KinPath,
    KinshipTerm, Lineage, Seniority, SiblingKind, SpouseLink,
};
pub use policy::{KinshipPolicy, SeniorityFallback};
pub use store::{FamilyStore, InMemoryFamilyStore};
pub use graph::{
    FamilyGraph, FamilySnapshot, SnapshotInput, SnapshotError,
    AncestryMap, ancestors_of, CommonAncestor, lowest_common_ancestor, PathFinder,
};
pub use classify::{classify, classify_blood, Shape, SubQuery};
pub use engine::{Description, KinshipEngine, KinshipError};
pub use service::{KinshipService, ServiceError, CacheStats, load_snapshot};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

/// Schema version for all kinship kernel types.
/// Increment on breaking changes to any schema type.
pub const KINSHIP_SCHEMA_VERSION: &str = "1.0.0";

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "kinship_policy_v1";
