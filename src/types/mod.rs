//! Core types for the kinship kernel.

pub mod person;
pub mod edge;
pub mod path;
pub mod term;

pub use person::{PersonId, FamilyId, Gender, ParentLinks, Person};
pub use edge::{RelationEdge, EdgeKind};
pub use path::{Step, DirectionSignature, KinPath};
pub use term::{KinshipTerm, Lineage, Seniority, SiblingKind, SpouseLink};
