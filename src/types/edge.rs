//! Edge types for the family graph.

use serde::{Deserialize, Serialize};
use super::person::PersonId;

/// Type of edge in the family graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Source is the father of the target.
    FatherOf,
    /// Source is the mother of the target.
    MotherOf,
    /// Source and target are married. Stored in both directions.
    SpouseOf,
}

impl EdgeKind {
    /// Parse edge kind from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FATHER_OF" => Some(Self::FatherOf),
            "MOTHER_OF" => Some(Self::MotherOf),
            "SPOUSE" | "SPOUSE_OF" => Some(Self::SpouseOf),
            _ => None,
        }
    }

    /// Whether this is a parent-of edge.
    pub fn is_parental(&self) -> bool {
        matches!(self, Self::FatherOf | Self::MotherOf)
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FatherOf => write!(f, "FATHER_OF"),
            Self::MotherOf => write!(f, "MOTHER_OF"),
            Self::SpouseOf => write!(f, "SPOUSE_OF"),
        }
    }
}

/// Edge in the family graph.
///
/// Parent edges point from parent to child. Spouse edges are symmetric and
/// are produced in pairs by [`RelationEdge::spouse_pair`].
/// Implements `Ord` for deterministic ordering: (source, target, kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationEdge {
    /// Source person.
    pub source: PersonId,
    /// Target person.
    pub target: PersonId,
    /// Type of edge.
    pub kind: EdgeKind,
}

impl RelationEdge {
    /// Create a new edge.
    pub fn new(source: PersonId, target: PersonId, kind: EdgeKind) -> Self {
        Self { source, target, kind }
    }

    /// Father-of edge.
    pub fn father_of(father: PersonId, child: PersonId) -> Self {
        Self::new(father, child, EdgeKind::FatherOf)
    }

    /// Mother-of edge.
    pub fn mother_of(mother: PersonId, child: PersonId) -> Self {
        Self::new(mother, child, EdgeKind::MotherOf)
    }

    /// Both directed halves of a marriage.
    pub fn spouse_pair(a: PersonId, b: PersonId) -> [Self; 2] {
        [
            Self::new(a, b, EdgeKind::SpouseOf),
            Self::new(b, a, EdgeKind::SpouseOf),
        ]
    }
}

impl PartialOrd for RelationEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RelationEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}
