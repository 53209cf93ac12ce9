//! Person types for the kinship kernel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Unique identifier for a person in the family graph.
///
/// Implements `Ord` for deterministic ordering. The ordering doubles as the
/// seniority fallback when birth dates are missing (lower id = older).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Create a new PersonId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a family group (one genealogy tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(u64);

impl FamilyId {
    /// Create a new FamilyId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FamilyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (`male` / `nam`).
    #[serde(alias = "nam")]
    Male,
    /// Female (`female` / `nữ`).
    #[serde(alias = "nữ", alias = "nu")]
    Female,
    /// Any other or unrecorded gender.
    #[serde(other)]
    Other,
}

impl Gender {
    /// Parse gender from string. Unrecognized values map to `Other`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "nam" | "m" => Self::Male,
            "female" | "nữ" | "nu" | "f" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Whether this is `Male`.
    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }

    /// Whether this is `Female`.
    pub fn is_female(&self) -> bool {
        matches!(self, Self::Female)
    }
}

impl Default for Gender {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Father and mother links of a person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentLinks {
    /// Father, if recorded.
    pub father: Option<PersonId>,
    /// Mother, if recorded.
    pub mother: Option<PersonId>,
}

impl ParentLinks {
    /// Create parent links.
    pub fn new(father: Option<PersonId>, mother: Option<PersonId>) -> Self {
        Self { father, mother }
    }

    /// Iterate over the recorded parents, father first.
    pub fn iter(&self) -> impl Iterator<Item = PersonId> {
        self.father.into_iter().chain(self.mother)
    }

    /// Whether no parent is recorded.
    pub fn is_empty(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }
}

/// Snapshot of a person record.
///
/// Contains the fields the classifier reads; everything else about a
/// person belongs to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: PersonId,
    /// Display name used in narratives.
    pub name: String,
    /// Gender.
    pub gender: Gender,
    /// Birth date, if known.
    pub birth_date: Option<NaiveDate>,
    /// Father identifier.
    pub father_id: Option<PersonId>,
    /// Mother identifier.
    pub mother_id: Option<PersonId>,
    /// Family group this person belongs to.
    pub family_id: FamilyId,
}

impl Person {
    /// Create a person without parents or birth date.
    pub fn new(id: PersonId, name: impl Into<String>, gender: Gender, family_id: FamilyId) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            birth_date: None,
            father_id: None,
            mother_id: None,
            family_id,
        }
    }

    /// Set the father.
    pub fn with_father(mut self, father: PersonId) -> Self {
        self.father_id = Some(father);
        self
    }

    /// Set the mother.
    pub fn with_mother(mut self, mother: PersonId) -> Self {
        self.mother_id = Some(mother);
        self
    }

    /// Set the birth date.
    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Parent links of this person.
    pub fn parents(&self) -> ParentLinks {
        ParentLinks::new(self.father_id, self.mother_id)
    }

    /// Compare birth order: `Less` means `self` was born first.
    ///
    /// Returns `None` when either birth date is missing or both are equal,
    /// leaving the decision to the configured seniority fallback.
    pub fn birth_order(&self, other: &Person) -> Option<Ordering> {
        match (self.birth_date, other.birth_date) {
            (Some(a), Some(b)) if a != b => Some(a.cmp(&b)),
            _ => None,
        }
    }
}
