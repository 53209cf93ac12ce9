//! Blood reading from a lowest common ancestor.
//!
//! Classifies two persons purely by their distances to the nearest shared
//! ancestor. The engine uses it when the connecting path matched no
//! specific rule, e.g. a deep collateral line or a pedigree where the
//! shortest path is not the common-ancestor path. Uncles and aunts read
//! this way carry no seniority (Bác/Chú, Cô/Dì).

use crate::graph::{ancestors_of, CommonAncestor, FamilyGraph};
use crate::policy::SeniorityFallback;
use crate::types::{KinshipTerm, Lineage, Person, PersonId, Seniority};

use super::seniority::{seniority_of, sibling_kind};

/// Classify `target` relative to `subject` from their common ancestor.
pub fn classify_blood<G: FamilyGraph + ?Sized>(
    graph: &G,
    subject: &Person,
    target: &Person,
    common: &CommonAncestor,
    fallback: SeniorityFallback,
) -> KinshipTerm {
    let gender = target.gender;
    let (up, down) = (common.dist_a, common.dist_b);
    let side = || subject_side(graph, subject, common.ancestor);

    match (up, down) {
        (0, 0) => KinshipTerm::Oneself,
        (0, 1) => KinshipTerm::Child { gender },
        (0, 2) => KinshipTerm::Grandchild { gender },
        (0, d) => KinshipTerm::Descendant { generations: d },
        (1, 0) => KinshipTerm::Parent { gender },
        (2, 0) => KinshipTerm::Grandparent { gender, lineage: side() },
        (3, 0) => KinshipTerm::GreatGrandparent { gender },
        (u, 0) => KinshipTerm::Ancestor { generations: u },
        (1, 1) => KinshipTerm::Sibling {
            gender,
            seniority: seniority_of(target, subject, fallback),
            kind: sibling_kind(subject, target),
        },
        (u, d) if u == d => KinshipTerm::Cousin {
            gender,
            seniority: seniority_of(target, subject, fallback),
            degree: u - 1,
        },
        (u, d) if u == d + 1 => KinshipTerm::UncleOrAunt {
            gender,
            seniority: Seniority::Unknown,
            lineage: side(),
            collateral: d > 1,
        },
        (u, d) if u == d + 2 => KinshipTerm::GrandUncleOrAunt {
            gender,
            generations: 2,
            collateral: d > 1,
        },
        (u, d) if d == u + 1 => KinshipTerm::NephewOrNiece { gender, collateral: u > 1 },
        (u, d) if d == u + 2 => KinshipTerm::GrandNephewOrNiece {
            gender,
            generations: 2,
            collateral: u > 1,
        },
        (u, d) => KinshipTerm::Relative {
            generations: u as i32 - d as i32,
            distance: u + d,
        },
    }
}

/// Side of the subject's family that leads to `ancestor`.
fn subject_side<G: FamilyGraph + ?Sized>(graph: &G, subject: &Person, ancestor: PersonId) -> Lineage {
    let through_father = subject
        .father_id
        .map(|father| father == ancestor || ancestors_of(graph, father).contains(ancestor))
        .unwrap_or(false);
    if through_father {
        Lineage::Paternal
    } else {
        Lineage::Maternal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{lowest_common_ancestor, FamilySnapshot};
    use crate::types::{FamilyId, Gender};

    fn person(id: u64, gender: Gender) -> Person {
        Person::new(PersonId::new(id), format!("P{}", id), gender, FamilyId::new(1))
    }

    fn id(n: u64) -> PersonId {
        PersonId::new(n)
    }

    fn read(snapshot: &FamilySnapshot, a: u64, b: u64) -> KinshipTerm {
        let subject = snapshot.person(id(a)).unwrap();
        let target = snapshot.person(id(b)).unwrap();
        let common = lowest_common_ancestor(
            &ancestors_of(snapshot, id(a)),
            &ancestors_of(snapshot, id(b)),
        )
        .unwrap();
        classify_blood(snapshot, subject, target, &common, SeniorityFallback::IdentifierOrder)
    }

    /// 1 -> 2 -> 3 and 1 -> 4 on the father's side; 10 -> 11 -> 12 through mothers
    fn family() -> FamilySnapshot {
        FamilySnapshot::from_persons(
            vec![
                person(1, Gender::Male),
                person(2, Gender::Male).with_father(id(1)),
                person(3, Gender::Female).with_father(id(2)),
                person(4, Gender::Female).with_father(id(1)),
                person(10, Gender::Female),
                person(11, Gender::Female).with_mother(id(10)),
                person(12, Gender::Male).with_mother(id(11)),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_lineal_readings() {
        let snapshot = family();
        assert_eq!(read(&snapshot, 3, 2), KinshipTerm::Parent { gender: Gender::Male });
        assert_eq!(
            read(&snapshot, 3, 1),
            KinshipTerm::Grandparent { gender: Gender::Male, lineage: Lineage::Paternal }
        );
        assert_eq!(
            read(&snapshot, 12, 10),
            KinshipTerm::Grandparent { gender: Gender::Female, lineage: Lineage::Maternal }
        );
        assert_eq!(read(&snapshot, 1, 3), KinshipTerm::Grandchild { gender: Gender::Female });
    }

    #[test]
    fn test_uncle_reading_has_no_seniority() {
        let snapshot = family();
        let term = read(&snapshot, 3, 4);
        assert_eq!(
            term,
            KinshipTerm::UncleOrAunt {
                gender: Gender::Female,
                seniority: Seniority::Unknown,
                lineage: Lineage::Paternal,
                collateral: false,
            }
        );
        assert_eq!(term.to_string(), "Bác/Cô");
        assert_eq!(read(&snapshot, 4, 3), KinshipTerm::NephewOrNiece { gender: Gender::Female, collateral: false });
    }
}
