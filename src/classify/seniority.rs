//! Seniority and sibling-kind decisions.

use std::cmp::Ordering;

use crate::policy::SeniorityFallback;
use crate::types::{Person, Seniority, SiblingKind};

/// Seniority of `target` relative to `reference`.
///
/// Birth dates decide when both are known and distinct; otherwise the
/// configured fallback applies.
pub fn seniority_of(target: &Person, reference: &Person, fallback: SeniorityFallback) -> Seniority {
    match target.birth_order(reference) {
        Some(Ordering::Less) => Seniority::Elder,
        Some(_) => Seniority::Younger,
        None => match fallback {
            SeniorityFallback::IdentifierOrder => match target.id.cmp(&reference.id) {
                Ordering::Less => Seniority::Elder,
                Ordering::Greater => Seniority::Younger,
                Ordering::Equal => Seniority::Unknown,
            },
            SeniorityFallback::Unresolved => Seniority::Unknown,
        },
    }
}

/// Whether two persons share both parent links, or only one.
pub fn sibling_kind(a: &Person, b: &Person) -> SiblingKind {
    if a.parents() == b.parents() {
        return SiblingKind::Full;
    }
    let same_father = a.father_id.is_some() && a.father_id == b.father_id;
    if same_father {
        SiblingKind::PaternalHalf
    } else {
        SiblingKind::MaternalHalf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FamilyId, Gender, PersonId};
    use chrono::NaiveDate;

    fn person(id: u64) -> Person {
        Person::new(PersonId::new(id), format!("P{}", id), Gender::Female, FamilyId::new(1))
    }

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 6, 1).unwrap()
    }

    #[test]
    fn test_birth_dates_decide() {
        // higher id but born earlier
        let a = person(9).born(date(1970));
        let b = person(2).born(date(1975));
        assert_eq!(seniority_of(&a, &b, SeniorityFallback::IdentifierOrder), Seniority::Elder);
        assert_eq!(seniority_of(&b, &a, SeniorityFallback::IdentifierOrder), Seniority::Younger);
    }

    #[test]
    fn test_identifier_fallback() {
        let a = person(2);
        let b = person(9).born(date(1975));
        assert_eq!(seniority_of(&a, &b, SeniorityFallback::IdentifierOrder), Seniority::Elder);
        assert_eq!(seniority_of(&a, &b, SeniorityFallback::Unresolved), Seniority::Unknown);
    }

    #[test]
    fn test_equal_birth_dates_use_fallback() {
        let a = person(5).born(date(1980));
        let b = person(4).born(date(1980));
        assert_eq!(seniority_of(&a, &b, SeniorityFallback::IdentifierOrder), Seniority::Younger);
    }

    #[test]
    fn test_sibling_kind() {
        let f = PersonId::new(1);
        let m = PersonId::new(2);
        let m2 = PersonId::new(3);
        let full_a = person(10).with_father(f).with_mother(m);
        let full_b = person(11).with_father(f).with_mother(m);
        let paternal = person(12).with_father(f).with_mother(m2);
        let maternal = person(13).with_mother(m);

        assert_eq!(sibling_kind(&full_a, &full_b), SiblingKind::Full);
        assert_eq!(sibling_kind(&full_a, &paternal), SiblingKind::PaternalHalf);
        assert_eq!(sibling_kind(&full_a, &maternal), SiblingKind::MaternalHalf);
    }
}
