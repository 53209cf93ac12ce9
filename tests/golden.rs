//! Golden tests for the Kinship Kernel.
//!
//! These tests pin the Vietnamese term produced for every relation in a
//! five-generation fixture family, plus determinism of the snapshot and
//! the engine.

use std::sync::Arc;
use chrono::NaiveDate;
use kinship_kernel::{
    FamilyId, FamilySnapshot, Gender, KinshipEngine, KinshipError, KinshipPolicy, KinshipTerm,
    Lineage, Person, PersonId, SeniorityFallback, Seniority, SiblingKind, SnapshotInput,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

const NGUYEN: FamilyId = FamilyId::new(1);
const TRAN: FamilyId = FamilyId::new(2);

// Generation 0
const CU_TO: u64 = 1;
const CU_BA: u64 = 2;
// Generation 1
const TAM: u64 = 10; // G: paternal grandfather
const HOA: u64 = 11;
const LOC: u64 = 12; // Tâm's younger brother
// Generation 2
const HUNG: u64 = 20; // F: father
const MAI: u64 = 21; // mother
const DUNG: u64 = 22; // U: father's younger brother
const THU: u64 = 23; // W: U's wife
const BINH: u64 = 24; // father's elder brother
const HANH: u64 = 25; // Bình's wife
const LAN: u64 = 26; // father's younger sister
const PHONG: u64 = 27; // Lan's husband
const OANH: u64 = 28; // mother of the father's other son
const KHAI: u64 = 30; // maternal grandfather
const NGA: u64 = 31; // maternal grandmother
const TUAN: u64 = 32; // mother's elder brother
const HUONG: u64 = 33; // mother's younger sister
const SON: u64 = 34; // mother's younger brother
const THAO: u64 = 35; // Sơn's wife
const HAI: u64 = 60; // Lộc's son, father's cousin
// Generation 3
const MINH: u64 = 40; // X: the usual subject
const LINH: u64 = 41; // younger sister
const KHOA: u64 = 42; // Dũng's son, born before Minh
const QUANG: u64 = 43; // Bình's son, born after Minh
const NAM: u64 = 44; // paternal half-brother
const NGOC: u64 = 45; // Minh's wife
const BAO: u64 = 46; // Ngọc's father
const YEN: u64 = 47; // Ngọc's mother
const VY: u64 = 48; // Ngọc's elder sister
const DUC: u64 = 49; // Linh's husband
const KIEN: u64 = 61; // Hải's son, second cousin, born before Minh
// Generation 4
const AN: u64 = 50; // Minh's son

const STRANGER: u64 = 100;

fn id(n: u64) -> PersonId {
    PersonId::new(n)
}

fn born(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}

fn male(n: u64, name: &str, year: i32) -> Person {
    Person::new(id(n), name, Gender::Male, NGUYEN).born(born(year))
}

fn female(n: u64, name: &str, year: i32) -> Person {
    Person::new(id(n), name, Gender::Female, NGUYEN).born(born(year))
}

fn child_of(person: Person, father: u64, mother: u64) -> Person {
    person.with_father(id(father)).with_mother(id(mother))
}

fn fixture() -> SnapshotInput {
    SnapshotInput::new()
        .person(male(CU_TO, "Cụ Tổ", 1905))
        .person(female(CU_BA, "Cụ Bà", 1908))
        .person(child_of(male(TAM, "Tâm", 1930), CU_TO, CU_BA))
        .person(female(HOA, "Hoa", 1932))
        .person(child_of(male(LOC, "Lộc", 1935), CU_TO, CU_BA))
        .person(child_of(male(HUNG, "Hùng", 1960), TAM, HOA))
        .person(child_of(female(MAI, "Mai", 1962), KHAI, NGA))
        .person(child_of(male(DUNG, "Dũng", 1965), TAM, HOA))
        .person(female(THU, "Thu", 1967))
        .person(child_of(male(BINH, "Bình", 1955), TAM, HOA))
        .person(female(HANH, "Hạnh", 1956))
        .person(child_of(female(LAN, "Lan", 1963), TAM, HOA))
        .person(male(PHONG, "Phong", 1961))
        .person(female(OANH, "Oanh", 1961))
        .person(male(KHAI, "Khải", 1933))
        .person(female(NGA, "Nga", 1936))
        .person(child_of(male(TUAN, "Tuấn", 1958), KHAI, NGA))
        .person(child_of(female(HUONG, "Hương", 1966), KHAI, NGA))
        .person(child_of(male(SON, "Sơn", 1964), KHAI, NGA))
        .person(female(THAO, "Thảo", 1965))
        .person(male(HAI, "Hải", 1962).with_father(id(LOC)))
        .person(child_of(male(MINH, "Minh", 1990), HUNG, MAI))
        .person(child_of(female(LINH, "Linh", 1993), HUNG, MAI))
        .person(child_of(male(KHOA, "Khoa", 1988), DUNG, THU))
        .person(male(QUANG, "Quang", 1992).with_father(id(BINH)).with_mother(id(HANH)))
        .person(child_of(male(NAM, "Nam", 1985), HUNG, OANH))
        .person(child_of(female(NGOC, "Ngọc", 1992), BAO, YEN))
        .person(male(BAO, "Bảo", 1960))
        .person(female(YEN, "Yến", 1963))
        .person(child_of(female(VY, "Vy", 1988), BAO, YEN))
        .person(male(DUC, "Đức", 1991))
        .person(male(KIEN, "Kiên", 1985).with_father(id(HAI)))
        .person(child_of(male(AN, "An", 2018), MINH, NGOC))
        .person(Person::new(id(STRANGER), "Trần Văn An", Gender::Male, TRAN))
        .marriage(id(CU_TO), id(CU_BA))
        .marriage(id(TAM), id(HOA))
        .marriage(id(HUNG), id(MAI))
        .marriage(id(DUNG), id(THU))
        .marriage(id(BINH), id(HANH))
        .marriage(id(LAN), id(PHONG))
        .marriage(id(KHAI), id(NGA))
        .marriage(id(SON), id(THAO))
        .marriage(id(MINH), id(NGOC))
        .marriage(id(BAO), id(YEN))
        .marriage(id(LINH), id(DUC))
}

fn engine() -> KinshipEngine<FamilySnapshot> {
    let snapshot = FamilySnapshot::build(fixture()).unwrap();
    KinshipEngine::new(Arc::new(snapshot), KinshipPolicy::default())
}

fn term(engine: &KinshipEngine<FamilySnapshot>, a: u64, b: u64) -> KinshipTerm {
    engine
        .term(id(a), id(b))
        .unwrap()
        .unwrap_or_else(|| panic!("no term for {} -> {}", a, b))
}

fn label(engine: &KinshipEngine<FamilySnapshot>, a: u64, b: u64) -> String {
    term(engine, a, b).to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Core Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_self_is_oneself() {
    let engine = engine();
    for n in [CU_TO, HUNG, MINH, AN, STRANGER] {
        assert_eq!(term(&engine, n, n), KinshipTerm::Oneself);
    }
}

#[test]
fn test_grandfather_scenario() {
    let engine = engine();

    assert_eq!(
        term(&engine, MINH, TAM),
        KinshipTerm::Grandparent { gender: Gender::Male, lineage: Lineage::Paternal }
    );
    assert_eq!(label(&engine, MINH, TAM), "Ông nội");
    assert_eq!(term(&engine, MINH, TAM).gloss(), "paternal grandfather");

    assert_eq!(label(&engine, TAM, MINH), "Cháu trai");
    assert_eq!(label(&engine, TAM, LINH), "Cháu gái");
}

#[test]
fn test_uncle_scenario() {
    let engine = engine();

    assert_eq!(label(&engine, MINH, DUNG), "Chú");
    assert_eq!(term(&engine, MINH, DUNG).gloss(), "junior paternal uncle");
    assert_eq!(
        term(&engine, DUNG, MINH),
        KinshipTerm::NephewOrNiece { gender: Gender::Male, collateral: false }
    );
    assert_eq!(label(&engine, DUNG, LINH), "Cháu gái");
}

#[test]
fn test_uncle_wife_scenario() {
    let engine = engine();

    let thim = term(&engine, MINH, THU);
    assert_eq!(thim.to_string(), "Thím");
    assert_eq!(thim.gloss(), "wife of junior paternal uncle");
    assert_ne!(thim.to_string(), label(&engine, MINH, LAN));
    assert_eq!(thim.strip_spouse(), Some(&term(&engine, MINH, DUNG)));
}

#[test]
fn test_parent_and_child() {
    let engine = engine();

    assert_eq!(label(&engine, MINH, HUNG), "Cha");
    assert_eq!(label(&engine, MINH, MAI), "Mẹ");
    assert_eq!(label(&engine, HUNG, MINH), "Con trai");
    assert_eq!(label(&engine, HUNG, LINH), "Con gái");
}

// ─────────────────────────────────────────────────────────────────────────────
// Lineal Terms
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_maternal_grandparents() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, KHAI), "Ông ngoại");
    assert_eq!(label(&engine, MINH, NGA), "Bà ngoại");
    assert_eq!(label(&engine, MINH, HOA), "Bà nội");
}

#[test]
fn test_deep_lineal_terms() {
    let engine = engine();
    assert_eq!(label(&engine, AN, TAM), "Cụ ông");
    assert_eq!(label(&engine, AN, CU_TO), "Tổ tiên (4 đời)");
    assert_eq!(label(&engine, TAM, AN), "Chắt");
    assert_eq!(label(&engine, CU_TO, AN), "Chút");
}

// ─────────────────────────────────────────────────────────────────────────────
// Siblings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_siblings_swap_seniority() {
    let engine = engine();

    let younger = term(&engine, MINH, LINH);
    let elder = term(&engine, LINH, MINH);
    assert_eq!(younger.to_string(), "Em gái ruột");
    assert_eq!(elder.to_string(), "Anh ruột");
    assert_eq!(younger.seniority(), Some(Seniority::Younger));
    assert_eq!(elder.seniority(), Some(Seniority::Elder));
}

#[test]
fn test_half_sibling() {
    let engine = engine();

    assert_eq!(
        term(&engine, MINH, NAM),
        KinshipTerm::Sibling {
            gender: Gender::Male,
            seniority: Seniority::Elder,
            kind: SiblingKind::PaternalHalf,
        }
    );
    assert_eq!(label(&engine, MINH, NAM), "Anh cùng cha khác mẹ");
    assert_eq!(label(&engine, NAM, LINH), "Em gái cùng cha khác mẹ");
}

// ─────────────────────────────────────────────────────────────────────────────
// Uncles, Aunts, Cousins
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_paternal_slots() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, BINH), "Bác");
    assert_eq!(label(&engine, MINH, LAN), "Cô");
    assert_eq!(label(&engine, MINH, HANH), "Bác gái");
    assert_eq!(label(&engine, MINH, PHONG), "Dượng");
}

#[test]
fn test_maternal_slots() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, TUAN), "Bác");
    assert_eq!(label(&engine, MINH, SON), "Cậu");
    assert_eq!(label(&engine, MINH, HUONG), "Dì");
    assert_eq!(label(&engine, MINH, THAO), "Mợ");
}

#[test]
fn test_first_cousin_seniority_follows_parents() {
    let engine = engine();

    // Khoa is older than Minh, but his father is the younger brother
    assert_eq!(label(&engine, MINH, KHOA), "Em trai họ (con chú/cô/dì/cậu)");
    assert_eq!(label(&engine, KHOA, MINH), "Anh họ (con bác)");
    // Quang is younger than Minh, but his father is the elder brother
    assert_eq!(label(&engine, MINH, QUANG), "Anh họ (con bác)");
}

#[test]
fn test_second_cousin_inherits_parents_polarity() {
    let engine = engine();

    assert_eq!(
        term(&engine, MINH, KIEN),
        KinshipTerm::Cousin { gender: Gender::Male, seniority: Seniority::Younger, degree: 2 }
    );
    assert_eq!(label(&engine, MINH, KIEN), "Em trai họ đời 2");
    assert_eq!(label(&engine, KIEN, MINH), "Anh họ đời 2");
}

#[test]
fn test_two_generation_collaterals() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, LOC), "Ông cố");
    assert_eq!(label(&engine, LOC, MINH), "Cháu cố");
    assert_eq!(label(&engine, MINH, HAI), "Chú họ");
    assert_eq!(label(&engine, HAI, MINH), "Cháu họ");
}

// ─────────────────────────────────────────────────────────────────────────────
// In-laws
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_spouse() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, NGOC), "Vợ");
    assert_eq!(label(&engine, NGOC, MINH), "Chồng");
}

#[test]
fn test_relatives_of_spouse() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, VY), "Chị vợ");
    assert_eq!(label(&engine, MINH, BAO), "Bố vợ");
    assert_eq!(label(&engine, NGOC, HUNG), "Bố chồng");
    assert_eq!(label(&engine, NGOC, MAI), "Mẹ chồng");
}

#[test]
fn test_cousin_of_spouse_takes_suffix() {
    let engine = engine();

    let composed = term(&engine, NGOC, KHOA);
    assert_eq!(composed.to_string(), "Em họ chồng");
    assert_ne!(composed.to_string(), label(&engine, MINH, KHOA));
    assert_eq!(composed.strip_spouse(), Some(&term(&engine, MINH, KHOA)));
    assert_eq!(label(&engine, NGOC, QUANG), "Anh họ chồng");
}

#[test]
fn test_spouses_of_relatives() {
    let engine = engine();
    assert_eq!(label(&engine, MINH, DUC), "Em rể");
    assert_eq!(label(&engine, HUNG, DUC), "Con rể");
    assert_eq!(label(&engine, HUNG, NGOC), "Con dâu");
    assert_eq!(label(&engine, BAO, MINH), "Con rể");
}

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes Without a Specific Term
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_disjoint_families_have_no_term() {
    let engine = engine();

    let description = engine.describe(id(MINH), id(STRANGER)).unwrap();
    assert_eq!(description.term, None);
    assert_eq!(description.label, None);
    assert!(description.path.is_empty());
    assert!(description.blood.is_none());
    assert_eq!(description.narrative, "Không tìm thấy quan hệ giữa Minh và Trần Văn An.");
}

#[test]
fn test_missing_person_is_an_error() {
    let engine = engine();
    assert_eq!(
        engine.describe(id(MINH), id(999)).unwrap_err(),
        KinshipError::PersonNotFound(id(999))
    );
}

#[test]
fn test_unresolved_seniority_gives_neutral_terms() {
    let input = SnapshotInput::new()
        .person(Person::new(id(1), "Ông", Gender::Male, NGUYEN))
        .person(Person::new(id(2), "Cha", Gender::Male, NGUYEN).with_father(id(1)))
        .person(Person::new(id(3), "Chú", Gender::Male, NGUYEN).with_father(id(1)))
        .person(Person::new(id(4), "Con", Gender::Female, NGUYEN).with_father(id(2)));
    let snapshot = Arc::new(FamilySnapshot::build(input).unwrap());

    let by_id = KinshipEngine::new(Arc::clone(&snapshot), KinshipPolicy::default());
    assert_eq!(by_id.term(id(4), id(3)).unwrap().unwrap().to_string(), "Chú");

    let policy = KinshipPolicy::default().with_seniority_fallback(SeniorityFallback::Unresolved);
    let neutral = KinshipEngine::new(snapshot, policy);
    assert_eq!(neutral.term(id(4), id(3)).unwrap().unwrap().to_string(), "Bác/Chú");
}

// ─────────────────────────────────────────────────────────────────────────────
// Description Output
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_description_fields() {
    let engine = engine();
    let description = engine.describe(id(MINH), id(THU)).unwrap();

    assert_eq!(description.label(), Some("Thím"));
    assert_eq!(description.path, vec![id(MINH), id(HUNG), id(TAM), id(DUNG), id(THU)]);
    assert_eq!(
        description.narrative,
        "Thu là thím của Minh. Hùng là cha của Minh; Tâm là cha của Hùng; \
         Dũng là con trai của Tâm; Thu là vợ của Dũng."
    );
    // Thu married into the family and shares no ancestor with Minh
    assert!(description.blood.is_none());
    assert!(!description.cycle_detected);

    let json = serde_json::to_string(&description).unwrap();
    assert!(json.contains("\"label\":\"Thím\""));
}

#[test]
fn test_description_blood_reading() {
    let engine = engine();
    let description = engine.describe(id(MINH), id(KIEN)).unwrap();
    let blood = description.blood.unwrap();
    assert_eq!(blood.ancestor, id(CU_TO));
    assert_eq!((blood.dist_a, blood.dist_b), (3, 3));
}

// ─────────────────────────────────────────────────────────────────────────────
// Determinism Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_describe_determinism() {
    let engine = engine();
    let first = engine.describe(id(MINH), id(VY)).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.describe(id(MINH), id(VY)).unwrap(), first);
    }
}

#[test]
fn test_snapshot_fingerprint_ignores_input_order() {
    let a = FamilySnapshot::build(fixture()).unwrap();

    let mut shuffled = fixture();
    shuffled.persons.reverse();
    shuffled.marriages = shuffled.marriages.into_iter().rev().map(|(x, y)| (y, x)).collect();
    let b = FamilySnapshot::build(shuffled).unwrap();

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.person_count(), 34);
    assert_eq!(a.marriage_count(), 11);
}
