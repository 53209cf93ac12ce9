//! Kinship terms.
//!
//! A [`KinshipTerm`] is the structured result of classification. It renders
//! to the Vietnamese form of address through `Display` and to an English
//! gloss through [`KinshipTerm::gloss`]. Gendered slots take the gender of
//! the person being named (the target), with a neutral form for
//! [`Gender::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::person::Gender;

/// Side of the family a relative is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    /// Through the father (nội).
    Paternal,
    /// Through the mother (ngoại).
    Maternal,
}

impl Lineage {
    /// Lineage implied by the gender of the connecting parent.
    ///
    /// Only a male connecting parent makes the side paternal.
    pub fn from_parent_gender(gender: Gender) -> Self {
        if gender.is_male() {
            Self::Paternal
        } else {
            Self::Maternal
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Self::Paternal => "nội",
            Self::Maternal => "ngoại",
        }
    }

    fn gloss(&self) -> &'static str {
        match self {
            Self::Paternal => "paternal",
            Self::Maternal => "maternal",
        }
    }
}

/// Relative seniority of the target (or of the target's line) versus the
/// subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    /// The target ranks above the subject (anh/chị, bác).
    Elder,
    /// The target ranks below the subject (em, chú/cô/cậu/dì).
    Younger,
    /// Birth order could not be established.
    Unknown,
}

impl Seniority {
    /// The same relation seen from the other side.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Elder => Self::Younger,
            Self::Younger => Self::Elder,
            Self::Unknown => Self::Unknown,
        }
    }
}

/// How many parents two siblings share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingKind {
    /// Both parents shared.
    Full,
    /// Only the father shared.
    PaternalHalf,
    /// Only the mother shared.
    MaternalHalf,
}

/// Which end of the path the stripped marriage sat on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpouseLink {
    /// The target is the spouse of one of the subject's relatives.
    OfRelative,
    /// The target is a relative of the subject's spouse.
    OfSpouse,
}

/// The kinship term the target holds relative to the subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KinshipTerm {
    /// Same person.
    Oneself,
    /// Husband or wife.
    Spouse {
        /// Gender of the spouse.
        gender: Gender,
    },
    /// Father or mother.
    Parent {
        /// Gender of the parent.
        gender: Gender,
    },
    /// Grandparent on the given side.
    Grandparent {
        /// Gender of the grandparent.
        gender: Gender,
        /// Side, from the gender of the connecting parent.
        lineage: Lineage,
    },
    /// Great-grandparent.
    GreatGrandparent {
        /// Gender of the great-grandparent.
        gender: Gender,
    },
    /// Lineal ancestor four or more generations up.
    Ancestor {
        /// Generations between subject and ancestor.
        generations: u32,
    },
    /// Son or daughter.
    Child {
        /// Gender of the child.
        gender: Gender,
    },
    /// Grandson or granddaughter.
    Grandchild {
        /// Gender of the grandchild.
        gender: Gender,
    },
    /// Lineal descendant three or more generations down.
    Descendant {
        /// Generations between subject and descendant.
        generations: u32,
    },
    /// Brother or sister.
    Sibling {
        /// Gender of the sibling.
        gender: Gender,
        /// Birth order of the sibling versus the subject.
        seniority: Seniority,
        /// Full or half sibling.
        kind: SiblingKind,
    },
    /// Parent's sibling (or, when `collateral`, parent's cousin).
    UncleOrAunt {
        /// Gender of the uncle or aunt.
        gender: Gender,
        /// Their branch versus the subject's parent's branch.
        seniority: Seniority,
        /// Side, from the gender of the subject's parent.
        lineage: Lineage,
        /// Reached through a cousin of the parent ("họ").
        collateral: bool,
    },
    /// Sibling's child (or, when `collateral`, cousin's child).
    NephewOrNiece {
        /// Gender of the nephew or niece.
        gender: Gender,
        /// Child of a cousin rather than of a sibling.
        collateral: bool,
    },
    /// Grandparent's sibling (`generations` = 2) or great-grandparent's
    /// sibling (`generations` = 3); `collateral` for grandparent's cousin.
    GrandUncleOrAunt {
        /// Gender of the grand-uncle or grand-aunt.
        gender: Gender,
        /// Generations above the subject's parent.
        generations: u32,
        /// Reached through a cousin of the grandparent.
        collateral: bool,
    },
    /// Mirror of [`KinshipTerm::GrandUncleOrAunt`].
    GrandNephewOrNiece {
        /// Gender of the grand-nephew or grand-niece.
        gender: Gender,
        /// Generations below the subject's child.
        generations: u32,
        /// Descends from a cousin rather than a sibling.
        collateral: bool,
    },
    /// Same-generation cousin of the given degree (1 = first cousin).
    Cousin {
        /// Gender of the cousin.
        gender: Gender,
        /// Seniority of the cousin's line versus the subject's.
        seniority: Seniority,
        /// Cousin degree.
        degree: u32,
    },
    /// A term composed across a marriage.
    InLaw {
        /// Term of the relative on the blood side of the marriage.
        partner: Box<KinshipTerm>,
        /// Which end of the path the marriage sat on.
        link: SpouseLink,
        /// Gender of the married-in side: the target for
        /// [`SpouseLink::OfRelative`], the subject's spouse for
        /// [`SpouseLink::OfSpouse`].
        spouse_gender: Gender,
    },
    /// Generic fallback for connected persons matching no specific rule.
    Relative {
        /// Generation offset of the target (positive = older).
        generations: i32,
        /// Number of steps on the connecting path.
        distance: u32,
    },
}

impl KinshipTerm {
    /// Vietnamese form of address.
    pub fn label(&self) -> String {
        match self {
            Self::Oneself => "Bản thân".into(),
            Self::Spouse { gender } => gendered(*gender, "Chồng", "Vợ", "Vợ/Chồng").into(),
            Self::Parent { gender } => gendered(*gender, "Cha", "Mẹ", "Cha/Mẹ").into(),
            Self::Grandparent { gender, lineage } => {
                format!("{} {}", gendered(*gender, "Ông", "Bà", "Ông/Bà"), lineage.suffix())
            }
            Self::GreatGrandparent { gender } => gendered(*gender, "Cụ ông", "Cụ bà", "Cụ").into(),
            Self::Ancestor { generations } => format!("Tổ tiên ({} đời)", generations),
            Self::Child { gender } => gendered(*gender, "Con trai", "Con gái", "Con").into(),
            Self::Grandchild { gender } => gendered(*gender, "Cháu trai", "Cháu gái", "Cháu").into(),
            Self::Descendant { generations } => match generations {
                3 => "Chắt".into(),
                4 => "Chút".into(),
                5 => "Chít".into(),
                n => format!("Hậu duệ ({} đời)", n),
            },
            Self::Sibling { gender, seniority, kind } => {
                let base = sibling_word(*gender, *seniority);
                let suffix = match kind {
                    SiblingKind::Full => "ruột",
                    SiblingKind::PaternalHalf => "cùng cha khác mẹ",
                    SiblingKind::MaternalHalf => "cùng mẹ khác cha",
                };
                format!("{} {}", base, suffix)
            }
            Self::UncleOrAunt { gender, seniority, lineage, collateral } => {
                let rank = uncle_word(*gender, *seniority, *lineage);
                with_collateral(rank, *collateral)
            }
            Self::NephewOrNiece { gender, collateral } => {
                if *collateral {
                    "Cháu họ".into()
                } else {
                    gendered(*gender, "Cháu trai", "Cháu gái", "Cháu").into()
                }
            }
            Self::GrandUncleOrAunt { gender, generations, collateral } => {
                match (generations, collateral) {
                    (2, false) => gendered(*gender, "Ông cố", "Bà cố", "Ông/Bà cố").into(),
                    (_, false) => gendered(*gender, "Cụ", "Bà cụ", "Cụ").into(),
                    (_, true) => gendered(*gender, "Ông họ", "Bà họ", "Ông/Bà họ").into(),
                }
            }
            Self::GrandNephewOrNiece { collateral, .. } => {
                if *collateral { "Cháu họ" } else { "Cháu cố" }.into()
            }
            Self::Cousin { gender, seniority, degree } => cousin_label(*gender, *seniority, *degree),
            Self::InLaw { partner, link, spouse_gender } => match link {
                SpouseLink::OfRelative => relative_spouse_label(partner, *spouse_gender),
                SpouseLink::OfSpouse => spouse_relative_label(partner, *spouse_gender),
            },
            Self::Relative { generations, distance } => match generations {
                g if *g > 0 => format!("Họ hàng trên {} đời", g),
                g if *g < 0 => format!("Họ hàng dưới {} đời", -g),
                _ => format!("Họ hàng ({} bậc)", distance),
            },
        }
    }

    /// English gloss, e.g. "paternal grandfather" or "wife of junior paternal uncle".
    pub fn gloss(&self) -> String {
        match self {
            Self::Oneself => "self".into(),
            Self::Spouse { gender } => gendered(*gender, "husband", "wife", "spouse").into(),
            Self::Parent { gender } => gendered(*gender, "father", "mother", "parent").into(),
            Self::Grandparent { gender, lineage } => format!(
                "{} {}",
                lineage.gloss(),
                gendered(*gender, "grandfather", "grandmother", "grandparent")
            ),
            Self::GreatGrandparent { gender } => {
                gendered(*gender, "great-grandfather", "great-grandmother", "great-grandparent").into()
            }
            Self::Ancestor { generations } => format!("ancestor, {} generations", generations),
            Self::Child { gender } => gendered(*gender, "son", "daughter", "child").into(),
            Self::Grandchild { gender } => {
                gendered(*gender, "grandson", "granddaughter", "grandchild").into()
            }
            Self::Descendant { generations } => match generations {
                3 => "great-grandchild".into(),
                4 => "great-great-grandchild".into(),
                5 => "great-great-great-grandchild".into(),
                n => format!("descendant, {} generations", n),
            },
            Self::Sibling { gender, seniority, kind } => {
                let rank = match seniority {
                    Seniority::Elder => "elder ",
                    Seniority::Younger => "younger ",
                    Seniority::Unknown => "",
                };
                let half = match kind {
                    SiblingKind::Full => "",
                    SiblingKind::PaternalHalf | SiblingKind::MaternalHalf => "half-",
                };
                let noun = gendered(*gender, "brother", "sister", "sibling");
                let shared = match kind {
                    SiblingKind::Full => "",
                    SiblingKind::PaternalHalf => " (same father)",
                    SiblingKind::MaternalHalf => " (same mother)",
                };
                format!("{}{}{}{}", rank, half, noun, shared)
            }
            Self::UncleOrAunt { gender, seniority, lineage, collateral } => {
                let base = match seniority {
                    Seniority::Elder => "senior uncle or aunt".to_string(),
                    Seniority::Younger => format!(
                        "junior {} {}",
                        lineage.gloss(),
                        gendered(*gender, "uncle", "aunt", "uncle or aunt")
                    ),
                    Seniority::Unknown => format!(
                        "{} {}",
                        lineage.gloss(),
                        gendered(*gender, "uncle", "aunt", "uncle or aunt")
                    ),
                };
                if *collateral { format!("{} (parent's cousin)", base) } else { base }
            }
            Self::NephewOrNiece { gender, collateral } => {
                let base = gendered(*gender, "nephew", "niece", "nephew or niece");
                if *collateral { format!("{} (cousin's child)", base) } else { base.into() }
            }
            Self::GrandUncleOrAunt { gender, generations, collateral } => {
                let greats = "great-".repeat(generations.saturating_sub(1) as usize);
                let base = format!("{}{}", greats, gendered(*gender, "uncle", "aunt", "uncle or aunt"));
                if *collateral { format!("{} (collateral)", base) } else { base }
            }
            Self::GrandNephewOrNiece { gender, generations, collateral } => {
                let greats = "great-".repeat(generations.saturating_sub(1) as usize);
                let base = format!("{}{}", greats, gendered(*gender, "nephew", "niece", "nephew or niece"));
                if *collateral { format!("{} (collateral)", base) } else { base }
            }
            Self::Cousin { gender, seniority, degree } => {
                let rank = match seniority {
                    Seniority::Elder => "elder ",
                    Seniority::Younger => "younger ",
                    Seniority::Unknown => "",
                };
                let ordinal = match degree {
                    1 => "first".to_string(),
                    2 => "second".to_string(),
                    3 => "third".to_string(),
                    n => format!("{}th", n),
                };
                let noun = gendered(*gender, "male cousin", "female cousin", "cousin");
                format!("{}{} {}", rank, ordinal, noun)
            }
            Self::InLaw { partner, link, spouse_gender } => {
                let spouse = gendered(*spouse_gender, "husband", "wife", "spouse");
                match link {
                    SpouseLink::OfRelative => format!("{} of {}", spouse, partner.gloss()),
                    SpouseLink::OfSpouse => format!("{} of {}", partner.gloss(), spouse),
                }
            }
            Self::Relative { generations, distance } => format!(
                "relative, {} generations removed ({} steps)",
                generations.abs(),
                distance
            ),
        }
    }

    /// Recover the term of the partner when this term was composed across
    /// a marriage.
    pub fn strip_spouse(&self) -> Option<&KinshipTerm> {
        match self {
            Self::InLaw { partner, .. } => Some(partner),
            _ => None,
        }
    }

    /// Seniority carried by same-generation terms.
    pub fn seniority(&self) -> Option<Seniority> {
        match self {
            Self::Sibling { seniority, .. } | Self::Cousin { seniority, .. } => Some(*seniority),
            _ => None,
        }
    }

    /// Whether the term names someone of the subject's own generation.
    pub fn is_same_generation(&self) -> bool {
        matches!(self, Self::Sibling { .. } | Self::Cousin { .. })
    }

    /// Whether this is the generic fallback.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Relative { .. })
    }
}

impl fmt::Display for KinshipTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn gendered(gender: Gender, male: &'static str, female: &'static str, other: &'static str) -> &'static str {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Other => other,
    }
}

fn with_collateral(base: &str, collateral: bool) -> String {
    if collateral {
        format!("{} họ", base)
    } else {
        base.to_string()
    }
}

fn sibling_word(gender: Gender, seniority: Seniority) -> &'static str {
    match seniority {
        Seniority::Elder => gendered(gender, "Anh", "Chị", "Anh/Chị"),
        Seniority::Younger => gendered(gender, "Em trai", "Em gái", "Em"),
        Seniority::Unknown => gendered(gender, "Anh/Em trai", "Chị/Em gái", "Anh/Chị/Em"),
    }
}

fn uncle_word(gender: Gender, seniority: Seniority, lineage: Lineage) -> &'static str {
    match (seniority, lineage) {
        (Seniority::Elder, _) => "Bác",
        (Seniority::Younger, Lineage::Paternal) => gendered(gender, "Chú", "Cô", "Chú/Cô"),
        (Seniority::Younger, Lineage::Maternal) => gendered(gender, "Cậu", "Dì", "Cậu/Dì"),
        (Seniority::Unknown, Lineage::Paternal) => gendered(gender, "Bác/Chú", "Bác/Cô", "Bác/Chú/Cô"),
        (Seniority::Unknown, Lineage::Maternal) => gendered(gender, "Bác/Cậu", "Bác/Dì", "Bác/Cậu/Dì"),
    }
}

fn cousin_label(gender: Gender, seniority: Seniority, degree: u32) -> String {
    if degree <= 1 {
        return match seniority {
            Seniority::Elder => format!("{} họ (con bác)", gendered(gender, "Anh", "Chị", "Anh/Chị")),
            Seniority::Younger => format!(
                "{} họ (con chú/cô/dì/cậu)",
                gendered(gender, "Em trai", "Em gái", "Em")
            ),
            Seniority::Unknown => "Anh chị em họ".into(),
        };
    }
    match seniority {
        Seniority::Elder => format!("{} họ đời {}", gendered(gender, "Anh", "Chị", "Anh/Chị"), degree),
        Seniority::Younger => format!("{} họ đời {}", gendered(gender, "Em trai", "Em gái", "Em"), degree),
        Seniority::Unknown => format!("Anh chị em họ đời {}", degree),
    }
}

/// Target married one of the subject's relatives (`partner`).
fn relative_spouse_label(partner: &KinshipTerm, spouse_gender: Gender) -> String {
    use KinshipTerm as T;

    match partner {
        T::Sibling { seniority, .. } | T::Cousin { seniority, .. } => {
            let base = match (seniority, spouse_gender) {
                (Seniority::Elder, Gender::Male) => "Anh rể",
                (Seniority::Elder, Gender::Female) => "Chị dâu",
                (Seniority::Younger, Gender::Male) => "Em rể",
                (Seniority::Younger, Gender::Female) => "Em dâu",
                (Seniority::Unknown, Gender::Male) => "Anh/Em rể",
                (Seniority::Unknown, Gender::Female) => "Chị/Em dâu",
                (_, Gender::Other) => return spouse_of(partner, spouse_gender),
            };
            with_collateral(base, matches!(partner, T::Cousin { .. }))
        }
        T::UncleOrAunt { gender, seniority, lineage, collateral } => {
            let base = match (seniority, lineage, gender, spouse_gender) {
                (Seniority::Elder, _, _, Gender::Female) => "Bác gái",
                (Seniority::Elder, _, _, Gender::Male) => "Bác",
                (Seniority::Younger, Lineage::Paternal, Gender::Male, Gender::Female) => "Thím",
                (Seniority::Younger, Lineage::Maternal, Gender::Male, Gender::Female) => "Mợ",
                (Seniority::Younger, _, Gender::Female, Gender::Male) => "Dượng",
                _ => return spouse_of(partner, spouse_gender),
            };
            with_collateral(base, *collateral)
        }
        T::Child { .. } => match spouse_gender {
            Gender::Male => "Con rể".into(),
            Gender::Female => "Con dâu".into(),
            Gender::Other => spouse_of(partner, spouse_gender),
        },
        T::Parent { .. } => match spouse_gender {
            Gender::Male => "Bố dượng".into(),
            Gender::Female => "Mẹ kế".into(),
            Gender::Other => spouse_of(partner, spouse_gender),
        },
        T::Spouse { .. } => spouse_of(partner, spouse_gender),
        other => other.label(),
    }
}

/// Target is a relative (`partner`) of the subject's spouse.
fn spouse_relative_label(partner: &KinshipTerm, spouse_gender: Gender) -> String {
    use KinshipTerm as T;

    let side = gendered(spouse_gender, "chồng", "vợ", "vợ/chồng");
    match partner {
        T::Sibling { gender, seniority, .. } => {
            let base = match seniority {
                Seniority::Elder => gendered(*gender, "Anh", "Chị", "Anh/Chị"),
                Seniority::Younger => "Em",
                Seniority::Unknown => "Anh/Chị/Em",
            };
            format!("{} {}", base, side)
        }
        T::Cousin { gender, seniority, degree } => {
            let base = match seniority {
                Seniority::Elder => gendered(*gender, "Anh", "Chị", "Anh/Chị"),
                Seniority::Younger => "Em",
                Seniority::Unknown => "Anh/Chị/Em",
            };
            if *degree <= 1 {
                format!("{} họ {}", base, side)
            } else {
                format!("{} họ đời {} {}", base, degree, side)
            }
        }
        T::Parent { gender } => format!("{} {}", gendered(*gender, "Bố", "Mẹ", "Bố/Mẹ"), side),
        other => other.label(),
    }
}

fn spouse_of(partner: &KinshipTerm, spouse_gender: Gender) -> String {
    format!(
        "{} của {}",
        gendered(spouse_gender, "Chồng", "Vợ", "Vợ/Chồng"),
        partner.label().to_lowercase()
    )
}
