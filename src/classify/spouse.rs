//! Composition across a marriage at either end of a path.
//!
//! The spouse step is stripped, the remaining path is classified through
//! the engine, and the partner's term is wrapped in
//! [`KinshipTerm::InLaw`]. Rendering of the composed term (Thím, Mợ,
//! Dượng, Anh rể, Chị dâu, ...) lives with the term itself, so stripping
//! the composition always recovers the partner's term exactly.

use crate::types::{KinPath, KinshipTerm, SpouseLink};

use super::SubQuery;

/// Path ends with a spouse step: the target married one of the subject's
/// relatives.
pub fn terminal(path: &KinPath, sub: &dyn SubQuery) -> Option<KinshipTerm> {
    let relative_path = path.without_last()?;
    let partner = sub.resolve_path(&relative_path)?;
    Some(KinshipTerm::InLaw {
        partner: Box::new(partner),
        link: SpouseLink::OfRelative,
        spouse_gender: path.end().gender,
    })
}

/// Path starts with a spouse step: the target is a relative of the
/// subject's spouse.
pub fn initial(path: &KinPath, sub: &dyn SubQuery) -> Option<KinshipTerm> {
    let spouse_path = path.without_first()?;
    let spouse_gender = spouse_path.start().gender;
    let partner = sub.resolve_path(&spouse_path)?;
    Some(KinshipTerm::InLaw {
        partner: Box::new(partner),
        link: SpouseLink::OfSpouse,
        spouse_gender,
    })
}
