//! Path shapes: the first-level key of the rule table.

use serde::{Deserialize, Serialize};

use crate::types::{DirectionSignature, Step};

/// Structural shape of a direction signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// No steps.
    Empty,
    /// A single spouse step.
    Marriage,
    /// `up` parent steps.
    Lineal {
        /// Number of parent steps.
        up: usize,
    },
    /// `down` child steps.
    Descendant {
        /// Number of child steps.
        down: usize,
    },
    /// `up` parent steps followed by `down` child steps (both > 0).
    Collateral {
        /// Parent steps up to the apex.
        up: usize,
        /// Child steps down from the apex.
        down: usize,
    },
    /// Ends with a spouse step (and is longer than one step).
    SpouseTerminal,
    /// Starts with a spouse step (and does not end with one).
    SpouseInitial,
    /// Anything else: a spouse step in the middle, or a descent followed
    /// by an ascent.
    Irregular,
}

impl Shape {
    /// Compute the shape of a signature.
    pub fn of(signature: &DirectionSignature) -> Self {
        let steps = signature.steps();
        match steps {
            [] => return Self::Empty,
            [Step::Spouse] => return Self::Marriage,
            [.., Step::Spouse] => return Self::SpouseTerminal,
            [Step::Spouse, ..] => return Self::SpouseInitial,
            _ => {}
        }
        if steps.contains(&Step::Spouse) {
            return Self::Irregular;
        }

        let up = steps.iter().take_while(|s| **s == Step::Up).count();
        let down = steps[up..].iter().take_while(|s| **s == Step::Down).count();
        if up + down != steps.len() {
            return Self::Irregular;
        }

        match (up, down) {
            (u, 0) => Self::Lineal { up: u },
            (0, d) => Self::Descendant { down: d },
            (u, d) => Self::Collateral { up: u, down: d },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Step::{Down as D, Spouse as S, Up as U};

    fn shape(steps: &[Step]) -> Shape {
        Shape::of(&DirectionSignature::new(steps.to_vec()))
    }

    #[test]
    fn test_blood_shapes() {
        assert_eq!(shape(&[]), Shape::Empty);
        assert_eq!(shape(&[U, U]), Shape::Lineal { up: 2 });
        assert_eq!(shape(&[D, D, D]), Shape::Descendant { down: 3 });
        assert_eq!(shape(&[U, U, D]), Shape::Collateral { up: 2, down: 1 });
        assert_eq!(shape(&[D, U]), Shape::Irregular);
        assert_eq!(shape(&[U, D, U]), Shape::Irregular);
    }

    #[test]
    fn test_spouse_shapes() {
        assert_eq!(shape(&[S]), Shape::Marriage);
        assert_eq!(shape(&[U, U, D, S]), Shape::SpouseTerminal);
        assert_eq!(shape(&[S, U, D]), Shape::SpouseInitial);
        // terminal wins when both ends are spousal
        assert_eq!(shape(&[S, U, S]), Shape::SpouseTerminal);
        assert_eq!(shape(&[U, S, D]), Shape::Irregular);
    }
}
