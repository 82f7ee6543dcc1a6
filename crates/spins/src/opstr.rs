//! Operator-string terms for a two-subsystem basis.
//!
//! An operator string reads `"<left>|<right>"`; each side is a run of
//! single-site letters (`I`, `z`, `+`, `-`, `x`, `y`). A coupling lists one
//! site index per letter, left letters first.

use crate::error::{Result, SpinError};
use linalg::C64;

#[derive(Clone, Debug, PartialEq)]
pub struct Coupling {
    pub coeff: C64,
    pub sites: Vec<usize>,
}

impl Coupling {
    pub fn new(coeff: C64, sites: Vec<usize>) -> Self {
        Self { coeff, sites }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpTerm {
    pub opstr: String,
    pub couplings: Vec<Coupling>,
}

impl OpTerm {
    pub fn new(opstr: impl Into<String>, couplings: Vec<Coupling>) -> Self {
        Self {
            opstr: opstr.into(),
            couplings,
        }
    }

    /// A single coupling on one site per letter.
    pub fn single(opstr: impl Into<String>, coeff: C64, sites: Vec<usize>) -> Self {
        Self::new(opstr, vec![Coupling::new(coeff, sites)])
    }
}

/// Which half of the tensor basis an operator acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subsystem {
    One,
    Two,
}

impl Subsystem {
    /// Places a single-subsystem letter run on the correct side of the bar.
    pub fn opstr(self, letters: &str) -> String {
        match self {
            Subsystem::One => format!("{}|", letters),
            Subsystem::Two => format!("|{}", letters),
        }
    }
}

const LETTERS: [char; 6] = ['I', 'z', '+', '-', 'x', 'y'];

/// Splits and validates an operator string into left and right letter runs.
pub fn parse_opstr(opstr: &str) -> Result<(Vec<char>, Vec<char>)> {
    let bad = |reason: &str| SpinError::OpString {
        opstr: opstr.to_string(),
        reason: reason.to_string(),
    };

    let (left, right) = opstr
        .split_once('|')
        .ok_or_else(|| bad("missing `|` separator"))?;
    if right.contains('|') {
        return Err(bad("more than one `|` separator"));
    }

    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    if let Some(c) = left.iter().chain(right.iter()).copied().find(|c| !LETTERS.contains(c)) {
        return Err(bad(&format!("unknown operator letter `{}`", c)));
    }
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sides() {
        let (l, r) = parse_opstr("z+|-").unwrap();
        assert_eq!(l, vec!['z', '+']);
        assert_eq!(r, vec!['-']);

        let (l, r) = parse_opstr("|z").unwrap();
        assert!(l.is_empty());
        assert_eq!(r, vec!['z']);
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_opstr("zz").is_err());
        assert!(parse_opstr("z|z|z").is_err());
        assert!(parse_opstr("q|").is_err());
    }

    #[test]
    fn subsystem_places_bar() {
        assert_eq!(Subsystem::One.opstr("+"), "+|");
        assert_eq!(Subsystem::Two.opstr("z"), "|z");
    }
}
