/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use once_cell::sync::OnceCell;

use super::unit::Unit;

/// One factor of a derived unit: a unit raised to an integer power.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct DerivedUnitTerm {
    unit: Unit,
    power: i32,
}

impl DerivedUnitTerm {
    pub fn new(unit: Unit, power: i32) -> Self {
        DerivedUnitTerm { unit, power }
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn inverse(&self) -> Self {
        DerivedUnitTerm {
            unit: self.unit.clone(),
            power: -self.power,
        }
    }

    /// The term's symbol, eg. `s⁻¹`. Absent when the unit has no symbol.
    pub fn symbol(&self) -> Option<String> {
        self.unit
            .symbol()
            .map(|s| format!("{}{}", s, superscript(self.power)))
    }
}

impl Display for DerivedUnitTerm {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.unit, superscript(self.power))
    }
}

/// Product of unit terms. The terms are kept in the order they were
/// given; nothing is merged or cancelled.
#[derive(Debug)]
pub struct DerivedUnit {
    terms: Vec<DerivedUnitTerm>,
    symbol: OnceCell<Option<String>>,
}

impl DerivedUnit {
    pub fn new(terms: Vec<DerivedUnitTerm>) -> Self {
        DerivedUnit {
            terms,
            symbol: OnceCell::new(),
        }
    }

    pub fn terms(&self) -> &[DerivedUnitTerm] {
        &self.terms
    }

    /// Concatenated term symbols. Undefined as soon as one of the
    /// terms has no symbol.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol
            .get_or_init(|| {
                self.terms
                    .iter()
                    .map(|t| t.symbol())
                    .collect::<Option<Vec<String>>>()
                    .map(|s| s.concat())
            })
            .as_deref()
    }
}

impl PartialEq for DerivedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for DerivedUnit {}

impl Display for DerivedUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.symbol() {
            Some(s) => write!(f, "{}", s),
            None => write!(
                f,
                "{}",
                self.terms
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<String>>()
                    .join("\u{22c5}")
            ),
        }
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

pub(crate) fn superscript(val: i32) -> String {
    if val != 1 {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => '\u{207b}',
            })
            .collect()
    } else {
        "".to_string()
    }
}
