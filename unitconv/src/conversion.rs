/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::UnitError;
use super::unit::Unit;

/// A pair of inverse functions converting amounts from a source unit
/// to a target unit and back.
///
/// Conversions are shared values: cloning one yields a handle to the
/// same conversion, which `ptr_eq` can tell apart from an equivalent
/// but separately built conversion.
#[derive(Clone)]
pub struct UnitConversion(Arc<ConversionDef>);

struct ConversionDef {
    source: Unit,
    target: Unit,
    kind: ConversionKind,
}

pub enum ConversionKind {
    /// `v * factor`
    Linear { factor: Decimal },
    /// `v * factor + offset`
    Affine { factor: Decimal, offset: Decimal },
    Identity,
    /// The wrapped conversion, run backwards.
    Reciprocal(UnitConversion),
    /// A path of conversions, each one starting where the previous ends.
    Composite(Vec<UnitConversion>),
}

impl UnitConversion {
    pub fn linear(
        source: Unit,
        target: Unit,
        factor: Decimal,
    ) -> Result<Self, UnitError> {
        if factor.is_zero() {
            return Err(UnitError::InvalidArgument(format!(
                "zero conversion factor from {} to {}",
                source, target
            )));
        }
        Ok(UnitConversion::from_kind(
            source,
            target,
            ConversionKind::Linear { factor },
        ))
    }

    pub fn affine(
        source: Unit,
        target: Unit,
        factor: Decimal,
        offset: Decimal,
    ) -> Result<Self, UnitError> {
        if factor.is_zero() {
            return Err(UnitError::InvalidArgument(format!(
                "zero conversion factor from {} to {}",
                source, target
            )));
        }
        Ok(UnitConversion::from_kind(
            source,
            target,
            ConversionKind::Affine { factor, offset },
        ))
    }

    pub fn identity(unit: Unit) -> Self {
        UnitConversion::from_kind(unit.clone(), unit, ConversionKind::Identity)
    }

    pub fn composite(steps: Vec<UnitConversion>) -> Result<Self, UnitError> {
        let (first, last) = match (steps.first(), steps.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => {
                return Err(UnitError::InvalidArgument(String::from(
                    "empty conversion path",
                )))
            }
        };
        if let Some(w) = steps.windows(2).find(|w| w[0].target() != w[1].source())
        {
            return Err(invalid_path(&w[0], &w[1]));
        }
        Ok(UnitConversion::from_kind(
            first.source().clone(),
            last.target().clone(),
            ConversionKind::Composite(steps),
        ))
    }

    fn from_kind(source: Unit, target: Unit, kind: ConversionKind) -> Self {
        UnitConversion(Arc::new(ConversionDef {
            source,
            target,
            kind,
        }))
    }

    pub fn source(&self) -> &Unit {
        &self.0.source
    }

    pub fn target(&self) -> &Unit {
        &self.0.target
    }

    pub fn kind(&self) -> &ConversionKind {
        &self.0.kind
    }

    pub fn ptr_eq(&self, other: &UnitConversion) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn convert(&self, value: Decimal) -> Result<Decimal, UnitError> {
        match &self.0.kind {
            ConversionKind::Linear { factor } => {
                value.checked_mul(*factor).ok_or(UnitError::Overflow)
            }
            ConversionKind::Affine { factor, offset } => value
                .checked_mul(*factor)
                .and_then(|v| v.checked_add(*offset))
                .ok_or(UnitError::Overflow),
            ConversionKind::Identity => Ok(value),
            ConversionKind::Reciprocal(c) => c.convert_back(value),
            ConversionKind::Composite(steps) => {
                steps.iter().try_fold(value, |v, c| c.convert(v))
            }
        }
    }

    pub fn convert_back(&self, value: Decimal) -> Result<Decimal, UnitError> {
        match &self.0.kind {
            ConversionKind::Linear { factor } => {
                value.checked_div(*factor).ok_or(UnitError::Overflow)
            }
            ConversionKind::Affine { factor, offset } => value
                .checked_sub(*offset)
                .and_then(|v| v.checked_div(*factor))
                .ok_or(UnitError::Overflow),
            ConversionKind::Identity => Ok(value),
            ConversionKind::Reciprocal(c) => c.convert(value),
            ConversionKind::Composite(steps) => {
                steps.iter().rev().try_fold(value, |v, c| c.convert_back(v))
            }
        }
    }

    /// The same conversion in the opposite direction. The reciprocal of
    /// a reciprocal is the original conversion itself.
    pub fn reciprocal(&self) -> UnitConversion {
        match &self.0.kind {
            ConversionKind::Reciprocal(c) => c.clone(),
            _ => UnitConversion::from_kind(
                self.target().clone(),
                self.source().clone(),
                ConversionKind::Reciprocal(self.clone()),
            ),
        }
    }

    /// `self` followed by `next`. A round trip collapses to the
    /// identity, two linear steps fold into one factor and composite
    /// operands are flattened.
    pub fn compose(
        &self,
        next: &UnitConversion,
    ) -> Result<UnitConversion, UnitError> {
        if self.target() != next.source() {
            return Err(invalid_path(self, next));
        }
        if self.source() == next.target() {
            return Ok(UnitConversion::identity(self.source().clone()));
        }
        match (self.kind(), next.kind()) {
            (
                ConversionKind::Linear { factor: a },
                ConversionKind::Linear { factor: b },
            ) => UnitConversion::linear(
                self.source().clone(),
                next.target().clone(),
                a.checked_mul(*b).ok_or(UnitError::Overflow)?,
            ),
            (ConversionKind::Identity, _) => Ok(next.clone()),
            (_, ConversionKind::Identity) => Ok(self.clone()),
            _ => Ok(UnitConversion::from_kind(
                self.source().clone(),
                next.target().clone(),
                ConversionKind::Composite(
                    self.steps().into_iter().chain(next.steps()).collect(),
                ),
            )),
        }
    }

    fn steps(&self) -> Vec<UnitConversion> {
        match &self.0.kind {
            ConversionKind::Composite(steps) => steps.clone(),
            _ => vec![self.clone()],
        }
    }
}

fn invalid_path(first: &UnitConversion, next: &UnitConversion) -> UnitError {
    UnitError::InvalidConversionPath(
        first.source().to_string(),
        first.target().to_string(),
        next.source().to_string(),
        next.target().to_string(),
    )
}

impl Display for ConversionKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ConversionKind::Linear { factor } => write!(f, "x {}", factor),
            ConversionKind::Affine { factor, offset } => {
                write!(f, "x {} + {}", factor, offset)
            }
            ConversionKind::Identity => write!(f, "identity"),
            ConversionKind::Reciprocal(c) => write!(f, "inverse of ({})", c),
            ConversionKind::Composite(steps) => write!(
                f,
                "{}",
                steps
                    .iter()
                    .map(|c| format!("({})", c))
                    .collect::<Vec<String>>()
                    .join(" then ")
            ),
        }
    }
}

impl Display for UnitConversion {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} -> {}: {}", self.source(), self.target(), self.kind())
    }
}

impl Debug for UnitConversion {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "UnitConversion({})", self)
    }
}

impl Debug for ConversionKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(self, f)
    }
}
