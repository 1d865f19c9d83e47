/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::Decimal;

use super::converter::UnitConverter;
use super::derived::DerivedUnitTerm;
use super::error::UnitError;
use super::metric::Metric;
use super::rounding::RoundingPolicy;
use super::unit::Unit;

/// An amount measured in some metric.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Quantity(pub Decimal, pub Metric);

impl Quantity {
    pub fn new<M: Into<Metric>>(amount: Decimal, metric: M) -> Self {
        Quantity(amount, metric.into())
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn metric(&self) -> &Metric {
        &self.1
    }

    /// Converts through the process-wide registry.
    pub fn convert_to(&self, unit: &Unit) -> Result<Self, UnitError> {
        UnitConverter::global().convert(self, unit)
    }

    pub fn convert_with(
        &self,
        converter: &UnitConverter,
        unit: &Unit,
    ) -> Result<Self, UnitError> {
        converter.convert(self, unit)
    }

    pub fn round(&self, policy: &RoundingPolicy) -> Result<Self, UnitError> {
        Ok(Quantity(policy.round(self.0)?, self.1.clone()))
    }

    /* Note: we cannot implement Ord, because comparing quantities
    in different metrics is an error. */
    pub fn compare(&self, rhs: &Self) -> Result<Ordering, UnitError> {
        self.check_metric(rhs)?;
        Ok(self.0.cmp(&rhs.0))
    }

    fn check_metric(&self, rhs: &Self) -> Result<(), UnitError> {
        match self.1 == rhs.1 {
            true => Ok(()),
            false => Err(UnitError::IncompatibleMetric(
                self.1.to_string(),
                rhs.1.to_string(),
            )),
        }
    }

    /// Dimensional terms. A custom metric takes part as an anonymous
    /// base unit carrying its identity.
    fn terms(&self) -> Vec<DerivedUnitTerm> {
        match &self.1 {
            Metric::Unit(u) => u.terms(),
            Metric::Custom(m) => {
                vec![Unit::base(m.identity().clone(), None) ^ 1]
            }
        }
    }

    fn checked_add(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.check_metric(rhs)?;
        let amount = self.0.checked_add(rhs.0).ok_or(UnitError::Overflow)?;
        Ok(Quantity(amount, self.1.clone()))
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.check_metric(rhs)?;
        let amount = self.0.checked_sub(rhs.0).ok_or(UnitError::Overflow)?;
        Ok(Quantity(amount, self.1.clone()))
    }

    /// The product, in a new derived unit made of both operands' terms.
    fn checked_mul(&self, rhs: &Self) -> Result<Self, UnitError> {
        let mut terms = self.terms();
        terms.extend(rhs.terms());
        let amount = self.0.checked_mul(rhs.0).ok_or(UnitError::Overflow)?;
        Ok(Quantity::new(amount, Unit::from_terms(terms)))
    }

    /// The quotient, in a new derived unit made of the left operand's
    /// terms followed by the right operand's terms with negated powers.
    fn checked_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        let mut terms = self.terms();
        terms.extend(rhs.terms().iter().map(|t| t.inverse()));
        if rhs.0.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        let amount = self.0.checked_div(rhs.0).ok_or(UnitError::Overflow)?;
        Ok(Quantity::new(amount, Unit::from_terms(terms)))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.0, self.1)
    }
}

macro_rules! impl_quantity_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<Quantity> for Quantity {
            type Output = Result<Quantity, UnitError>;
            fn $method(self, rhs: Quantity) -> Result<Quantity, UnitError> {
                self.$checked(&rhs)
            }
        }

        impl<'a> $trait<&'a Quantity> for &'a Quantity {
            type Output = Result<Quantity, UnitError>;
            fn $method(self, rhs: &'a Quantity) -> Result<Quantity, UnitError> {
                self.$checked(rhs)
            }
        }
    };
}

impl_quantity_op!(Add, add, checked_add);
impl_quantity_op!(Sub, sub, checked_sub);
impl_quantity_op!(Mul, mul, checked_mul);
impl_quantity_op!(Div, div, checked_div);

impl Mul<Decimal> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: Decimal) -> Result<Quantity, UnitError> {
        Ok(Quantity(
            self.0.checked_mul(rhs).ok_or(UnitError::Overflow)?,
            self.1,
        ))
    }
}

impl Div<Decimal> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Decimal) -> Result<Quantity, UnitError> {
        if rhs.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Quantity(
            self.0.checked_div(rhs).ok_or(UnitError::Overflow)?,
            self.1,
        ))
    }
}
