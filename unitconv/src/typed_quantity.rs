/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::Decimal;

use super::converter::UnitConverter;
use super::error::UnitError;
use super::metric::Metric;
use super::quantity::Quantity;
use super::rounding::RoundingPolicy;
use super::unit::Unit;

/// A type standing for one unit. Every call to `unit` returns the same
/// unit, typically a clone of a lazily built static. Marker types for
/// the built-in units are in `units`.
pub trait UnitType: 'static {
    fn unit() -> Unit;
}

/// An amount whose unit is fixed by its type. Adding or subtracting
/// amounts of different units does not type-check.
pub struct TypedQuantity<M> {
    amount: Decimal,
    unit: PhantomData<fn() -> M>,
}

impl<M: UnitType> TypedQuantity<M> {
    pub fn new(amount: Decimal) -> Self {
        TypedQuantity {
            amount,
            unit: PhantomData,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        M::unit()
    }

    pub fn metric(&self) -> Metric {
        Metric::Unit(M::unit())
    }

    pub fn to_quantity(&self) -> Quantity {
        Quantity::new(self.amount, M::unit())
    }

    pub fn convert_to<U: UnitType>(
        &self,
    ) -> Result<TypedQuantity<U>, UnitError> {
        self.convert_with::<U>(UnitConverter::global())
    }

    pub fn convert_with<U: UnitType>(
        &self,
        converter: &UnitConverter,
    ) -> Result<TypedQuantity<U>, UnitError> {
        let converted = converter.convert(&self.to_quantity(), &U::unit())?;
        Ok(TypedQuantity::new(converted.amount()))
    }

    pub fn round(&self, policy: &RoundingPolicy) -> Result<Self, UnitError> {
        Ok(TypedQuantity::new(policy.round(self.amount)?))
    }
}

impl<M> Clone for TypedQuantity<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for TypedQuantity<M> {}

impl<M> PartialEq for TypedQuantity<M> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<M> Eq for TypedQuantity<M> {}

impl<M> PartialOrd for TypedQuantity<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M> Ord for TypedQuantity<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl<M> Hash for TypedQuantity<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state)
    }
}

impl<M: UnitType> Debug for TypedQuantity<M> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "TypedQuantity({} {})", self.amount, M::unit())
    }
}

impl<M: UnitType> Display for TypedQuantity<M> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.amount, M::unit())
    }
}

impl<M: UnitType> Add for TypedQuantity<M> {
    type Output = Result<TypedQuantity<M>, UnitError>;
    fn add(self, rhs: Self) -> Result<TypedQuantity<M>, UnitError> {
        Ok(TypedQuantity::new(
            self.amount
                .checked_add(rhs.amount)
                .ok_or(UnitError::Overflow)?,
        ))
    }
}

impl<M: UnitType> Sub for TypedQuantity<M> {
    type Output = Result<TypedQuantity<M>, UnitError>;
    fn sub(self, rhs: Self) -> Result<TypedQuantity<M>, UnitError> {
        Ok(TypedQuantity::new(
            self.amount
                .checked_sub(rhs.amount)
                .ok_or(UnitError::Overflow)?,
        ))
    }
}

/* Products and quotients leave the typed world: their unit is derived. */

impl<M: UnitType, N: UnitType> Mul<TypedQuantity<N>> for TypedQuantity<M> {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: TypedQuantity<N>) -> Result<Quantity, UnitError> {
        self.to_quantity() * rhs.to_quantity()
    }
}

impl<M: UnitType, N: UnitType> Div<TypedQuantity<N>> for TypedQuantity<M> {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: TypedQuantity<N>) -> Result<Quantity, UnitError> {
        self.to_quantity() / rhs.to_quantity()
    }
}

impl<M: UnitType> Mul<Quantity> for TypedQuantity<M> {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.to_quantity() * rhs
    }
}

impl<M: UnitType> Div<Quantity> for TypedQuantity<M> {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        self.to_quantity() / rhs
    }
}

impl<M: UnitType> Mul<Decimal> for TypedQuantity<M> {
    type Output = Result<TypedQuantity<M>, UnitError>;
    fn mul(self, rhs: Decimal) -> Result<TypedQuantity<M>, UnitError> {
        Ok(TypedQuantity::new(
            self.amount.checked_mul(rhs).ok_or(UnitError::Overflow)?,
        ))
    }
}

impl<M: UnitType> TryFrom<Quantity> for TypedQuantity<M> {
    type Error = UnitError;
    fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
        let unit = M::unit();
        match quantity.metric() == &unit {
            true => Ok(TypedQuantity::new(quantity.amount())),
            false => Err(UnitError::IncompatibleMetric(
                quantity.metric().to_string(),
                unit.to_string(),
            )),
        }
    }
}

impl<M: UnitType> From<TypedQuantity<M>> for Quantity {
    fn from(quantity: TypedQuantity<M>) -> Self {
        quantity.to_quantity()
    }
}
