/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::BitXor;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::derived::{DerivedUnit, DerivedUnitTerm};
use super::error::UnitError;
use super::metric::MetricIdentity;
use super::prefix::{Prefix, SiPrefix};
use super::system::SystemOfUnits;
use super::text::UnitText;

/// A unit of measurement.
///
/// Units are cheap to clone and shared between threads: clones point to
/// the same definition. Equality is structural (identity, system of
/// units and kind), so two separately built units with the same
/// definition compare equal and can be used interchangeably as
/// registry keys.
#[derive(Clone)]
pub struct Unit(Arc<UnitDef>);

struct UnitDef {
    identity: MetricIdentity,
    system: Option<&'static SystemOfUnits>,
    kind: UnitKind,
}

#[derive(Debug)]
pub enum UnitKind {
    Base,
    Scaled(ScaledUnit),
    Derived(DerivedUnit),
}

/// `factor * reference`.
#[derive(Debug)]
pub struct ScaledUnit {
    factor: Decimal,
    reference: Unit,
}

impl ScaledUnit {
    pub fn factor(&self) -> Decimal {
        self.factor
    }

    pub fn reference(&self) -> &Unit {
        &self.reference
    }
}

impl Unit {
    pub fn base(
        identity: MetricIdentity,
        system: Option<&'static SystemOfUnits>,
    ) -> Self {
        Unit::from_kind(identity, system, UnitKind::Base)
    }

    /// `factor * reference`. The unit is not registered anywhere yet:
    /// a registry links it to its ancestors on first `register_unit` or
    /// `convert`, so `lookup` on a fresh scaled unit finds nothing.
    pub fn scaled(
        identity: MetricIdentity,
        system: Option<&'static SystemOfUnits>,
        factor: Decimal,
        reference: &Unit,
    ) -> Result<Self, UnitError> {
        if factor <= Decimal::ZERO {
            return Err(UnitError::InvalidArgument(format!(
                "scale factor of {} must be positive (got {})",
                identity.name().unwrap_or("scaled unit"),
                factor
            )));
        }
        Ok(Unit::from_kind(
            identity,
            system,
            UnitKind::Scaled(ScaledUnit {
                factor,
                reference: reference.clone(),
            }),
        ))
    }

    pub fn derived(
        identity: MetricIdentity,
        system: Option<&'static SystemOfUnits>,
        terms: Vec<DerivedUnitTerm>,
    ) -> Self {
        Unit::from_kind(
            identity,
            system,
            UnitKind::Derived(DerivedUnit::new(terms)),
        )
    }

    /// An unnamed derived unit, as produced by quantity arithmetic.
    pub fn from_terms(terms: Vec<DerivedUnitTerm>) -> Self {
        Unit::derived(MetricIdentity::anonymous(), None, terms)
    }

    /// A decimal multiple of `reference`, named through the lookup
    /// collaborator (eg. kilo + gram).
    pub fn prefixed(
        prefix: SiPrefix,
        reference: &Unit,
        text: &dyn UnitText,
        culture: Option<&str>,
    ) -> Result<Self, UnitError> {
        let base_name = reference.name().ok_or_else(|| {
            UnitError::InvalidArgument(format!(
                "cannot prefix unnamed unit {}",
                reference
            ))
        })?;
        let power = prefix.power() as i32;
        let name =
            text.prefixed_name(power, base_name, culture).ok_or_else(|| {
                UnitError::InvalidArgument(format!(
                    "no name for 10^{} {}",
                    power, base_name
                ))
            })?;
        let mut identity = MetricIdentity::new(name);
        if let Some(symbol) = reference
            .symbol()
            .and_then(|s| text.prefixed_symbol(power, s, culture))
        {
            identity = identity.with_symbol(symbol);
        }
        Unit::scaled(
            identity,
            reference.system(),
            prefix.multiplier(),
            reference,
        )
    }

    fn from_kind(
        identity: MetricIdentity,
        system: Option<&'static SystemOfUnits>,
        kind: UnitKind,
    ) -> Self {
        Unit(Arc::new(UnitDef {
            identity,
            system,
            kind,
        }))
    }

    pub fn identity(&self) -> &MetricIdentity {
        &self.0.identity
    }

    pub fn name(&self) -> Option<&str> {
        self.0.identity.name()
    }

    /// The explicit symbol, or for derived units the concatenation of
    /// the term symbols.
    pub fn symbol(&self) -> Option<&str> {
        match (self.0.identity.symbol(), &self.0.kind) {
            (Some(s), _) => Some(s),
            (None, UnitKind::Derived(d)) => d.symbol(),
            (None, _) => None,
        }
    }

    pub fn definition(&self) -> Option<&str> {
        self.0.identity.definition()
    }

    pub fn system(&self) -> Option<&'static SystemOfUnits> {
        self.0.system
    }

    pub fn kind(&self) -> &UnitKind {
        &self.0.kind
    }

    pub fn as_scaled(&self) -> Option<&ScaledUnit> {
        match &self.0.kind {
            UnitKind::Scaled(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_derived(&self) -> Option<&DerivedUnit> {
        match &self.0.kind {
            UnitKind::Derived(d) => Some(d),
            _ => None,
        }
    }

    /// Dimensional terms: the terms of a derived unit, or the unit itself
    /// to the first power.
    pub fn terms(&self) -> Vec<DerivedUnitTerm> {
        match &self.0.kind {
            UnitKind::Derived(d) => d.terms().to_vec(),
            _ => vec![DerivedUnitTerm::new(self.clone(), 1)],
        }
    }

    pub fn pow(&self, power: i32) -> DerivedUnitTerm {
        DerivedUnitTerm::new(self.clone(), power)
    }

    /// Walks the reference chain of a scaled unit down to the first
    /// unit that is not scaled.
    pub fn root(&self) -> &Unit {
        let mut unit = self;
        while let UnitKind::Scaled(s) = &unit.0.kind {
            unit = &s.reference;
        }
        unit
    }

    /// Same definition object, not merely an equal one.
    pub fn ptr_eq(&self, other: &Unit) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for UnitKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UnitKind::Base, UnitKind::Base) => true,
            (UnitKind::Scaled(a), UnitKind::Scaled(b)) => {
                a.factor == b.factor && a.reference == b.reference
            }
            (UnitKind::Derived(a), UnitKind::Derived(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.0.identity == other.0.identity
                && self.0.system == other.0.system
                && self.0.kind == other.0.kind)
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.identity.hash(state);
        self.0.system.hash(state);
        mem::discriminant(&self.0.kind).hash(state);
        if let UnitKind::Derived(d) = &self.0.kind {
            d.terms().hash(state);
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match (self.symbol(), self.name(), &self.0.kind) {
            (Some(s), _, _) => write!(f, "{}", s),
            (None, Some(n), _) => write!(f, "{}", n),
            (None, None, UnitKind::Derived(d)) => Display::fmt(d, f),
            (None, None, _) => write!(f, "?"),
        }
    }
}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Unit({})", self)
    }
}

/* Dimensional term sugar: `meter ^ 2`. */

impl BitXor<i32> for Unit {
    type Output = DerivedUnitTerm;
    fn bitxor(self, power: i32) -> DerivedUnitTerm {
        DerivedUnitTerm::new(self, power)
    }
}

impl BitXor<i32> for &Unit {
    type Output = DerivedUnitTerm;
    fn bitxor(self, power: i32) -> DerivedUnitTerm {
        self.pow(power)
    }
}
