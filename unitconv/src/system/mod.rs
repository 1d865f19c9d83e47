/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod imperial;
pub mod known_unit;
pub mod natural;
pub mod si;
pub mod us_customary;

use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;
use rust_decimal::Decimal;

use crate::conversion::UnitConversion;
use crate::converter::ConversionTable;
use crate::derived::DerivedUnitTerm;
use crate::error::UnitError;
use crate::metric::MetricIdentity;
use crate::prefix::SiPrefix;
use crate::text::{BuiltinText, UnitText};
use crate::unit::Unit;

pub use known_unit::KnownUnitId;

pub static SI: SystemOfUnits = SystemOfUnits::new(
    "SI",
    "BIPM",
    si::catalog,
    si::register_conversions,
);

pub static IMPERIAL: SystemOfUnits = SystemOfUnits::new(
    "Imperial",
    "UK Parliament",
    imperial::catalog,
    imperial::register_conversions,
);

pub static US_CUSTOMARY: SystemOfUnits = SystemOfUnits::new(
    "US Customary",
    "NIST",
    us_customary::catalog,
    us_customary::register_conversions,
);

pub static NATURAL: SystemOfUnits = SystemOfUnits::new(
    "Natural",
    "IUPAP",
    natural::catalog,
    natural::register_conversions,
);

type CatalogFn = fn(&mut Catalog) -> Result<(), UnitError>;
type ConversionsFn = fn(&mut ConversionTable) -> Result<(), UnitError>;

/// A named family of standard units.
///
/// The table of known units is built on first access, exactly once,
/// even when several threads ask for it at the same time. The system's
/// conversions (to other systems, or affine ones within the system) are
/// loaded into a registry the first time that registry meets one of
/// the system's units.
pub struct SystemOfUnits {
    name: &'static str,
    standards_body: &'static str,
    catalog: CatalogFn,
    conversions: ConversionsFn,
    known: OnceCell<HashMap<KnownUnitId, Unit>>,
}

impl SystemOfUnits {
    pub const fn new(
        name: &'static str,
        standards_body: &'static str,
        catalog: CatalogFn,
        conversions: ConversionsFn,
    ) -> Self {
        SystemOfUnits {
            name,
            standards_body,
            catalog,
            conversions,
            known: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn standards_body(&self) -> &'static str {
        self.standards_body
    }

    pub fn is_materialized(&self) -> bool {
        self.known.get().is_some()
    }

    pub fn units(
        &'static self,
    ) -> Result<&HashMap<KnownUnitId, Unit>, UnitError> {
        self.known.get_or_try_init(|| {
            log::debug!("building unit table of {}", self);
            let mut catalog = Catalog::new(self, &BuiltinText);
            (self.catalog)(&mut catalog)?;
            Ok(catalog.units)
        })
    }

    pub fn unit(&'static self, id: KnownUnitId) -> Result<Unit, UnitError> {
        self.units()?.get(&id).cloned().ok_or_else(|| {
            UnitError::UnknownUnit(format!("{} in {}", id, self))
        })
    }

    pub fn register_conversions(
        &self,
        table: &mut ConversionTable,
    ) -> Result<(), UnitError> {
        (self.conversions)(table)
    }
}

impl PartialEq for SystemOfUnits {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.standards_body == other.standards_body
    }
}

impl Eq for SystemOfUnits {}

impl Hash for SystemOfUnits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.standards_body.hash(state);
    }
}

impl Display for SystemOfUnits {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ({})", self.name, self.standards_body)
    }
}

impl Debug for SystemOfUnits {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("SystemOfUnits")
            .field("name", &self.name)
            .field("standards_body", &self.standards_body)
            .finish()
    }
}

/// Builder for a system's known-unit table.
pub struct Catalog<'a> {
    system: &'static SystemOfUnits,
    text: &'a dyn UnitText,
    units: HashMap<KnownUnitId, Unit>,
}

impl<'a> Catalog<'a> {
    fn new(system: &'static SystemOfUnits, text: &'a dyn UnitText) -> Self {
        Catalog {
            system,
            text,
            units: HashMap::new(),
        }
    }

    fn identity(&self, id: KnownUnitId) -> MetricIdentity {
        let key = id.as_str();
        let mut identity = MetricIdentity::new(
            self.text.name(key, None).unwrap_or_else(|| key.to_string()),
        );
        if let Some(symbol) = self.text.symbol(key, None) {
            identity = identity.with_symbol(symbol);
        }
        if let Some(definition) = self.text.definition(key, None) {
            identity = identity.with_definition(definition);
        }
        identity
    }

    fn insert(&mut self, id: KnownUnitId, unit: Unit) -> Unit {
        self.units.insert(id, unit.clone());
        unit
    }

    pub fn base(&mut self, id: KnownUnitId) -> Unit {
        let unit = Unit::base(self.identity(id), Some(self.system));
        self.insert(id, unit)
    }

    pub fn scaled(
        &mut self,
        id: KnownUnitId,
        factor: Decimal,
        reference: &Unit,
    ) -> Result<Unit, UnitError> {
        let unit =
            Unit::scaled(self.identity(id), Some(self.system), factor, reference)?;
        Ok(self.insert(id, unit))
    }

    pub fn prefixed(
        &mut self,
        id: KnownUnitId,
        prefix: SiPrefix,
        reference: &Unit,
    ) -> Result<Unit, UnitError> {
        let unit = Unit::prefixed(prefix, reference, self.text, None)?;
        Ok(self.insert(id, unit))
    }

    pub fn derived(
        &mut self,
        id: KnownUnitId,
        terms: Vec<DerivedUnitTerm>,
    ) -> Unit {
        let unit = Unit::derived(self.identity(id), Some(self.system), terms);
        self.insert(id, unit)
    }
}

/// Registers `link` (from `root` to a unit of another system) and
/// composes it with the scaled ancestry of every unit in `units`, so
/// that each of them converts to the link's target in one lookup.
pub(crate) fn register_through(
    table: &mut ConversionTable,
    link: &UnitConversion,
    units: &[KnownUnitId],
) -> Result<(), UnitError> {
    let root = link.source();
    table.register_unit(root)?;
    table.register_unit(link.target())?;
    table.register_conversion(link, false)?;
    for id in units {
        let unit = id.try_unit()?;
        table.register_unit(&unit)?;
        let to_root = table.conversion(&unit, root).ok_or_else(|| {
            UnitError::UnsupportedConversion(unit.to_string(), root.to_string())
        })?;
        table.compose(&to_root, link)?;
    }
    Ok(())
}
