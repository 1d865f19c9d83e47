/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use super::error::UnitError;
use super::unit::Unit;

/// The identity shared by everything that can be measured: a name, a
/// concise symbol and a definition. Any of the three may be absent.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct MetricIdentity {
    name: Option<String>,
    symbol: Option<String>,
    definition: Option<String>,
}

impl MetricIdentity {
    pub fn new<S: Into<String>>(name: S) -> Self {
        MetricIdentity {
            name: Some(name.into()),
            symbol: None,
            definition: None,
        }
    }

    pub fn anonymous() -> Self {
        MetricIdentity::default()
    }

    pub fn with_symbol<S: Into<String>>(mut self, symbol: S) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

/// A measurable concept that is not a unit (eg. "items in stock"). It
/// can carry quantities, but it takes no part in unit conversion.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct CustomMetric(Arc<MetricIdentity>);

impl CustomMetric {
    pub fn new(identity: MetricIdentity) -> Self {
        CustomMetric(Arc::new(identity))
    }

    pub fn identity(&self) -> &MetricIdentity {
        &self.0
    }
}

/// What a quantity is measured in. Two metrics are equal when they are
/// of the same kind and their identities (and, for units, system
/// membership and structure) match.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Metric {
    Unit(Unit),
    Custom(CustomMetric),
}

impl Metric {
    pub fn name(&self) -> Option<&str> {
        match self {
            Metric::Unit(u) => u.name(),
            Metric::Custom(m) => m.identity().name(),
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Metric::Unit(u) => u.symbol(),
            Metric::Custom(m) => m.identity().symbol(),
        }
    }

    pub fn definition(&self) -> Option<&str> {
        match self {
            Metric::Unit(u) => u.definition(),
            Metric::Custom(m) => m.identity().definition(),
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Metric::Unit(u) => Some(u),
            Metric::Custom(_) => None,
        }
    }

    pub fn to_unit(&self) -> Result<&Unit, UnitError> {
        self.as_unit()
            .ok_or_else(|| UnitError::NotAUnit(self.to_string()))
    }
}

impl From<Unit> for Metric {
    fn from(unit: Unit) -> Self {
        Metric::Unit(unit)
    }
}

impl From<&Unit> for Metric {
    fn from(unit: &Unit) -> Self {
        Metric::Unit(unit.clone())
    }
}

impl From<CustomMetric> for Metric {
    fn from(metric: CustomMetric) -> Self {
        Metric::Custom(metric)
    }
}

impl PartialEq<Unit> for Metric {
    fn eq(&self, other: &Unit) -> bool {
        matches!(self, Metric::Unit(u) if u == other)
    }
}

impl Display for CustomMetric {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let id = self.identity();
        write!(f, "{}", id.symbol().or(id.name()).unwrap_or("?"))
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Metric::Unit(u) => Display::fmt(u, f),
            Metric::Custom(m) => Display::fmt(m, f),
        }
    }
}
