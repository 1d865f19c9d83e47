/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod conversion;
pub mod converter;
pub mod derived;
pub mod error;
pub mod metric;
pub mod prefix;
pub mod quantity;
pub mod rounding;
pub mod system;
pub mod text;
pub mod typed_quantity;
pub mod unit;
pub mod units;

pub use conversion::{ConversionKind, UnitConversion};
pub use converter::{ConversionFn, ConversionTable, UnitConverter};
pub use derived::{DerivedUnit, DerivedUnitTerm};
pub use error::UnitError;
pub use metric::{CustomMetric, Metric, MetricIdentity};
pub use quantity::Quantity;
pub use rounding::{RoundingConfig, RoundingPolicy, RoundingStrategy};
pub use system::{
    Catalog, KnownUnitId, SystemOfUnits, IMPERIAL, NATURAL, SI, US_CUSTOMARY,
};
pub use text::{BuiltinText, UnitText};
pub use typed_quantity::{TypedQuantity, UnitType};
pub use unit::{ScaledUnit, Unit, UnitKind};

pub use prefix::{Prefix, SiPrefix};
