/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{SystemOfUnits, IMPERIAL, NATURAL, SI, US_CUSTOMARY};
use crate::error::UnitError;
use crate::unit::Unit;

/// Identifiers of the built-in units.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub enum KnownUnitId {
    /* SI */
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Micrometer,
    Gram,
    Kilogram,
    Milligram,
    Second,
    Millisecond,
    Minute,
    Hour,
    Day,
    Kelvin,
    Celsius,
    Ampere,
    Mole,
    Candela,
    SquareMeter,
    CubicMeter,
    Liter,
    Milliliter,
    MeterPerSecond,
    Newton,
    Joule,
    Hertz,

    /* Imperial */
    Inch,
    Foot,
    Yard,
    Mile,
    Ounce,
    Pound,
    Stone,
    ImperialFluidOunce,
    ImperialPint,
    ImperialGallon,

    /* US customary */
    UsFluidOunce,
    UsCup,
    UsPint,
    UsQuart,
    UsGallon,
    Fahrenheit,

    /* Natural */
    Electronvolt,
    Kiloelectronvolt,
    Megaelectronvolt,
    Gigaelectronvolt,
    SpeedOfLight,
}

pub(crate) static KNOWN_UNITS: [KnownUnitId; 47] = [
    KnownUnitId::Meter,
    KnownUnitId::Kilometer,
    KnownUnitId::Centimeter,
    KnownUnitId::Millimeter,
    KnownUnitId::Micrometer,
    KnownUnitId::Gram,
    KnownUnitId::Kilogram,
    KnownUnitId::Milligram,
    KnownUnitId::Second,
    KnownUnitId::Millisecond,
    KnownUnitId::Minute,
    KnownUnitId::Hour,
    KnownUnitId::Day,
    KnownUnitId::Kelvin,
    KnownUnitId::Celsius,
    KnownUnitId::Ampere,
    KnownUnitId::Mole,
    KnownUnitId::Candela,
    KnownUnitId::SquareMeter,
    KnownUnitId::CubicMeter,
    KnownUnitId::Liter,
    KnownUnitId::Milliliter,
    KnownUnitId::MeterPerSecond,
    KnownUnitId::Newton,
    KnownUnitId::Joule,
    KnownUnitId::Hertz,
    KnownUnitId::Inch,
    KnownUnitId::Foot,
    KnownUnitId::Yard,
    KnownUnitId::Mile,
    KnownUnitId::Ounce,
    KnownUnitId::Pound,
    KnownUnitId::Stone,
    KnownUnitId::ImperialFluidOunce,
    KnownUnitId::ImperialPint,
    KnownUnitId::ImperialGallon,
    KnownUnitId::UsFluidOunce,
    KnownUnitId::UsCup,
    KnownUnitId::UsPint,
    KnownUnitId::UsQuart,
    KnownUnitId::UsGallon,
    KnownUnitId::Fahrenheit,
    KnownUnitId::Electronvolt,
    KnownUnitId::Kiloelectronvolt,
    KnownUnitId::Megaelectronvolt,
    KnownUnitId::Gigaelectronvolt,
    KnownUnitId::SpeedOfLight,
];

impl KnownUnitId {
    pub fn all() -> &'static [KnownUnitId] {
        &KNOWN_UNITS
    }

    pub fn system(&self) -> &'static SystemOfUnits {
        match self {
            KnownUnitId::Meter
            | KnownUnitId::Kilometer
            | KnownUnitId::Centimeter
            | KnownUnitId::Millimeter
            | KnownUnitId::Micrometer
            | KnownUnitId::Gram
            | KnownUnitId::Kilogram
            | KnownUnitId::Milligram
            | KnownUnitId::Second
            | KnownUnitId::Millisecond
            | KnownUnitId::Minute
            | KnownUnitId::Hour
            | KnownUnitId::Day
            | KnownUnitId::Kelvin
            | KnownUnitId::Celsius
            | KnownUnitId::Ampere
            | KnownUnitId::Mole
            | KnownUnitId::Candela
            | KnownUnitId::SquareMeter
            | KnownUnitId::CubicMeter
            | KnownUnitId::Liter
            | KnownUnitId::Milliliter
            | KnownUnitId::MeterPerSecond
            | KnownUnitId::Newton
            | KnownUnitId::Joule
            | KnownUnitId::Hertz => &SI,
            KnownUnitId::Inch
            | KnownUnitId::Foot
            | KnownUnitId::Yard
            | KnownUnitId::Mile
            | KnownUnitId::Ounce
            | KnownUnitId::Pound
            | KnownUnitId::Stone
            | KnownUnitId::ImperialFluidOunce
            | KnownUnitId::ImperialPint
            | KnownUnitId::ImperialGallon => &IMPERIAL,
            KnownUnitId::UsFluidOunce
            | KnownUnitId::UsCup
            | KnownUnitId::UsPint
            | KnownUnitId::UsQuart
            | KnownUnitId::UsGallon
            | KnownUnitId::Fahrenheit => &US_CUSTOMARY,
            KnownUnitId::Electronvolt
            | KnownUnitId::Kiloelectronvolt
            | KnownUnitId::Megaelectronvolt
            | KnownUnitId::Gigaelectronvolt
            | KnownUnitId::SpeedOfLight => &NATURAL,
        }
    }

    /// The bare identifier used for text lookups.
    pub const fn as_str(&self) -> &'static str {
        match self {
            KnownUnitId::Meter => "meter",
            KnownUnitId::Kilometer => "kilometer",
            KnownUnitId::Centimeter => "centimeter",
            KnownUnitId::Millimeter => "millimeter",
            KnownUnitId::Micrometer => "micrometer",
            KnownUnitId::Gram => "gram",
            KnownUnitId::Kilogram => "kilogram",
            KnownUnitId::Milligram => "milligram",
            KnownUnitId::Second => "second",
            KnownUnitId::Millisecond => "millisecond",
            KnownUnitId::Minute => "minute",
            KnownUnitId::Hour => "hour",
            KnownUnitId::Day => "day",
            KnownUnitId::Kelvin => "kelvin",
            KnownUnitId::Celsius => "celsius",
            KnownUnitId::Ampere => "ampere",
            KnownUnitId::Mole => "mole",
            KnownUnitId::Candela => "candela",
            KnownUnitId::SquareMeter => "square_meter",
            KnownUnitId::CubicMeter => "cubic_meter",
            KnownUnitId::Liter => "liter",
            KnownUnitId::Milliliter => "milliliter",
            KnownUnitId::MeterPerSecond => "meter_per_second",
            KnownUnitId::Newton => "newton",
            KnownUnitId::Joule => "joule",
            KnownUnitId::Hertz => "hertz",
            KnownUnitId::Inch => "inch",
            KnownUnitId::Foot => "foot",
            KnownUnitId::Yard => "yard",
            KnownUnitId::Mile => "mile",
            KnownUnitId::Ounce => "ounce",
            KnownUnitId::Pound => "pound",
            KnownUnitId::Stone => "stone",
            KnownUnitId::ImperialFluidOunce => "imperial_fluid_ounce",
            KnownUnitId::ImperialPint => "imperial_pint",
            KnownUnitId::ImperialGallon => "imperial_gallon",
            KnownUnitId::UsFluidOunce => "us_fluid_ounce",
            KnownUnitId::UsCup => "us_cup",
            KnownUnitId::UsPint => "us_pint",
            KnownUnitId::UsQuart => "us_quart",
            KnownUnitId::UsGallon => "us_gallon",
            KnownUnitId::Fahrenheit => "fahrenheit",
            KnownUnitId::Electronvolt => "electronvolt",
            KnownUnitId::Kiloelectronvolt => "kiloelectronvolt",
            KnownUnitId::Megaelectronvolt => "megaelectronvolt",
            KnownUnitId::Gigaelectronvolt => "gigaelectronvolt",
            KnownUnitId::SpeedOfLight => "speed_of_light",
        }
    }

    pub fn try_unit(&self) -> Result<Unit, UnitError> {
        self.system().unit(*self)
    }

    /// The built-in unit. Materializes its system on first use.
    pub fn unit(&self) -> Unit {
        self.try_unit()
            .expect("built-in unit catalogs define every known unit")
    }
}

impl Display for KnownUnitId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KnownUnitId {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KNOWN_UNITS
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit(s.to_string()))
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for KnownUnitId {
    fn schema_name() -> String {
        String::from("KnownUnitId")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
