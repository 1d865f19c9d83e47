/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Marker types for the built-in units, for use with `TypedQuantity`.

use crate::system::KnownUnitId;
use crate::typed_quantity::UnitType;
use crate::unit::Unit;

macro_rules! unit_types {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
            pub enum $name {}

            impl $name {
                pub const ID: KnownUnitId = KnownUnitId::$name;
            }

            impl UnitType for $name {
                fn unit() -> Unit {
                    KnownUnitId::$name.unit()
                }
            }
        )*
    };
}

unit_types!(
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
);
