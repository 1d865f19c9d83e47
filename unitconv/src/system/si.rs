/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use super::{Catalog, KnownUnitId};
use crate::conversion::UnitConversion;
use crate::converter::ConversionTable;
use crate::error::UnitError;
use crate::prefix::SiPrefix;

pub(super) fn catalog(c: &mut Catalog) -> Result<(), UnitError> {
    let meter = c.base(KnownUnitId::Meter);
    c.prefixed(KnownUnitId::Kilometer, SiPrefix::Kilo, &meter)?;
    c.prefixed(KnownUnitId::Centimeter, SiPrefix::Centi, &meter)?;
    c.prefixed(KnownUnitId::Millimeter, SiPrefix::Milli, &meter)?;
    c.prefixed(KnownUnitId::Micrometer, SiPrefix::Micro, &meter)?;

    let gram = c.base(KnownUnitId::Gram);
    let kilogram = c.prefixed(KnownUnitId::Kilogram, SiPrefix::Kilo, &gram)?;
    c.prefixed(KnownUnitId::Milligram, SiPrefix::Milli, &gram)?;

    let second = c.base(KnownUnitId::Second);
    c.prefixed(KnownUnitId::Millisecond, SiPrefix::Milli, &second)?;
    let minute = c.scaled(KnownUnitId::Minute, Decimal::from(60), &second)?;
    let hour = c.scaled(KnownUnitId::Hour, Decimal::from(60), &minute)?;
    c.scaled(KnownUnitId::Day, Decimal::from(24), &hour)?;

    c.base(KnownUnitId::Kelvin);
    c.base(KnownUnitId::Celsius);
    c.base(KnownUnitId::Ampere);
    c.base(KnownUnitId::Mole);
    c.base(KnownUnitId::Candela);

    c.derived(KnownUnitId::SquareMeter, vec![&meter ^ 2]);
    let cubic_meter = c.derived(KnownUnitId::CubicMeter, vec![&meter ^ 3]);
    let liter = c.scaled(KnownUnitId::Liter, Decimal::new(1, 3), &cubic_meter)?;
    c.prefixed(KnownUnitId::Milliliter, SiPrefix::Milli, &liter)?;

    c.derived(KnownUnitId::MeterPerSecond, vec![&meter ^ 1, &second ^ -1]);
    c.derived(
        KnownUnitId::Newton,
        vec![&kilogram ^ 1, &meter ^ 1, &second ^ -2],
    );
    c.derived(
        KnownUnitId::Joule,
        vec![&kilogram ^ 1, &meter ^ 2, &second ^ -2],
    );
    c.derived(KnownUnitId::Hertz, vec![&second ^ -1]);

    Ok(())
}

pub(super) fn register_conversions(
    table: &mut ConversionTable,
) -> Result<(), UnitError> {
    let celsius_to_kelvin = UnitConversion::affine(
        KnownUnitId::Celsius.try_unit()?,
        KnownUnitId::Kelvin.try_unit()?,
        Decimal::ONE,
        Decimal::new(27315, 2),
    )?;
    table.register_conversion(&celsius_to_kelvin, false)?;
    Ok(())
}
