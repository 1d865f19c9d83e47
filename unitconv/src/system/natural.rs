/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use super::{register_through, Catalog, KnownUnitId};
use crate::conversion::UnitConversion;
use crate::converter::ConversionTable;
use crate::error::UnitError;
use crate::prefix::SiPrefix;

pub(super) fn catalog(c: &mut Catalog) -> Result<(), UnitError> {
    let ev = c.base(KnownUnitId::Electronvolt);
    c.prefixed(KnownUnitId::Kiloelectronvolt, SiPrefix::Kilo, &ev)?;
    c.prefixed(KnownUnitId::Megaelectronvolt, SiPrefix::Mega, &ev)?;
    c.prefixed(KnownUnitId::Gigaelectronvolt, SiPrefix::Giga, &ev)?;
    c.base(KnownUnitId::SpeedOfLight);
    Ok(())
}

pub(super) fn register_conversions(
    table: &mut ConversionTable,
) -> Result<(), UnitError> {
    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::Electronvolt.try_unit()?,
            KnownUnitId::Joule.try_unit()?,
            Decimal::new(1602176634, 28),
        )?,
        &[
            KnownUnitId::Kiloelectronvolt,
            KnownUnitId::Megaelectronvolt,
            KnownUnitId::Gigaelectronvolt,
        ],
    )?;
    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::SpeedOfLight.try_unit()?,
            KnownUnitId::MeterPerSecond.try_unit()?,
            Decimal::from(299792458),
        )?,
        &[],
    )?;
    Ok(())
}
