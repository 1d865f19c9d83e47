/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use super::{register_through, Catalog, KnownUnitId};
use crate::conversion::UnitConversion;
use crate::converter::ConversionTable;
use crate::error::UnitError;

pub(super) fn catalog(c: &mut Catalog) -> Result<(), UnitError> {
    let inch = c.base(KnownUnitId::Inch);
    let foot = c.scaled(KnownUnitId::Foot, Decimal::from(12), &inch)?;
    let yard = c.scaled(KnownUnitId::Yard, Decimal::from(3), &foot)?;
    c.scaled(KnownUnitId::Mile, Decimal::from(1760), &yard)?;

    let ounce = c.base(KnownUnitId::Ounce);
    let pound = c.scaled(KnownUnitId::Pound, Decimal::from(16), &ounce)?;
    c.scaled(KnownUnitId::Stone, Decimal::from(14), &pound)?;

    let gallon = c.base(KnownUnitId::ImperialGallon);
    let pint =
        c.scaled(KnownUnitId::ImperialPint, Decimal::new(125, 3), &gallon)?;
    c.scaled(KnownUnitId::ImperialFluidOunce, Decimal::new(5, 2), &pint)?;

    Ok(())
}

/// International inch (1959), avoirdupois ounce and the imperial
/// gallon of the Weights and Measures Act 1985.
pub(super) fn register_conversions(
    table: &mut ConversionTable,
) -> Result<(), UnitError> {
    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::Inch.try_unit()?,
            KnownUnitId::Meter.try_unit()?,
            Decimal::new(254, 4),
        )?,
        &[KnownUnitId::Foot, KnownUnitId::Yard, KnownUnitId::Mile],
    )?;

    let masses = [KnownUnitId::Pound, KnownUnitId::Stone];
    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::Ounce.try_unit()?,
            KnownUnitId::Gram.try_unit()?,
            Decimal::new(28349523125, 9),
        )?,
        &masses,
    )?;

    let gram = KnownUnitId::Gram.try_unit()?;
    let kilogram = KnownUnitId::Kilogram.try_unit()?;
    table.register_unit(&kilogram)?;
    let to_kilogram = table.conversion(&gram, &kilogram).ok_or_else(|| {
        UnitError::UnsupportedConversion(gram.to_string(), kilogram.to_string())
    })?;
    for id in [KnownUnitId::Ounce].iter().chain(masses.iter()) {
        let unit = id.try_unit()?;
        if let Some(to_gram) = table.conversion(&unit, &gram) {
            table.compose(&to_gram, &to_kilogram)?;
        }
    }

    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::ImperialGallon.try_unit()?,
            KnownUnitId::Liter.try_unit()?,
            Decimal::new(454609, 5),
        )?,
        &[KnownUnitId::ImperialPint, KnownUnitId::ImperialFluidOunce],
    )?;

    Ok(())
}
