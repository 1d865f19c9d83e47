/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use super::{register_through, Catalog, KnownUnitId};
use crate::conversion::UnitConversion;
use crate::converter::ConversionTable;
use crate::error::UnitError;

pub(super) fn catalog(c: &mut Catalog) -> Result<(), UnitError> {
    let gallon = c.base(KnownUnitId::UsGallon);
    let quart = c.scaled(KnownUnitId::UsQuart, Decimal::new(25, 2), &gallon)?;
    let pint = c.scaled(KnownUnitId::UsPint, Decimal::new(5, 1), &quart)?;
    let cup = c.scaled(KnownUnitId::UsCup, Decimal::new(5, 1), &pint)?;
    c.scaled(KnownUnitId::UsFluidOunce, Decimal::new(125, 3), &cup)?;

    c.base(KnownUnitId::Fahrenheit);

    Ok(())
}

pub(super) fn register_conversions(
    table: &mut ConversionTable,
) -> Result<(), UnitError> {
    register_through(
        table,
        &UnitConversion::linear(
            KnownUnitId::UsGallon.try_unit()?,
            KnownUnitId::Liter.try_unit()?,
            Decimal::new(3785411784, 9),
        )?,
        &[
            KnownUnitId::UsQuart,
            KnownUnitId::UsPint,
            KnownUnitId::UsCup,
            KnownUnitId::UsFluidOunce,
        ],
    )?;

    let celsius = KnownUnitId::Celsius.try_unit()?;
    let kelvin = KnownUnitId::Kelvin.try_unit()?;
    let celsius_to_fahrenheit = UnitConversion::affine(
        celsius.clone(),
        KnownUnitId::Fahrenheit.try_unit()?,
        Decimal::new(18, 1),
        Decimal::from(32),
    )?;
    table.register_conversion(&celsius_to_fahrenheit, false)?;

    /* Fahrenheit -> Celsius -> kelvin, stored as one entry. */
    table.register_unit(&celsius)?;
    let celsius_to_kelvin =
        table.conversion(&celsius, &kelvin).ok_or_else(|| {
            UnitError::UnsupportedConversion(
                celsius.to_string(),
                kelvin.to_string(),
            )
        })?;
    table.compose(&celsius_to_fahrenheit.reciprocal(), &celsius_to_kelvin)?;

    Ok(())
}
