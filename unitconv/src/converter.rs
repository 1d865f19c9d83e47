/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use super::conversion::UnitConversion;
use super::error::UnitError;
use super::quantity::Quantity;
use super::system::SystemOfUnits;
use super::unit::Unit;

lazy_static! {
    static ref GLOBAL_CONVERTER: UnitConverter = UnitConverter::new();
}

/// A registered conversion function: a conversion, run forwards or
/// backwards.
#[derive(Clone, Debug)]
pub struct ConversionFn {
    conversion: UnitConversion,
    inverse: bool,
}

impl ConversionFn {
    pub fn apply(&self, value: Decimal) -> Result<Decimal, UnitError> {
        match self.inverse {
            false => self.conversion.convert(value),
            true => self.conversion.convert_back(value),
        }
    }

    /// The conversion in the direction of this entry.
    pub fn conversion(&self) -> UnitConversion {
        match self.inverse {
            false => self.conversion.clone(),
            true => self.conversion.reciprocal(),
        }
    }
}

/// Source unit -> target unit -> conversion function.
///
/// Entries are only ever added. Lookups are single hops: a path over
/// several units must be registered up front, either by composing
/// conversions or by registering a scaled unit (which links it to each
/// of its ancestors).
#[derive(Default)]
pub struct ConversionTable {
    conversions: HashMap<Unit, HashMap<Unit, ConversionFn>>,
    units: HashSet<Unit>,
    systems: HashSet<&'static SystemOfUnits>,
    loading: HashSet<&'static SystemOfUnits>,
}

impl ConversionTable {
    pub fn new() -> Self {
        ConversionTable::default()
    }

    /// Inserts the conversion and its inverse. Existing entries are
    /// kept; with `throw_on_duplicate` an existing entry is an error
    /// and nothing is inserted. Returns whether anything was inserted.
    pub fn register_conversion(
        &mut self,
        conversion: &UnitConversion,
        throw_on_duplicate: bool,
    ) -> Result<bool, UnitError> {
        let source = conversion.source();
        let target = conversion.target();
        let has_forward = self.lookup(source, target).is_some();
        let has_backward = self.lookup(target, source).is_some();

        if throw_on_duplicate {
            if has_forward {
                return Err(UnitError::DuplicateConversion(
                    source.to_string(),
                    target.to_string(),
                ));
            }
            if has_backward {
                return Err(UnitError::DuplicateConversion(
                    target.to_string(),
                    source.to_string(),
                ));
            }
        }

        let mut inserted = false;
        if !has_forward {
            self.insert(source, target, conversion, false);
            inserted = true;
        }
        if !has_backward && self.lookup(target, source).is_none() {
            self.insert(target, source, conversion, true);
            inserted = true;
        }
        if inserted {
            log::debug!("registered conversion {}", conversion);
        }
        Ok(inserted)
    }

    fn insert(
        &mut self,
        source: &Unit,
        target: &Unit,
        conversion: &UnitConversion,
        inverse: bool,
    ) {
        self.conversions.entry(source.clone()).or_default().insert(
            target.clone(),
            ConversionFn {
                conversion: conversion.clone(),
                inverse,
            },
        );
    }

    /// Makes a unit known to the table: loads the conversions of its
    /// system of units and, for a scaled unit, registers one linear
    /// conversion to every ancestor with the cumulative factor.
    pub fn register_unit(&mut self, unit: &Unit) -> Result<(), UnitError> {
        if self.units.contains(unit) {
            return Ok(());
        }

        if let Some(system) = unit.system() {
            self.register_system(system)?;
        }

        let mut factor = Decimal::ONE;
        let mut current = unit.clone();
        while let Some(scaled) = current.as_scaled() {
            factor = factor
                .checked_mul(scaled.factor())
                .ok_or(UnitError::Overflow)?;
            let reference = scaled.reference().clone();
            self.register_unit(&reference)?;
            log::debug!("linking {} to ancestor {} (x {})", unit, reference, factor);
            self.register_conversion(
                &UnitConversion::linear(unit.clone(), reference.clone(), factor)?,
                false,
            )?;
            current = reference;
        }

        self.units.insert(unit.clone());
        Ok(())
    }

    /// Loads a system's conversions, once per table. A system whose
    /// conversions fail to load is retried on the next call.
    pub fn register_system(
        &mut self,
        system: &'static SystemOfUnits,
    ) -> Result<(), UnitError> {
        if self.systems.contains(system) || !self.loading.insert(system) {
            return Ok(());
        }
        log::debug!("loading conversions of {}", system);
        let result = system.register_conversions(self);
        self.loading.remove(system);
        result?;
        self.systems.insert(system);
        Ok(())
    }

    /// Composes two conversions and registers the result.
    pub fn compose(
        &mut self,
        first: &UnitConversion,
        next: &UnitConversion,
    ) -> Result<UnitConversion, UnitError> {
        let composed = first.compose(next)?;
        self.register_conversion(&composed, false)?;
        Ok(composed)
    }

    pub fn lookup(&self, source: &Unit, target: &Unit) -> Option<&ConversionFn> {
        let entry = self.conversions.get(source).and_then(|t| t.get(target));
        log::trace!(
            "lookup {} -> {}: {}",
            source,
            target,
            if entry.is_some() { "found" } else { "missing" }
        );
        entry
    }

    pub fn conversion(&self, source: &Unit, target: &Unit) -> Option<UnitConversion> {
        self.lookup(source, target).map(|f| f.conversion())
    }

    pub fn is_registered(&self, unit: &Unit) -> bool {
        self.units.contains(unit)
    }

    pub fn has_system(&self, system: &SystemOfUnits) -> bool {
        self.systems.contains(system)
    }

    /// Converts a quantity with a single registry lookup, after making
    /// sure both units are registered.
    pub fn convert(
        &mut self,
        quantity: &Quantity,
        target: &Unit,
    ) -> Result<Quantity, UnitError> {
        if quantity.metric() == target {
            return Ok(quantity.clone());
        }
        let source = quantity.metric().to_unit()?;
        self.register_unit(source)?;
        self.register_unit(target)?;
        let function = self.lookup(source, target).ok_or_else(|| {
            UnitError::UnsupportedConversion(source.to_string(), target.to_string())
        })?;
        Ok(Quantity::new(function.apply(quantity.amount())?, target.clone()))
    }
}

/// The conversion registry behind one lock.
///
/// All operations, lookups included, take the lock, so registration
/// is a serialization point. Values returned by `lookup` are copies and
/// do not see entries registered afterwards.
#[derive(Default)]
pub struct UnitConverter {
    table: Mutex<ConversionTable>,
}

impl UnitConverter {
    pub fn new() -> Self {
        UnitConverter::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static UnitConverter {
        &GLOBAL_CONVERTER
    }

    pub fn register_conversion(
        &self,
        conversion: &UnitConversion,
        throw_on_duplicate: bool,
    ) -> Result<bool, UnitError> {
        self.table
            .lock()
            .register_conversion(conversion, throw_on_duplicate)
    }

    pub fn register_unit(&self, unit: &Unit) -> Result<(), UnitError> {
        self.table.lock().register_unit(unit)
    }

    pub fn register_system(
        &self,
        system: &'static SystemOfUnits,
    ) -> Result<(), UnitError> {
        self.table.lock().register_system(system)
    }

    pub fn convert(
        &self,
        quantity: &Quantity,
        target: &Unit,
    ) -> Result<Quantity, UnitError> {
        self.table.lock().convert(quantity, target)
    }

    pub fn compose(
        &self,
        first: &UnitConversion,
        next: &UnitConversion,
    ) -> Result<UnitConversion, UnitError> {
        self.table.lock().compose(first, next)
    }

    pub fn reciprocal(conversion: &UnitConversion) -> UnitConversion {
        conversion.reciprocal()
    }

    pub fn lookup(&self, source: &Unit, target: &Unit) -> Option<ConversionFn> {
        self.table.lock().lookup(source, target).cloned()
    }

    pub fn is_registered(&self, unit: &Unit) -> bool {
        self.table.lock().is_registered(unit)
    }

    /// Runs several operations under one lock.
    pub fn with_table<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ConversionTable) -> R,
    {
        f(&mut self.table.lock())
    }
}
