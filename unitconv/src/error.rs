/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Incompatible metrics: {0} <-> {1}")]
    IncompatibleMetric(String, String),
    #[error("Invalid conversion path: {0} -> {1} followed by {2} -> {3}")]
    InvalidConversionPath(String, String, String, String),
    #[error("Duplicate conversion: {0} -> {1}")]
    DuplicateConversion(String, String),
    #[error("Unsupported conversion: {0} -> {1}")]
    UnsupportedConversion(String, String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not a unit: {0}")]
    NotAUnit(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Numeric overflow")]
    Overflow,
}
