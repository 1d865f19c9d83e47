/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy as DecimalRounding};
use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Decimal amounts carry at most 28 fractional digits, and nearest
/// rounding inspects the digit after the last one kept.
pub const MAX_DIGITS: u32 = 27;

/// Significant digits kept of `amount / step` in step rounding.
const STEP_QUOTIENT_DIGITS: u32 = 24;

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RoundingStrategy {
    /// Away from zero.
    Up,
    /// Towards zero.
    Down,
    /// Away from zero when the first dropped digit reaches the
    /// rounding digit, towards zero otherwise.
    Nearest,
    /// Up to the next multiple of the step.
    UpByStep,
    /// Down to the previous multiple of the step.
    DownByStep,
    TowardsPositive,
    TowardsNegative,
}

impl RoundingStrategy {
    pub fn is_step_based(&self) -> bool {
        matches!(self, RoundingStrategy::UpByStep | RoundingStrategy::DownByStep)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoundingStrategy::Up => "up",
            RoundingStrategy::Down => "down",
            RoundingStrategy::Nearest => "nearest",
            RoundingStrategy::UpByStep => "up_by_step",
            RoundingStrategy::DownByStep => "down_by_step",
            RoundingStrategy::TowardsPositive => "towards_positive",
            RoundingStrategy::TowardsNegative => "towards_negative",
        }
    }
}

impl Display for RoundingStrategy {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoundingStrategy {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            RoundingStrategy::Up,
            RoundingStrategy::Down,
            RoundingStrategy::Nearest,
            RoundingStrategy::UpByStep,
            RoundingStrategy::DownByStep,
            RoundingStrategy::TowardsPositive,
            RoundingStrategy::TowardsNegative,
        ]
        .into_iter()
        .find(|r| r.as_str() == s)
        .ok_or_else(|| {
            UnitError::InvalidArgument(format!("unknown rounding strategy: {}", s))
        })
    }
}

/// Serialized form of a rounding policy.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RoundingConfig {
    pub strategy: RoundingStrategy,
    #[serde(default)]
    pub digits: u32,
    #[serde(default = "default_rounding_digit")]
    pub rounding_digit: u8,
    #[serde(default = "default_step")]
    pub step: Decimal,
}

fn default_rounding_digit() -> u8 {
    5
}

fn default_step() -> Decimal {
    Decimal::ONE
}

/// How to round an amount.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(try_from = "RoundingConfig", into = "RoundingConfig")]
pub struct RoundingPolicy {
    number_of_digits: u32,
    rounding_digit: u8,
    strategy: RoundingStrategy,
    rounding_step: Decimal,
}

impl RoundingPolicy {
    pub fn new(
        number_of_digits: u32,
        rounding_digit: u8,
        strategy: RoundingStrategy,
        rounding_step: Decimal,
    ) -> Result<Self, UnitError> {
        if strategy.is_step_based() && rounding_step.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        if rounding_step <= Decimal::ZERO {
            return Err(UnitError::InvalidArgument(format!(
                "rounding step must be positive (got {})",
                rounding_step
            )));
        }
        if number_of_digits > MAX_DIGITS {
            return Err(UnitError::InvalidArgument(format!(
                "cannot round to {} digits (at most {})",
                number_of_digits, MAX_DIGITS
            )));
        }
        if strategy == RoundingStrategy::Nearest
            && !(1..=9).contains(&rounding_digit)
        {
            return Err(UnitError::InvalidArgument(format!(
                "rounding digit must be between 1 and 9 (got {})",
                rounding_digit
            )));
        }
        Ok(RoundingPolicy {
            number_of_digits,
            rounding_digit,
            strategy,
            rounding_step,
        })
    }

    /// Up, down, towards positive or towards negative infinity at a
    /// number of fractional digits.
    pub fn with_digits(
        strategy: RoundingStrategy,
        number_of_digits: u32,
    ) -> Result<Self, UnitError> {
        match strategy {
            RoundingStrategy::Up
            | RoundingStrategy::Down
            | RoundingStrategy::TowardsPositive
            | RoundingStrategy::TowardsNegative => RoundingPolicy::new(
                number_of_digits,
                default_rounding_digit(),
                strategy,
                Decimal::ONE,
            ),
            _ => Err(mismatch(strategy, "a number of digits")),
        }
    }

    pub fn nearest(
        number_of_digits: u32,
        rounding_digit: u8,
    ) -> Result<Self, UnitError> {
        RoundingPolicy::new(
            number_of_digits,
            rounding_digit,
            RoundingStrategy::Nearest,
            Decimal::ONE,
        )
    }

    pub fn with_step(
        strategy: RoundingStrategy,
        step: Decimal,
    ) -> Result<Self, UnitError> {
        match strategy.is_step_based() {
            true => RoundingPolicy::new(0, default_rounding_digit(), strategy, step),
            false => Err(mismatch(strategy, "a rounding step")),
        }
    }

    pub fn number_of_digits(&self) -> u32 {
        self.number_of_digits
    }

    pub fn rounding_digit(&self) -> u8 {
        self.rounding_digit
    }

    pub fn strategy(&self) -> RoundingStrategy {
        self.strategy
    }

    pub fn rounding_step(&self) -> Decimal {
        self.rounding_step
    }

    pub fn round(&self, amount: Decimal) -> Result<Decimal, UnitError> {
        let digits = self.number_of_digits;
        match self.strategy {
            RoundingStrategy::Up => Ok(amount
                .round_dp_with_strategy(digits, DecimalRounding::AwayFromZero)),
            RoundingStrategy::Down => {
                Ok(amount.round_dp_with_strategy(digits, DecimalRounding::ToZero))
            }
            RoundingStrategy::TowardsPositive => Ok(amount.round_dp_with_strategy(
                digits,
                DecimalRounding::ToPositiveInfinity,
            )),
            RoundingStrategy::TowardsNegative => Ok(amount.round_dp_with_strategy(
                digits,
                DecimalRounding::ToNegativeInfinity,
            )),
            RoundingStrategy::Nearest => self.round_nearest(amount),
            RoundingStrategy::UpByStep => self.round_by_step(amount, Decimal::ceil),
            RoundingStrategy::DownByStep => {
                self.round_by_step(amount, Decimal::floor)
            }
        }
    }

    fn round_nearest(&self, amount: Decimal) -> Result<Decimal, UnitError> {
        let digits = self.number_of_digits;
        let truncated =
            amount.round_dp_with_strategy(digits, DecimalRounding::ToZero);
        let dropped = (amount - truncated)
            .abs()
            .checked_mul(power_of_ten(digits + 1))
            .ok_or(UnitError::Overflow)?
            .trunc();
        match dropped >= Decimal::from(self.rounding_digit) {
            true => Ok(amount
                .round_dp_with_strategy(digits, DecimalRounding::AwayFromZero)),
            false => Ok(truncated),
        }
    }

    fn round_by_step(
        &self,
        amount: Decimal,
        to_integer: fn(&Decimal) -> Decimal,
    ) -> Result<Decimal, UnitError> {
        /* A multiple of a step that has no exact decimal form was itself
        rounded; snap its quotient back onto the integer it came from. */
        let steps = amount
            .checked_div(self.rounding_step)
            .and_then(|s| s.round_sf(STEP_QUOTIENT_DIGITS))
            .ok_or(UnitError::Overflow)?;
        to_integer(&steps)
            .checked_mul(self.rounding_step)
            .ok_or(UnitError::Overflow)
    }
}

fn mismatch(strategy: RoundingStrategy, what: &str) -> UnitError {
    UnitError::InvalidArgument(format!(
        "rounding strategy {} does not take {}",
        strategy, what
    ))
}

fn power_of_ten(n: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(n), 0)
}

impl TryFrom<RoundingConfig> for RoundingPolicy {
    type Error = UnitError;
    fn try_from(config: RoundingConfig) -> Result<Self, Self::Error> {
        RoundingPolicy::new(
            config.digits,
            config.rounding_digit,
            config.strategy,
            config.step,
        )
    }
}

impl From<RoundingPolicy> for RoundingConfig {
    fn from(policy: RoundingPolicy) -> Self {
        RoundingConfig {
            strategy: policy.strategy,
            digits: policy.number_of_digits,
            rounding_digit: policy.rounding_digit,
            step: policy.rounding_step,
        }
    }
}
