/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i64;
    fn prefix(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// The prefix with exactly this power, if there is one.
    fn from_exponent(n: i64) -> Option<Self> {
        Self::SCALE.iter().find(|p| p.power() == n).copied()
    }

    fn multiplier(&self) -> Decimal {
        let base = Decimal::from(Self::BASE);
        let mut m = Decimal::ONE;
        for _ in 0..self.power().unsigned_abs() {
            m *= base;
        }
        match self.power() < 0 {
            true => Decimal::ONE / m,
            false => m,
        }
    }
}
