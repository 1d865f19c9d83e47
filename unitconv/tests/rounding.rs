/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use unitconv::{RoundingPolicy, RoundingStrategy, UnitError};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn check(policy: &RoundingPolicy, cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(
            policy.round(dec(input)).unwrap(),
            dec(expected),
            "{:?} on {}",
            policy.strategy(),
            input
        );
    }
}

#[test]
fn by_digits() {
    check(
        &RoundingPolicy::with_digits(RoundingStrategy::Up, 2).unwrap(),
        &[("1.231", "1.24"), ("-1.231", "-1.24"), ("1.23", "1.23")],
    );
    check(
        &RoundingPolicy::with_digits(RoundingStrategy::Down, 2).unwrap(),
        &[("1.239", "1.23"), ("-1.239", "-1.23")],
    );
    check(
        &RoundingPolicy::with_digits(RoundingStrategy::TowardsPositive, 1)
            .unwrap(),
        &[("1.21", "1.3"), ("-1.29", "-1.2")],
    );
    check(
        &RoundingPolicy::with_digits(RoundingStrategy::TowardsNegative, 0)
            .unwrap(),
        &[("1.9", "1"), ("-1.1", "-2")],
    );
}

#[test]
fn nearest_with_rounding_digit() {
    check(
        &RoundingPolicy::nearest(2, 5).unwrap(),
        &[
            ("1.235", "1.24"),
            ("1.2349", "1.23"),
            ("-1.235", "-1.24"),
            ("1.2", "1.2"),
        ],
    );
    check(
        &RoundingPolicy::nearest(2, 7).unwrap(),
        &[("1.236", "1.23"), ("1.237", "1.24"), ("-1.2369", "-1.23")],
    );
    check(&RoundingPolicy::nearest(0, 1).unwrap(), &[("4.1", "5"), ("4.09", "4")]);
}

#[test]
fn by_step() {
    let step = dec("0.25");
    check(
        &RoundingPolicy::with_step(RoundingStrategy::UpByStep, step).unwrap(),
        &[("1.1", "1.25"), ("1.25", "1.25"), ("-1.1", "-1")],
    );
    check(
        &RoundingPolicy::with_step(RoundingStrategy::DownByStep, step).unwrap(),
        &[("1.1", "1"), ("1.49", "1.25"), ("-1.1", "-1.25")],
    );
}

#[test]
fn idempotence() {
    let policies = [
        RoundingPolicy::with_digits(RoundingStrategy::Up, 3).unwrap(),
        RoundingPolicy::with_digits(RoundingStrategy::Down, 3).unwrap(),
        RoundingPolicy::with_digits(RoundingStrategy::TowardsPositive, 1)
            .unwrap(),
        RoundingPolicy::with_digits(RoundingStrategy::TowardsNegative, 1)
            .unwrap(),
        RoundingPolicy::nearest(2, 5).unwrap(),
        RoundingPolicy::nearest(4, 3).unwrap(),
        RoundingPolicy::with_step(RoundingStrategy::UpByStep, dec("0.2"))
            .unwrap(),
        RoundingPolicy::with_step(RoundingStrategy::DownByStep, dec("5"))
            .unwrap(),
    ];
    let values = ["0", "1.23456", "-1.23456", "999.995", "-0.00049", "12345"];
    for policy in &policies {
        for value in values {
            let once = policy.round(dec(value)).unwrap();
            assert_eq!(policy.round(once).unwrap(), once);
        }
    }
}

#[test]
fn idempotence_with_inexact_steps() {
    let third = dec("0.3333333333333333333333333333");
    for strategy in [RoundingStrategy::UpByStep, RoundingStrategy::DownByStep] {
        let policy = RoundingPolicy::with_step(strategy, third).unwrap();
        for value in ["12345.6789", "-12345.6789", "1", "0.5", "987654321.1"] {
            let once = policy.round(dec(value)).unwrap();
            assert_eq!(
                policy.round(once).unwrap(),
                once,
                "{} on {}",
                strategy,
                value
            );
        }
    }

    let up = RoundingPolicy::with_step(RoundingStrategy::UpByStep, third)
        .unwrap();
    let down = RoundingPolicy::with_step(RoundingStrategy::DownByStep, third)
        .unwrap();
    let high = up.round(dec("12345.6789")).unwrap();
    let low = down.round(dec("12345.6789")).unwrap();
    assert!(high > dec("12345.6789") && high < dec("12346.1"));
    assert!(low < dec("12345.6789") && low > dec("12345.6"));
}

#[test]
fn zero_step() {
    assert_eq!(
        RoundingPolicy::with_step(RoundingStrategy::UpByStep, Decimal::ZERO),
        Err(UnitError::DivisionByZero)
    );
    assert!(matches!(
        RoundingPolicy::new(2, 5, RoundingStrategy::Up, Decimal::ZERO),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        RoundingPolicy::with_step(RoundingStrategy::DownByStep, dec("-1")),
        Err(UnitError::InvalidArgument(_))
    ));
}

#[test]
fn mismatched_constructors() {
    assert!(matches!(
        RoundingPolicy::with_digits(RoundingStrategy::Nearest, 2),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        RoundingPolicy::with_digits(RoundingStrategy::UpByStep, 2),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        RoundingPolicy::with_step(RoundingStrategy::Up, Decimal::ONE),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        RoundingPolicy::nearest(2, 0),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        RoundingPolicy::nearest(28, 5),
        Err(UnitError::InvalidArgument(_))
    ));
}

#[test]
fn strategy_names() {
    assert_eq!(
        "up_by_step".parse::<RoundingStrategy>(),
        Ok(RoundingStrategy::UpByStep)
    );
    assert_eq!(RoundingStrategy::TowardsNegative.to_string(), "towards_negative");
    assert!("sideways".parse::<RoundingStrategy>().is_err());
}

#[test]
fn policy_from_config() {
    let policy: RoundingPolicy = serde_json::from_str(
        r#"{ "strategy": "down_by_step", "step": "0.5" }"#,
    )
    .unwrap();
    assert_eq!(policy.strategy(), RoundingStrategy::DownByStep);
    assert_eq!(policy.rounding_step(), dec("0.5"));
    assert_eq!(policy.round(dec("1.7")).unwrap(), dec("1.5"));

    assert!(serde_json::from_str::<RoundingPolicy>(
        r#"{ "strategy": "nearest", "digits": 2, "rounding_digit": 0 }"#
    )
    .is_err());
}
