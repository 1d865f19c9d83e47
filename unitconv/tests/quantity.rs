/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use unitconv::units::{Foot, Kilometer, Meter, Second, Yard};
use unitconv::{
    CustomMetric, KnownUnitId, MetricIdentity, Quantity, RoundingPolicy,
    TypedQuantity, Unit, UnitError, UnitType,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn meter() -> Unit {
    KnownUnitId::Meter.unit()
}

fn second() -> Unit {
    KnownUnitId::Second.unit()
}

#[test]
fn products_concatenate_terms() {
    let q = (Quantity::new(dec("2"), meter()) * Quantity::new(dec("3"), second()))
        .unwrap();
    assert_eq!(q.amount(), dec("6"));
    let unit = q.metric().as_unit().unwrap();
    assert_eq!(unit.terms(), vec![meter() ^ 1, second() ^ 1]);
    assert_eq!(unit.symbol(), Some("ms"));
}

#[test]
fn quotients_negate_divisor_terms() {
    let q = (Quantity::new(dec("6"), meter()) / Quantity::new(dec("3"), second()))
        .unwrap();
    assert_eq!(q.amount(), dec("2"));
    let unit = q.metric().as_unit().unwrap();
    assert_eq!(unit.terms(), vec![meter() ^ 1, second() ^ -1]);
    assert_eq!(unit.symbol(), Some("ms\u{207b}\u{b9}"));
}

#[test]
fn terms_are_not_cancelled() {
    let speed = (Quantity::new(dec("10"), meter())
        / Quantity::new(dec("2"), second()))
    .unwrap();
    let distance = (speed * Quantity::new(dec("4"), second())).unwrap();
    assert_eq!(distance.amount(), dec("20"));
    assert_eq!(
        distance.metric().as_unit().unwrap().terms(),
        vec![meter() ^ 1, second() ^ -1, second() ^ 1]
    );
    assert_ne!(distance.metric(), &meter());
}

#[test]
fn derived_equality_is_ordered() {
    let ms = Unit::from_terms(vec![meter() ^ 1, second() ^ 1]);
    let sm = Unit::from_terms(vec![second() ^ 1, meter() ^ 1]);
    let product = (Quantity::new(Decimal::ONE, meter())
        * Quantity::new(Decimal::ONE, second()))
    .unwrap();
    assert_eq!(product.metric(), &ms);
    assert_ne!(product.metric(), &sm);
    assert_ne!(ms, sm);
}

#[test]
fn addition_requires_identical_metrics() {
    assert!(matches!(
        Quantity::new(Decimal::ONE, meter()) + Quantity::new(Decimal::ONE, second()),
        Err(UnitError::IncompatibleMetric(..))
    ));
    assert_eq!(
        Quantity::new(Decimal::ONE, meter()) + Quantity::new(Decimal::ONE, meter()),
        Ok(Quantity::new(dec("2"), meter()))
    );
    assert_eq!(
        &Quantity::new(dec("5"), meter()) - &Quantity::new(dec("7"), meter()),
        Ok(Quantity::new(dec("-2"), meter()))
    );
    /* No implicit conversion. */
    assert!(matches!(
        Quantity::new(Decimal::ONE, meter())
            + Quantity::new(Decimal::ONE, KnownUnitId::Kilometer.unit()),
        Err(UnitError::IncompatibleMetric(..))
    ));
}

#[test]
fn comparison() {
    let a = Quantity::new(dec("1.5"), meter());
    let b = Quantity::new(dec("2"), meter());
    assert_eq!(a.compare(&b), Ok(Ordering::Less));
    assert!(matches!(
        a.compare(&Quantity::new(dec("1.5"), second())),
        Err(UnitError::IncompatibleMetric(..))
    ));
}

#[test]
fn division_by_zero() {
    assert_eq!(
        Quantity::new(Decimal::ONE, meter()) / Quantity::new(Decimal::ZERO, second()),
        Err(UnitError::DivisionByZero)
    );
    assert_eq!(
        Quantity::new(Decimal::ONE, meter()) / Decimal::ZERO,
        Err(UnitError::DivisionByZero)
    );
}

#[test]
fn rounding_keeps_the_metric() {
    let q = Quantity::new(dec("1.2345"), meter())
        .round(&RoundingPolicy::nearest(2, 5).unwrap())
        .unwrap();
    assert_eq!(q, Quantity::new(dec("1.23"), meter()));
}

#[test]
fn typed_conversion() {
    let km = TypedQuantity::<Kilometer>::new(dec("1.5"));
    let m = km.convert_to::<Meter>().unwrap();
    assert_eq!(m.amount(), dec("1500"));
    assert_eq!(m.unit(), meter());

    let ft = TypedQuantity::<Foot>::new(dec("10"));
    assert_eq!(ft.convert_to::<Meter>().unwrap().amount(), dec("3.048"));
}

#[test]
fn typed_arithmetic() {
    let a = TypedQuantity::<Meter>::new(dec("2"));
    let b = TypedQuantity::<Meter>::new(dec("3"));
    assert_eq!((a + b).unwrap().amount(), dec("5"));
    assert!(a < b);

    let speed = (b / TypedQuantity::<Second>::new(dec("2"))).unwrap();
    assert_eq!(speed.amount(), dec("1.5"));
    assert_eq!(
        speed.metric().as_unit().unwrap().terms(),
        vec![meter() ^ 1, second() ^ -1]
    );
}

#[test]
fn typed_from_untyped() {
    let q = Quantity::new(dec("4"), meter());
    let typed = TypedQuantity::<Meter>::try_from(q.clone()).unwrap();
    assert_eq!(Quantity::from(typed), q);
    assert!(matches!(
        TypedQuantity::<Second>::try_from(q),
        Err(UnitError::IncompatibleMetric(..))
    ));
}

#[test]
fn derived_symbol_needs_every_term_symbol() {
    let a = Unit::base(MetricIdentity::new("a"), None);
    let unit = Unit::from_terms(vec![meter() ^ 1, a ^ 2]);
    assert_eq!(unit.symbol(), None);
    assert_eq!(unit.to_string(), "m\u{22c5}a\u{b2}");
}

#[test]
fn custom_metrics_multiply() {
    let items = CustomMetric::new(MetricIdentity::new("items"));
    let per_meter = (Quantity::new(dec("12"), items.clone())
        / Quantity::new(dec("3"), meter()))
    .unwrap();
    assert_eq!(per_meter.amount(), dec("4"));
    let terms = per_meter.metric().as_unit().unwrap().terms();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].unit().identity(), items.identity());
    assert_eq!(terms[1], meter() ^ -1);

    let total = (per_meter * Quantity::new(dec("2"), meter())).unwrap();
    assert_eq!(total.amount(), dec("8"));
}

static FURLONG: Lazy<Unit> = Lazy::new(|| {
    Unit::scaled(
        MetricIdentity::new("furlong").with_symbol("fur"),
        None,
        Decimal::from(220),
        &KnownUnitId::Yard.unit(),
    )
    .unwrap()
});

enum Furlong {}

impl UnitType for Furlong {
    fn unit() -> Unit {
        FURLONG.clone()
    }
}

#[test]
fn typed_user_defined_unit() {
    let race = TypedQuantity::<Furlong>::new(dec("2"));
    assert!(race.unit().ptr_eq(&FURLONG));
    assert_eq!(format!("{:?}", race), "TypedQuantity(2 fur)");
    assert_eq!(race.convert_to::<Yard>().unwrap().amount(), dec("440"));
    assert_eq!(race.convert_to::<Foot>().unwrap().amount(), dec("1320"));
    assert_eq!(
        TypedQuantity::<Yard>::new(dec("110"))
            .convert_to::<Furlong>()
            .unwrap()
            .amount(),
        dec("0.5")
    );
}
