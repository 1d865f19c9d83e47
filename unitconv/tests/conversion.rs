/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use unitconv::{ConversionKind, MetricIdentity, Unit, UnitConversion, UnitError};

fn unit(name: &str) -> Unit {
    Unit::base(MetricIdentity::new(name).with_symbol(name), None)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn reciprocal_is_an_involution() {
    let c = UnitConversion::linear(unit("a"), unit("b"), dec("4")).unwrap();
    let r = c.reciprocal();
    assert_eq!(r.source(), &unit("b"));
    assert_eq!(r.target(), &unit("a"));
    assert_eq!(r.convert(dec("8")).unwrap(), dec("2"));
    assert!(r.reciprocal().ptr_eq(&c));
}

#[test]
fn linear_steps_fold() {
    let ab = UnitConversion::linear(unit("a"), unit("b"), dec("2")).unwrap();
    let bc = UnitConversion::linear(unit("b"), unit("c"), dec("3")).unwrap();
    let ac = ab.compose(&bc).unwrap();
    assert_eq!(ac.source(), &unit("a"));
    assert_eq!(ac.target(), &unit("c"));
    match ac.kind() {
        ConversionKind::Linear { factor } => assert_eq!(*factor, dec("6")),
        kind => panic!("expected a linear conversion, got {}", kind),
    }
}

#[test]
fn composites_are_flattened() {
    let ab = UnitConversion::affine(unit("a"), unit("b"), dec("2"), dec("1"))
        .unwrap();
    let bc = UnitConversion::linear(unit("b"), unit("c"), dec("10")).unwrap();
    let cd = UnitConversion::affine(unit("c"), unit("d"), dec("1"), dec("-5"))
        .unwrap();

    let ac = ab.compose(&bc).unwrap();
    let ad = ac.compose(&cd).unwrap();
    match ad.kind() {
        ConversionKind::Composite(steps) => {
            assert_eq!(steps.len(), 3);
            assert!(steps[0].ptr_eq(&ab));
            assert!(steps[1].ptr_eq(&bc));
            assert!(steps[2].ptr_eq(&cd));
        }
        kind => panic!("expected a composite conversion, got {}", kind),
    }

    /* (3 * 2 + 1) * 10 - 5 */
    assert_eq!(ad.convert(dec("3")).unwrap(), dec("65"));
    assert_eq!(ad.convert_back(dec("65")).unwrap(), dec("3"));
}

#[test]
fn composition_is_associative_in_effect() {
    let ab = UnitConversion::affine(unit("a"), unit("b"), dec("1.8"), dec("32"))
        .unwrap();
    let bc = UnitConversion::linear(unit("b"), unit("c"), dec("0.5")).unwrap();
    let cd = UnitConversion::linear(unit("c"), unit("d"), dec("4")).unwrap();

    let left = ab.compose(&bc).unwrap().compose(&cd).unwrap();
    let right = ab.compose(&bc.compose(&cd).unwrap()).unwrap();
    for v in ["0", "-40", "100", "36.6"] {
        assert_eq!(
            left.convert(dec(v)).unwrap(),
            right.convert(dec(v)).unwrap()
        );
    }
}

#[test]
fn broken_paths_are_rejected() {
    let ab = UnitConversion::linear(unit("a"), unit("b"), dec("2")).unwrap();
    let cd = UnitConversion::linear(unit("c"), unit("d"), dec("2")).unwrap();
    assert!(matches!(
        ab.compose(&cd),
        Err(UnitError::InvalidConversionPath(..))
    ));
    assert!(matches!(
        UnitConversion::composite(vec![ab, cd]),
        Err(UnitError::InvalidConversionPath(..))
    ));
    assert!(matches!(
        UnitConversion::composite(Vec::new()),
        Err(UnitError::InvalidArgument(_))
    ));
}

#[test]
fn round_trip_collapses_to_identity() {
    let ab = UnitConversion::affine(unit("a"), unit("b"), dec("3"), dec("7"))
        .unwrap();
    let aa = ab.compose(&ab.reciprocal()).unwrap();
    assert!(matches!(aa.kind(), ConversionKind::Identity));
    assert_eq!(aa.convert(dec("12.5")).unwrap(), dec("12.5"));
}

#[test]
fn identity_operands_are_dropped() {
    let ab = UnitConversion::affine(unit("a"), unit("b"), dec("3"), dec("7"))
        .unwrap();
    let id = UnitConversion::identity(unit("b"));
    assert!(ab.compose(&id).unwrap().ptr_eq(&ab));
}

#[test]
fn zero_factor_is_rejected() {
    assert!(matches!(
        UnitConversion::linear(unit("a"), unit("b"), Decimal::ZERO),
        Err(UnitError::InvalidArgument(_))
    ));
}

#[test]
fn convert_back_undoes_convert() {
    let ab = UnitConversion::linear(unit("a"), unit("b"), dec("0.0254")).unwrap();
    let v = dec("12");
    assert_eq!(ab.convert_back(ab.convert(v).unwrap()).unwrap(), v);
}
