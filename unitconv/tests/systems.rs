/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::thread;

use rust_decimal::Decimal;
use unitconv::{
    KnownUnitId, MetricIdentity, Unit, UnitError, UnitKind, IMPERIAL, NATURAL,
    SI,
};

#[test]
fn materialized_once() {
    let units = thread::scope(|s| {
        (0..8)
            .map(|_| s.spawn(|| KnownUnitId::Electronvolt.unit()))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<Unit>>()
    });
    assert!(NATURAL.is_materialized());
    assert!(units.iter().all(|u| u.ptr_eq(&units[0])));
}

#[test]
fn unit_membership() {
    let meter = KnownUnitId::Meter.unit();
    assert_eq!(meter.system(), Some(&SI));
    assert_eq!(KnownUnitId::Yard.unit().system(), Some(&IMPERIAL));
    assert_eq!(KnownUnitId::Foot.system(), &IMPERIAL);
    assert_eq!(SI.units().unwrap().len(), 26);

    let anonymous = Unit::base(MetricIdentity::new("meter"), None);
    assert_eq!(anonymous.system(), None);
    assert_ne!(anonymous, meter);
}

#[test]
fn equal_definitions_are_equal_units() {
    let a = Unit::base(MetricIdentity::new("widget").with_symbol("w"), None);
    let b = Unit::base(MetricIdentity::new("widget").with_symbol("w"), None);
    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);
}

#[test]
fn names_and_symbols() {
    for (id, name, symbol) in [
        (KnownUnitId::Kilometer, "kilometer", Some("km")),
        (KnownUnitId::Kilogram, "kilogram", Some("kg")),
        (KnownUnitId::Milliliter, "milliliter", Some("mL")),
        (KnownUnitId::Gigaelectronvolt, "gigaelectronvolt", Some("GeV")),
        (KnownUnitId::Celsius, "degree Celsius", Some("°C")),
        (KnownUnitId::SquareMeter, "square meter", Some("m²")),
        (KnownUnitId::Newton, "newton", Some("N")),
    ] {
        let unit = id.unit();
        assert_eq!(unit.name(), Some(name));
        assert_eq!(unit.symbol(), symbol);
    }
    assert!(KnownUnitId::Foot.unit().definition().is_some());
}

#[test]
fn scaled_structure() {
    let hour = KnownUnitId::Hour.unit();
    let scaled = hour.as_scaled().unwrap();
    assert_eq!(scaled.factor(), Decimal::from(60));
    assert_eq!(scaled.reference(), &KnownUnitId::Minute.unit());
    assert_eq!(hour.root(), &KnownUnitId::Second.unit());
    assert!(matches!(KnownUnitId::Second.unit().kind(), UnitKind::Base));

    let meter = KnownUnitId::Meter.unit();
    assert!(matches!(
        Unit::scaled(MetricIdentity::new("nothing"), None, Decimal::ZERO, &meter),
        Err(UnitError::InvalidArgument(_))
    ));
    assert!(matches!(
        Unit::scaled(MetricIdentity::new("less"), None, Decimal::NEGATIVE_ONE, &meter),
        Err(UnitError::InvalidArgument(_))
    ));
}

#[test]
fn identifiers() {
    assert_eq!(
        "us_gallon".parse::<KnownUnitId>(),
        Ok(KnownUnitId::UsGallon)
    );
    assert_eq!(KnownUnitId::SpeedOfLight.to_string(), "speed_of_light");
    assert!(matches!(
        "furlong".parse::<KnownUnitId>(),
        Err(UnitError::UnknownUnit(_))
    ));
    assert!(KnownUnitId::all()
        .iter()
        .all(|id| id.try_unit().is_ok()));
}
