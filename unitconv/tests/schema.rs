/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde_json::json;
use unitconv::KnownUnitId;

#[test]
fn known_unit_json() {
    #[cfg(feature = "serialize_as_string")]
    let expected = json!("kilometer");
    #[cfg(not(feature = "serialize_as_string"))]
    let expected = json!("Kilometer");

    assert_eq!(
        serde_json::to_value(KnownUnitId::Kilometer).unwrap(),
        expected
    );
    assert_eq!(
        serde_json::from_value::<KnownUnitId>(expected).unwrap(),
        KnownUnitId::Kilometer
    );
}

#[cfg(feature = "schemars")]
#[test]
fn string_schema() {
    use schemars::schema_for;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(KnownUnitId)).unwrap(),
    )
    .unwrap();

    #[cfg(feature = "serialize_as_string")]
    let examples = [json!("us_gallon")];
    #[cfg(not(feature = "serialize_as_string"))]
    let examples = [json!("UsGallon")];

    examples.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });
}

#[cfg(feature = "schemars")]
#[test]
fn rounding_schema() {
    use schemars::schema_for;
    use unitconv::RoundingConfig;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(RoundingConfig)).unwrap(),
    )
    .unwrap();

    let valid = [
        json!({ "strategy": "nearest", "digits": 2, "rounding_digit": 5 }),
        json!({ "strategy": "up_by_step", "step": "0.25" }),
    ];
    valid.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });
    assert!(!schema.is_valid(&json!({ "strategy": "sideways" })));
}
