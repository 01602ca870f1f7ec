use super::*;
use crate::{codec::DecodeError, registry::RegistryError, resolve::ResolveError, scalar::Scalar};
use serde_json::json;

fn alias_map() -> FieldMap {
    let mut map = FieldMap::new();
    map.add_field(
        "route_length_miles",
        AliasFieldParams {
            path: "distance".to_string(),
        },
    )
    .unwrap();
    map
}

#[test]
fn alias_encodes_with_the_type_sibling() {
    let value = serde_json::to_value(alias_map()).unwrap();
    assert_eq!(
        value,
        json!({"route_length_miles": {"type": "alias", "path": "distance"}})
    );
}

#[test]
fn alias_decodes_from_the_wire_shape() {
    let map = FieldMap::from_value(&json!({
        "route_length_miles": {"type": "alias", "path": "distance"}
    }))
    .unwrap();

    assert_eq!(map, alias_map());
    let Some(Field::Alias(alias)) = map.get("route_length_miles") else {
        panic!("expected an alias field");
    };
    assert_eq!(alias.path(), "distance");
}

#[test]
fn alias_requires_a_path() {
    let err = AliasFieldParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::PathRequired { kind: "alias" });
}

#[test]
fn add_field_conflict_leaves_the_first_entry() {
    let mut map = alias_map();
    let err = map
        .add_field(
            "route_length_miles",
            AliasFieldParams {
                path: "other".to_string(),
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        FieldMapError::FieldExists {
            key: "route_length_miles".to_string(),
        }
    );
    let Some(Field::Alias(alias)) = map.get("route_length_miles") else {
        panic!("expected an alias field");
    };
    assert_eq!(alias.path(), "distance");
}

#[test]
fn set_field_overwrites() {
    let mut map = alias_map();
    map.set_field(
        "route_length_miles",
        AliasFieldParams {
            path: "other".to_string(),
        },
    )
    .unwrap();

    let Some(Field::Alias(alias)) = map.get("route_length_miles") else {
        panic!("expected an alias field");
    };
    assert_eq!(alias.path(), "other");
    assert_eq!(map.len(), 1);
}

#[test]
fn remove_field_returns_the_entry() {
    let mut map = alias_map();
    assert!(map.remove_field("route_length_miles").is_some());
    assert!(map.is_empty());
    assert!(map.remove_field("route_length_miles").is_none());
}

#[test]
fn missing_type_sibling_is_an_error() {
    let err = FieldMap::from_value(&json!({"title": {"path": "x"}})).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingType { field } if field == "title"
    ));
}

#[test]
fn unknown_type_names_the_discriminator() {
    let err = FieldMap::from_value(&json!({"title": {"type": "bogus_kind"}})).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Registry(RegistryError::UnsupportedType { discriminator, .. })
            if discriminator == "bogus_kind"
    ));
}

#[test]
fn keyword_round_trips_fully_populated() {
    let field = KeywordFieldParams {
        doc_values: Scalar::from(true),
        ignore_above: Scalar::from(256_i64),
        index: Scalar::from(true),
        normalizer: Scalar::from("lowercase"),
        null_value: Scalar::from("NULL"),
        store: Scalar::from(false),
    }
    .resolve()
    .unwrap();

    let value = field.to_value();
    assert_eq!(
        value,
        json!({
            "type": "keyword",
            "doc_values": true,
            "ignore_above": 256,
            "index": true,
            "normalizer": "lowercase",
            "null_value": "NULL",
            "store": false,
        })
    );
    assert_eq!(Field::from_entry("label", &value).unwrap(), field);
}

#[test]
fn every_builtin_kind_round_trips() {
    for discriminator in crate::registry::field_discriminators() {
        let entry = json!({"type": discriminator});
        let field = Field::from_entry("probe", &entry).unwrap();
        assert_eq!(field.kind().as_str(), discriminator);
        assert_eq!(Field::from_entry("probe", &field.to_value()).unwrap(), field);
    }
}

#[test]
fn numeric_params_coerce_from_text() {
    let field = LongFieldParams {
        coerce: Scalar::from("true"),
        null_value: Scalar::from(0_i64),
        ..LongFieldParams::default()
    }
    .resolve()
    .unwrap();

    let Field::Long(long) = &field else {
        panic!("expected a long field");
    };
    assert!(long.coerce());
    assert_eq!(long.null_value(), &Scalar::from(0_i64));
}

#[test]
fn numeric_coercion_failure_names_param_and_field() {
    let err = LongFieldParams {
        coerce: Scalar::from("maybe"),
        ..LongFieldParams::default()
    }
    .resolve()
    .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::InvalidParam { param: "coerce", on, .. } if on == "long"
    ));
}

#[test]
fn scaled_float_requires_the_factor() {
    let err = ScaledFloatFieldParams::default().resolve().unwrap_err();
    assert_eq!(
        err,
        ResolveError::ScalingFactorRequired {
            kind: "scaled_float",
        }
    );

    let field = ScaledFloatFieldParams {
        scaling_factor: Scalar::from(100_i64),
        ..ScaledFloatFieldParams::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(
        field.to_value(),
        json!({"type": "scaled_float", "scaling_factor": 100})
    );
}

#[test]
fn resolution_is_idempotent() {
    let field = alias_map().remove_field("route_length_miles").unwrap();
    assert_eq!(field.clone().resolve().unwrap(), field);
}

#[test]
fn encode_preserves_insertion_order() {
    let mut map = FieldMap::new();
    map.add_field("zulu", BooleanFieldParams::default()).unwrap();
    map.add_field("alpha", BooleanFieldParams::default()).unwrap();

    let encoded = serde_json::to_string(&map).unwrap();
    let zulu = encoded.find("zulu").unwrap();
    let alpha = encoded.find("alpha").unwrap();
    assert!(zulu < alpha);

    // decode keeps document order too
    let decoded: FieldMap = serde_json::from_str(&encoded).unwrap();
    let names: Vec<_> = decoded.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, ["zulu", "alpha"]);
}
