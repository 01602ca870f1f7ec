use super::*;
use crate::{
    codec::DecodeError,
    registry::RegistryError,
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::json;

#[test]
fn set_encodes_the_single_key_wrapper() {
    let processor = SetParams {
        field: "attributes.flagged".to_string(),
        value: Scalar::from(true),
        overwrite: Scalar::from(false),
        ..SetParams::default()
    }
    .resolve()
    .unwrap();

    let value = processor.to_value();
    assert_eq!(
        value,
        json!({
            "set": {
                "field": "attributes.flagged",
                "value": true,
                "override": false,
            }
        })
    );
    assert_eq!(Processor::from_value(&value).unwrap(), processor);
}

#[test]
fn set_requires_field_then_value() {
    let err = SetParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "set" });

    let err = SetParams {
        field: "count".to_string(),
        ..SetParams::default()
    }
    .resolve()
    .unwrap_err();
    assert_eq!(err, ResolveError::ValueRequired { kind: "set" });
}

#[test]
fn remove_requires_a_field() {
    let err = RemoveParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "remove" });

    let processor = RemoveParams {
        field: "tmp".to_string(),
        ignore_missing: Scalar::from(true),
        ..RemoveParams::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(
        processor.to_value(),
        json!({"remove": {"field": "tmp", "ignore_missing": true}})
    );
}

#[test]
fn rename_requires_both_names() {
    let err = RenameParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "rename" });

    let err = RenameParams {
        field: "provider".to_string(),
        ..RenameParams::default()
    }
    .resolve()
    .unwrap_err();
    assert_eq!(err, ResolveError::TargetFieldRequired { kind: "rename" });
}

#[test]
fn lowercase_target_field_is_optional() {
    let in_place = LowercaseParams {
        field: "email".to_string(),
        ..LowercaseParams::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(in_place.to_value(), json!({"lowercase": {"field": "email"}}));

    let redirected = LowercaseParams {
        field: "email".to_string(),
        target_field: Scalar::from("email_lower"),
        ..LowercaseParams::default()
    }
    .resolve()
    .unwrap();
    let Processor::Lowercase(lowercase) = &redirected else {
        panic!("expected a lowercase processor");
    };
    assert_eq!(lowercase.target_field(), Some("email_lower"));
}

#[test]
fn pipeline_round_trips_in_order() {
    let mut pipeline = Pipeline::new();
    pipeline.set_description("normalize contact fields");
    pipeline
        .add(RenameParams {
            field: "mail".to_string(),
            target_field: "email".to_string(),
            ..RenameParams::default()
        })
        .unwrap();
    pipeline
        .add(LowercaseParams {
            field: "email".to_string(),
            ..LowercaseParams::default()
        })
        .unwrap();
    pipeline
        .add(RemoveParams {
            field: "mail_checksum".to_string(),
            ignore_missing: Scalar::from(true),
            ..RemoveParams::default()
        })
        .unwrap();

    let value = pipeline.to_value();
    assert_eq!(
        value,
        json!({
            "description": "normalize contact fields",
            "processors": [
                {"rename": {"field": "mail", "target_field": "email"}},
                {"lowercase": {"field": "email"}},
                {"remove": {"field": "mail_checksum", "ignore_missing": true}},
            ]
        })
    );

    let decoded = Pipeline::from_value(&value).unwrap();
    assert_eq!(decoded, pipeline);
    let kinds: Vec<_> = decoded
        .processors()
        .iter()
        .map(|p| p.kind().as_str())
        .collect();
    assert_eq!(kinds, ["rename", "lowercase", "remove"]);
}

#[test]
fn unknown_processor_names_the_discriminator() {
    let err = Pipeline::from_value(&json!({
        "processors": [{"uppercase": {"field": "email"}}]
    }))
    .unwrap_err();

    // reserved in the kind vocabulary, but not constructible
    assert!(matches!(
        err,
        DecodeError::Registry(RegistryError::UnsupportedType { discriminator, .. })
            if discriminator == "uppercase"
    ));
}

#[test]
fn processors_must_be_an_array() {
    let err = Pipeline::from_value(&json!({"processors": {"set": {}}})).unwrap_err();
    assert!(matches!(err, DecodeError::ExpectedArray { .. }));
}

#[test]
fn resolution_is_idempotent() {
    let processor = SetParams {
        field: "count".to_string(),
        value: Scalar::from(0_i64),
        ..SetParams::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(processor.clone().resolve().unwrap(), processor);
}
