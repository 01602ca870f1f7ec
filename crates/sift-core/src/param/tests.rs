use super::*;
use crate::param::{BoostParam, LenientParam, NameParam, NullValueParam, OperatorParam};
use crate::scalar::Scalar;
use serde_json::json;

#[test]
fn unset_params_never_serialize() {
    let mut obj = WireMap::new();
    encode_params!(
        &mut obj,
        BoostParam::default(),
        LenientParam::default(),
        NameParam::default(),
        NullValueParam::default(),
        OperatorParam::default(),
    );
    assert!(obj.is_empty());
}

#[test]
fn explicitly_set_default_still_serializes() {
    // boost defaults to 1.0; assigning 1.0 is explicit presence
    let mut boost = BoostParam::default();
    boost.set(1.0).unwrap();

    let mut obj = WireMap::new();
    boost.encode_into(&mut obj);
    assert_eq!(obj.get("boost"), Some(&json!(1)));

    let mut decoded = BoostParam::default();
    decoded.decode_from(&obj).unwrap();
    assert_eq!(decoded.raw(), Some(1.0));
}

#[test]
fn defaults_surface_through_get() {
    let boost = BoostParam::default();
    assert_eq!(boost.raw(), None);
    assert_eq!(boost.get(), 1.0);

    let lenient = LenientParam::default();
    assert!(!lenient.get());
}

#[test]
fn numeric_text_coerces_on_decode() {
    let mut obj = WireMap::new();
    obj.insert("boost".to_string(), json!("2"));

    let mut boost = BoostParam::default();
    boost.decode_from(&obj).unwrap();
    assert_eq!(boost.get(), 2.0);
}

#[test]
fn null_and_absent_leave_the_param_untouched() {
    let mut obj = WireMap::new();
    obj.insert("lenient".to_string(), json!(null));

    let mut lenient = LenientParam::default();
    lenient.decode_from(&obj).unwrap();
    assert!(lenient.is_zero());
}

#[test]
fn coercion_failure_names_the_value() {
    let mut obj = WireMap::new();
    obj.insert("boost".to_string(), json!("abc"));

    let err = BoostParam::default().decode_from(&obj).unwrap_err();
    assert_eq!(err, crate::scalar::ScalarError::invalid("abc", "number"));
}

#[test]
fn enum_param_round_trips_its_token() {
    let mut operator = OperatorParam::default();
    assert_eq!(operator.get(), Operator::Or);
    operator.set(Operator::And);

    let mut obj = WireMap::new();
    operator.encode_into(&mut obj);
    assert_eq!(obj.get("operator"), Some(&json!("and")));

    let mut decoded = OperatorParam::default();
    decoded.decode_from(&obj).unwrap();
    assert_eq!(decoded.raw(), Some(Operator::And));
}

#[test]
fn enum_param_rejects_unknown_tokens() {
    let mut obj = WireMap::new();
    obj.insert("operator".to_string(), json!("xor"));
    assert!(OperatorParam::default().decode_from(&obj).is_err());
}

#[test]
fn scalar_param_keeps_the_wire_shape() {
    let mut null_value = NullValueParam::default();
    null_value.set("NULL");

    let mut obj = WireMap::new();
    null_value.encode_into(&mut obj);
    assert_eq!(obj.get("null_value"), Some(&json!("NULL")));

    let mut numeric = NullValueParam::default();
    numeric.set(0_i64);
    let mut obj = WireMap::new();
    numeric.encode_into(&mut obj);
    assert_eq!(obj.get("null_value"), Some(&json!(0)));
}

#[test]
fn wire_values_keep_integers_integral() {
    assert_eq!(wire_value(50.0), json!(50));
    assert_eq!(wire_value(0.85), json!(0.85));
    assert_eq!(wire_value(Scalar::from(true)), json!(true));
}
