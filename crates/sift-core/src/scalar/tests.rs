use super::*;
use proptest::prelude::*;
use serde_json::json;
use time::macros::datetime;

#[test]
fn number_coercion_matrix() {
    assert_eq!(Scalar::from(3_i64).as_f64(), Some(3.0));
    assert_eq!(Scalar::from(3.0).as_f64(), Some(3.0));
    assert_eq!(Scalar::from("3").as_f64(), Some(3.0));
    assert_eq!(Scalar::from(" 3.5 ").as_f64(), Some(3.5));

    assert_eq!(Scalar::from("3.4.5").as_f64(), None);
    assert_eq!(Scalar::from("abc").as_f64(), None);
    assert_eq!(Scalar::from(true).as_f64(), None);
    assert_eq!(Scalar::Absent.as_f64(), None);
}

#[test]
fn bool_coercion_matrix() {
    assert_eq!(Scalar::from(true).as_bool(), Some(true));
    assert_eq!(Scalar::from("false").as_bool(), Some(false));
    assert_eq!(Scalar::from("TRUE").as_bool(), Some(true));

    assert_eq!(Scalar::from("yes").as_bool(), None);
    assert_eq!(Scalar::from(1_i64).as_bool(), None);
}

#[test]
fn time_coercion_parses_rfc3339_text() {
    let t = datetime!(2021-06-09 12:30:00 UTC);
    assert_eq!(Scalar::from(t).as_time(), Some(t));
    assert_eq!(Scalar::from("2021-06-09T12:30:00Z").as_time(), Some(t));
    assert_eq!(Scalar::from("june 9th").as_time(), None);
}

#[test]
fn equality_is_coerced_not_structural() {
    assert_eq!(Scalar::from(3_i64), Scalar::from("3"));
    assert_eq!(Scalar::from(3.0), Scalar::from(3_u32));
    assert_eq!(Scalar::from(true), Scalar::from("true"));
    assert_eq!(
        Scalar::from(datetime!(2021-06-09 12:30:00 UTC)),
        Scalar::from("2021-06-09T12:30:00Z")
    );

    assert_ne!(Scalar::from(3.0), Scalar::from(4.0));
    assert_ne!(Scalar::from("abc"), Scalar::from("abd"));
}

#[test]
fn absent_is_distinct_from_every_zero() {
    assert!(Scalar::Absent.is_unset());
    assert!(!Scalar::from(0.0).is_unset());
    assert!(!Scalar::from("").is_unset());

    assert_ne!(Scalar::Absent, Scalar::from(0.0));
    assert_ne!(Scalar::Absent, Scalar::from(false));
}

#[test]
fn lossless_text_render() {
    assert_eq!(Scalar::from(3.0).to_text(), Some("3".to_string()));
    assert_eq!(Scalar::from(3.5).to_text(), Some("3.5".to_string()));
    assert_eq!(Scalar::from(true).to_text(), Some("true".to_string()));
    assert_eq!(Scalar::Absent.to_text(), None);
}

#[test]
fn from_wire_rejects_non_scalar_json() {
    let err = Scalar::from_wire(&json!({"nested": 1}), "boost").unwrap_err();
    assert_eq!(
        err,
        ScalarError::InvalidValue {
            value: json!({"nested": 1}).to_string(),
            target: "boost",
        }
    );
    assert!(Scalar::from_wire(&json!([1, 2]), "boost").is_err());
}

#[test]
fn integral_numbers_encode_as_json_integers() {
    assert_eq!(number_to_value(21.0), json!(21));
    assert_eq!(number_to_value(-3.0), json!(-3));
    assert_eq!(number_to_value(0.5), json!(0.5));
}

#[test]
fn flex_number_accepts_numeric_text() {
    let mut n = FlexNumber::default();
    assert!(n.is_unset());
    n.set("3").unwrap();
    assert_eq!(n.get(), Some(3.0));
    n.set(2.5).unwrap();
    assert_eq!(n.get(), Some(2.5));

    let err = FlexNumber::default().set("abc").unwrap_err();
    assert_eq!(err, ScalarError::invalid("abc", "number"));
}

#[test]
fn flex_empty_text_means_unset() {
    let mut n = FlexNumber::default();
    n.set(3.0).unwrap();
    n.set("").unwrap();
    assert!(n.is_unset());

    let mut t = FlexText::default();
    t.set("standard").unwrap();
    t.set("").unwrap();
    assert!(t.is_unset());

    let mut b = FlexBool::default();
    b.set(true).unwrap();
    b.set(Scalar::Absent).unwrap();
    assert!(b.is_unset());
}

#[test]
fn flex_text_stores_the_lossless_render() {
    let mut t = FlexText::default();
    t.set(50_u64).unwrap();
    assert_eq!(t.get(), Some("50"));
    t.set(true).unwrap();
    assert_eq!(t.get(), Some("true"));
}

proptest! {
    #[test]
    fn number_survives_text_round_trip(f in proptest::num::f64::NORMAL) {
        let rendered = Scalar::from(f).to_text().unwrap();
        let parsed = Scalar::from(rendered).as_f64().unwrap();
        prop_assert_eq!(parsed, f);
    }
}
