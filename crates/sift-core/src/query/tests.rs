use super::*;
use crate::{
    codec::DecodeError,
    param::Operator,
    registry::RegistryError,
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::json;

fn named_match(name: &str) -> MatchParams {
    MatchParams {
        field: "message".to_string(),
        query: Scalar::from("this is a test"),
        name: Scalar::from(name),
        ..MatchParams::default()
    }
}

#[test]
fn match_encodes_the_field_keyed_body() {
    let clause = MatchParams {
        field: "message".to_string(),
        query: Scalar::from("this is a test"),
        operator: Some(Operator::And),
        boost: Scalar::from(2_i64),
        ..MatchParams::default()
    }
    .resolve()
    .unwrap();

    assert_eq!(
        clause.to_value(),
        json!({
            "match": {
                "message": {
                    "query": "this is a test",
                    "operator": "and",
                    "boost": 2,
                }
            }
        })
    );
    assert_eq!(Clause::from_value(&clause.to_value()).unwrap(), clause);
}

#[test]
fn match_requires_field_then_query() {
    let err = MatchParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "match" });

    let err = MatchParams {
        field: "message".to_string(),
        ..MatchParams::default()
    }
    .resolve()
    .unwrap_err();
    assert_eq!(err, ResolveError::QueryRequired { kind: "match" });
}

#[test]
fn match_accepts_the_scalar_shorthand() {
    let clause = Clause::from_value(&json!({"match": {"message": "hello"}})).unwrap();
    let Clause::Match(m) = &clause else {
        panic!("expected a match clause");
    };
    assert_eq!(m.field(), "message");
    assert_eq!(m.query(), &Scalar::from("hello"));
}

#[test]
fn term_requires_field_then_value() {
    let err = TermParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "term" });

    let err = TermParams {
        field: "status".to_string(),
        ..TermParams::default()
    }
    .resolve()
    .unwrap_err();
    assert_eq!(err, ResolveError::ValueRequired { kind: "term" });
}

#[test]
fn exists_requires_a_field() {
    let err = ExistsParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "exists" });

    let clause = ExistsParams {
        field: "user".to_string(),
        ..ExistsParams::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(clause.to_value(), json!({"exists": {"field": "user"}}));
}

#[test]
fn query_string_round_trips_the_wire_fixture() {
    let fixture = json!({
        "query_string": {
            "query": "city:portland",
            "default_field": "city",
            "boost": 2,
            "fields": ["city", "city.raw"],
        }
    });

    let clause = Clause::from_value(&fixture).unwrap();
    let Clause::QueryString(qs) = &clause else {
        panic!("expected a query_string clause");
    };
    assert_eq!(qs.query(), "city:portland");
    assert_eq!(qs.default_field(), Some("city"));
    assert_eq!(qs.fields(), ["city", "city.raw"]);

    assert_eq!(clause.to_value(), fixture);
}

#[test]
fn query_string_requires_query_text() {
    let err = QueryStringParams::default().resolve().unwrap_err();
    assert_eq!(err, ResolveError::QueryRequired { kind: "query_string" });
}

#[test]
fn bool_composes_ordered_slots() {
    let mut must = Clauses::new();
    must.add(named_match("first")).unwrap();
    must.add(named_match("second")).unwrap();
    let mut must_not = Clauses::new();
    must_not
        .add(ExistsParams {
            field: "deleted_at".to_string(),
            ..ExistsParams::default()
        })
        .unwrap();

    let clause = BoolParams {
        must,
        must_not,
        minimum_should_match: Scalar::from(1_i64),
        ..BoolParams::default()
    }
    .resolve()
    .unwrap();

    let value = clause.to_value();
    let body = &value["bool"];
    assert_eq!(body["must"].as_array().unwrap().len(), 2);
    assert_eq!(body["must"][0]["match"]["message"]["_name"], json!("first"));
    assert_eq!(body["must_not"][0]["exists"]["field"], json!("deleted_at"));
    // text-flavored storage keeps the lossless render
    assert_eq!(body["minimum_should_match"], json!("1"));
    assert!(body.get("should").is_none());

    assert_eq!(Clause::from_value(&value).unwrap(), clause);
}

#[test]
fn clauses_decode_object_or_array() {
    let from_object = Clauses::from_value(&json!({
        "exists": {"field": "user"},
        "match_all": {},
    }))
    .unwrap();
    let from_array = Clauses::from_value(&json!([
        {"exists": {"field": "user"}},
        {"match_all": {}},
    ]))
    .unwrap();

    assert_eq!(from_object, from_array);
    assert_eq!(from_array.len(), 2);
    assert_eq!(from_array[0].kind(), QueryKind::Exists);
    assert_eq!(from_array[1].kind(), QueryKind::MatchAll);
}

#[test]
fn unknown_discriminator_names_the_key() {
    let err = Clauses::from_value(&json!({"bogus_kind": {}})).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Registry(RegistryError::UnsupportedType { discriminator, .. })
            if discriminator == "bogus_kind"
    ));
}

#[test]
fn remove_by_name_removes_every_match() {
    let mut clauses = Clauses::new();
    clauses.add(named_match("dup")).unwrap();
    clauses.add(named_match("keep")).unwrap();
    clauses.add(named_match("dup")).unwrap();

    assert_eq!(clauses.remove_by_name("dup"), 2);
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].name(), Some("keep"));
    assert_eq!(clauses.remove_by_name("dup"), 0);
}

#[test]
fn decay_requirements_are_ordered() {
    let err = ScoreFunctionParams::Gauss(DecayParams::default())
        .resolve()
        .unwrap_err();
    assert_eq!(err, ResolveError::FieldRequired { kind: "gauss" });

    let err = ScoreFunctionParams::Gauss(DecayParams {
        field: "published".to_string(),
        ..DecayParams::default()
    })
    .resolve()
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::OriginRequired {
            kind: "gauss",
            field: "published".to_string(),
        }
    );

    let err = ScoreFunctionParams::Gauss(DecayParams {
        field: "published".to_string(),
        origin: Scalar::from("2021-06-09T12:30:00Z"),
        ..DecayParams::default()
    })
    .resolve()
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::ScaleRequired {
            kind: "gauss",
            field: "published".to_string(),
        }
    );
}

#[test]
fn function_score_requires_functions() {
    let err = FunctionScoreParams::default().resolve().unwrap_err();
    assert_eq!(
        err,
        ResolveError::FunctionsRequired {
            kind: "function_score",
        }
    );
}

#[test]
fn function_score_round_trips() {
    let inner = MatchAllParams::default().resolve().unwrap();
    let clause = FunctionScoreParams {
        query: Some(inner),
        functions: vec![
            ScoreFunctionParams::Exp(DecayParams {
                field: "age".to_string(),
                origin: Scalar::from(0_i64),
                scale: Scalar::from(10_i64),
                decay: Scalar::from(0.5),
                ..DecayParams::default()
            }),
            ScoreFunctionParams::Weight(2.5),
        ],
        max_boost: Scalar::from(5_i64),
        ..FunctionScoreParams::default()
    }
    .resolve()
    .unwrap();

    let value = clause.to_value();
    assert_eq!(
        value,
        json!({
            "function_score": {
                "query": {"match_all": {}},
                "functions": [
                    {"exp": {"age": {"origin": 0, "scale": 10, "decay": 0.5}}},
                    {"weight": 2.5},
                ],
                "max_boost": 5,
            }
        })
    );
    assert_eq!(Clause::from_value(&value).unwrap(), clause);
}

#[test]
fn term_round_trips_fully_populated() {
    let clause = TermParams {
        field: "status".to_string(),
        value: Scalar::from("published"),
        boost: Scalar::from(1.2),
        case_insensitive: Scalar::from(true),
        name: Scalar::from("by-status"),
    }
    .resolve()
    .unwrap();

    let value = clause.to_value();
    assert_eq!(
        value,
        json!({
            "term": {
                "status": {
                    "value": "published",
                    "boost": 1.2,
                    "case_insensitive": true,
                    "_name": "by-status",
                }
            }
        })
    );
    assert_eq!(Clause::from_value(&value).unwrap(), clause);
}

#[test]
fn resolution_is_idempotent() {
    let clause = named_match("again").resolve().unwrap();
    assert_eq!(clause.clone().resolve().unwrap(), clause);
}

#[test]
fn clauses_serde_embeds_in_larger_documents() {
    let mut clauses = Clauses::new();
    clauses.add(named_match("tracked")).unwrap();

    let encoded = serde_json::to_string(&clauses).unwrap();
    let decoded: Clauses = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, clauses);
}
