#![cfg(all(feature = "serde", feature = "outcome", feature = "tuple"))]
//! Serialization tests for the data types.
//!
//! The sum types serialize as tagged objects - `{"kind": ..., "value": ...}` -
//! so the representation stays self-describing; `Pair` serializes as a plain
//! record.

use maybers::maybe::Maybe;
use maybers::outcome::Outcome;
use maybers::tuple::Pair;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn maybe_serializes_as_kind_tagged_object() {
    let present: Maybe<i32> = Maybe::Just(5);
    let absent: Maybe<i32> = Maybe::Nothing;

    assert_eq!(
        serde_json::to_value(present).unwrap(),
        json!({"kind": "Just", "value": 5})
    );
    assert_eq!(
        serde_json::to_value(absent).unwrap(),
        json!({"kind": "Nothing"})
    );
}

#[rstest]
fn outcome_serializes_as_kind_tagged_object() {
    let success: Outcome<String, i32> = Outcome::Ok(5);
    let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());

    assert_eq!(
        serde_json::to_value(success).unwrap(),
        json!({"kind": "Ok", "value": 5})
    );
    assert_eq!(
        serde_json::to_value(failure).unwrap(),
        json!({"kind": "Err", "value": "broken"})
    );
}

#[rstest]
fn pair_serializes_as_a_plain_record() {
    let pair = Pair::new(1, "a");
    assert_eq!(
        serde_json::to_value(pair).unwrap(),
        json!({"first": 1, "second": "a"})
    );
}

#[rstest]
#[case(Maybe::Just(5))]
#[case(Maybe::Nothing)]
fn maybe_roundtrips_through_json(#[case] maybe: Maybe<i32>) {
    let encoded = serde_json::to_string(&maybe).unwrap();
    let decoded: Maybe<i32> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, maybe);
}

#[rstest]
fn outcome_roundtrips_through_json() {
    let cases: Vec<Outcome<String, i32>> =
        vec![Outcome::Ok(5), Outcome::Err("broken".to_string())];
    for outcome in cases {
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: Outcome<String, i32> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome);
    }
}

#[rstest]
fn pair_roundtrips_through_json() {
    let pair = Pair::new(1, "a".to_string());
    let encoded = serde_json::to_string(&pair).unwrap();
    let decoded: Pair<i32, String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, pair);
}
