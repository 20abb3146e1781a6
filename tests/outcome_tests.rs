#![cfg(feature = "outcome")]
//! Unit tests for the Outcome<E, A> type.
//!
//! Covers the success/failure contract: predicates, defaulting, mapping on
//! both payloads, first-error-wins combining, chaining, the homogeneous
//! `either` projection, and conversion to and from `Maybe`.

use maybers::maybe::Maybe;
use maybers::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// Predicates and with_default
// =============================================================================

#[rstest]
fn ok_is_ok() {
    let value: Outcome<String, i32> = Outcome::Ok(42);
    assert!(value.is_ok());
    assert!(!value.is_err());
}

#[rstest]
fn err_is_err() {
    let value: Outcome<String, i32> = Outcome::Err("broken".to_string());
    assert!(value.is_err());
    assert!(!value.is_ok());
}

#[rstest]
fn with_default_unwraps_ok() {
    let value: Outcome<String, i32> = Outcome::Ok(42);
    assert_eq!(value.with_default(0), 42);
}

#[rstest]
fn with_default_discards_error_payload() {
    let value: Outcome<String, i32> = Outcome::Err("broken".to_string());
    assert_eq!(value.with_default(0), 0);
}

// =============================================================================
// either
// =============================================================================

#[rstest]
fn either_returns_ok_payload() {
    let value: Outcome<&str, &str> = Outcome::Ok("hi");
    assert_eq!(value.either(), "hi");
}

#[rstest]
fn either_returns_err_payload() {
    let value: Outcome<&str, &str> = Outcome::Err("oops");
    assert_eq!(value.either(), "oops");
}

// =============================================================================
// Maybe conversions
// =============================================================================

#[rstest]
fn to_maybe_projects_ok_to_just() {
    let value: Outcome<&str, i32> = Outcome::Ok(5);
    assert_eq!(value.to_maybe(), Maybe::Just(5));
}

#[rstest]
fn to_maybe_discards_error() {
    let value: Outcome<&str, i32> = Outcome::Err("x");
    assert_eq!(value.to_maybe(), Maybe::Nothing);
}

#[rstest]
fn from_maybe_wraps_just_in_ok() {
    assert_eq!(Outcome::from_maybe("x", Maybe::Just(5)), Outcome::Ok(5));
}

#[rstest]
fn from_maybe_uses_default_error_for_nothing() {
    assert_eq!(
        Outcome::from_maybe("x", Maybe::<i32>::Nothing),
        Outcome::Err("x")
    );
}

#[rstest]
#[case(Maybe::Just(5))]
#[case(Maybe::Nothing)]
fn from_maybe_then_to_maybe_roundtrips(#[case] maybe: Maybe<i32>) {
    assert_eq!(Outcome::from_maybe("missing", maybe).to_maybe(), maybe);
}

// =============================================================================
// map and map_error
// =============================================================================

#[rstest]
fn map_transforms_ok() {
    let value: Outcome<String, i32> = Outcome::Ok(21);
    assert_eq!(value.map(|n| n * 2), Outcome::Ok(42));
}

#[rstest]
fn map_passes_err_through_without_invoking() {
    let mut calls = 0;
    let value: Outcome<String, i32> = Outcome::Err("broken".to_string());
    let result = value.map(|n| {
        calls += 1;
        n * 2
    });
    assert_eq!(result, Outcome::Err("broken".to_string()));
    assert_eq!(calls, 0);
}

#[rstest]
fn map_error_transforms_err() {
    let value: Outcome<i32, &str> = Outcome::Err(404);
    assert_eq!(
        value.map_error(|code| code + 1),
        Outcome::<i32, &str>::Err(405)
    );
}

#[rstest]
fn map_error_passes_ok_through_without_invoking() {
    let mut calls = 0;
    let value: Outcome<i32, &str> = Outcome::Ok("fine");
    let result = value.map_error(|code| {
        calls += 1;
        code + 1
    });
    assert_eq!(result, Outcome::Ok("fine"));
    assert_eq!(calls, 0);
}

// =============================================================================
// map2 - first error wins
// =============================================================================

#[rstest]
fn map2_combines_two_ok_values() {
    let first: Outcome<String, i32> = Outcome::Ok(1);
    let second: Outcome<String, i32> = Outcome::Ok(2);
    assert_eq!(first.map2(second, |a, b| a + b), Outcome::Ok(3));
}

#[rstest]
fn map2_returns_first_err_when_both_fail() {
    let first: Outcome<&str, i32> = Outcome::Err("a");
    let second: Outcome<&str, i32> = Outcome::Err("b");
    assert_eq!(first.map2(second, |a, b| a + b), Outcome::Err("a"));
}

#[rstest]
fn map2_returns_left_err_over_right_ok() {
    let first: Outcome<&str, i32> = Outcome::Err("a");
    let second: Outcome<&str, i32> = Outcome::Ok(2);
    assert_eq!(first.map2(second, |a, b| a + b), Outcome::Err("a"));
}

#[rstest]
fn map2_returns_right_err_when_left_is_ok() {
    let first: Outcome<&str, i32> = Outcome::Ok(1);
    let second: Outcome<&str, i32> = Outcome::Err("b");
    assert_eq!(first.map2(second, |a, b| a + b), Outcome::Err("b"));
}

#[rstest]
fn map2_does_not_invoke_function_on_short_circuit() {
    let mut calls = 0;
    let first: Outcome<&str, i32> = Outcome::Err("a");
    let second: Outcome<&str, i32> = Outcome::Ok(2);
    let result = first.map2(second, |a, b| {
        calls += 1;
        a + b
    });
    assert_eq!(result, Outcome::Err("a"));
    assert_eq!(calls, 0);
}

// =============================================================================
// map3 - first error wins, checked in order
// =============================================================================

#[rstest]
fn map3_combines_three_ok_values() {
    let a: Outcome<&str, i32> = Outcome::Ok(1);
    let b: Outcome<&str, i32> = Outcome::Ok(2);
    let c: Outcome<&str, i32> = Outcome::Ok(3);
    assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Outcome::Ok(6));
}

#[rstest]
#[case(Outcome::Err("a"), Outcome::Err("b"), Outcome::Err("c"), "a")]
#[case(Outcome::Ok(1), Outcome::Err("b"), Outcome::Err("c"), "b")]
#[case(Outcome::Ok(1), Outcome::Ok(2), Outcome::Err("c"), "c")]
#[case(Outcome::Err("a"), Outcome::Ok(2), Outcome::Err("c"), "a")]
fn map3_returns_first_err_in_order(
    #[case] first: Outcome<&str, i32>,
    #[case] second: Outcome<&str, i32>,
    #[case] third: Outcome<&str, i32>,
    #[case] expected: &str,
) {
    assert_eq!(
        first.map3(second, third, |x, y, z| x + y + z),
        Outcome::Err(expected)
    );
}

#[rstest]
fn map3_does_not_invoke_function_on_short_circuit() {
    let mut calls = 0;
    let a: Outcome<&str, i32> = Outcome::Ok(1);
    let b: Outcome<&str, i32> = Outcome::Err("b");
    let c: Outcome<&str, i32> = Outcome::Ok(3);
    let result = a.map3(b, c, |x, y, z| {
        calls += 1;
        x + y + z
    });
    assert_eq!(result, Outcome::Err("b"));
    assert_eq!(calls, 0);
}

// =============================================================================
// and_then
// =============================================================================

fn non_zero(n: i32) -> Outcome<String, i32> {
    if n == 0 {
        Outcome::Err("zero".to_string())
    } else {
        Outcome::Ok(n)
    }
}

#[rstest]
fn and_then_chains_fallible_computations() {
    assert_eq!(Outcome::Ok(4).and_then(non_zero), Outcome::Ok(4));
    assert_eq!(
        Outcome::Ok(0).and_then(non_zero),
        Outcome::Err("zero".to_string())
    );
}

#[rstest]
fn and_then_short_circuits_on_err() {
    let mut calls = 0;
    let value: Outcome<String, i32> = Outcome::Err("upstream".to_string());
    let result = value.and_then(|n| {
        calls += 1;
        non_zero(n)
    });
    assert_eq!(result, Outcome::Err("upstream".to_string()));
    assert_eq!(calls, 0);
}

// =============================================================================
// as_ref
// =============================================================================

#[rstest]
fn as_ref_projects_without_consuming() {
    let value: Outcome<String, String> = Outcome::Ok("done".to_string());
    assert_eq!(value.as_ref().map(|s| s.len()), Outcome::Ok(4));
    assert!(value.is_ok());
}
