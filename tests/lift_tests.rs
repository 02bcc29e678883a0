//! Tests for arithmetic, comparison and property lifts used through the
//! sequence operations.

#![cfg(feature = "array")]

use std::collections::HashMap;

use pipekit::array::lift::{
    add, decrement, divide, divide_by, equal, exponentiate, greater_or_equal, increment,
    less_or_equal, modulo, multiply_by, not_equal, pluck, raise_to_power, reciprocate, subtract,
    subtract_from,
};
use pipekit::array::{keep_if, remove_if, transform};
use rstest::rstest;

// =============================================================================
// Arithmetic
// =============================================================================

#[rstest]
fn test_arithmetic_over_sequence() {
    let values = [1, 2, 4];
    assert_eq!(transform(add(1), values), vec![2.0, 3.0, 5.0]);
    assert_eq!(transform(subtract(1), values), vec![0.0, 1.0, 3.0]);
    assert_eq!(transform(subtract_from(1), values), vec![0.0, -1.0, -3.0]);
    assert_eq!(transform(multiply_by(0.5), values), vec![0.5, 1.0, 2.0]);
    assert_eq!(transform(divide_by(2), values), vec![0.5, 1.0, 2.0]);
    assert_eq!(transform(divide(8), values), vec![8.0, 4.0, 2.0]);
    assert_eq!(transform(raise_to_power(2), values), vec![1.0, 4.0, 16.0]);
    assert_eq!(transform(exponentiate(2), values), vec![2.0, 4.0, 16.0]);
    assert_eq!(transform(modulo(3), values), vec![1.0, 2.0, 1.0]);
    assert_eq!(transform(increment(), values), vec![2.0, 3.0, 5.0]);
    assert_eq!(transform(decrement(), values), vec![0.0, 1.0, 3.0]);
    assert_eq!(transform(reciprocate(), values), vec![1.0, 0.5, 0.25]);
}

#[rstest]
fn test_numeric_strings_are_read_as_numbers() {
    assert_eq!(transform(add("1.5"), ["1", "2px"]), vec![2.5, 3.5]);
}

#[rstest]
fn test_non_numeric_elements_yield_nan() {
    let results = transform(add(1), ["x", "3"]);
    assert!(results[0].is_nan());
    assert_eq!(results[1], 4.0);
}

#[rstest]
#[case("not a number")]
#[case("")]
fn test_non_numeric_operand_yields_nan_everywhere(#[case] operand: &str) {
    let results = transform(multiply_by(operand), [0, 1, 2]);
    assert!(results.iter().all(|value| value.is_nan()));
}

#[rstest]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(transform(divide_by(0), [1, -1]), vec![f64::INFINITY, f64::NEG_INFINITY]);
    assert!(transform(modulo(0), [1])[0].is_nan());
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
fn test_comparisons_as_predicates() {
    let values = vec![1, 2, 3, 2];
    assert_eq!(keep_if(equal(2), &values), vec![2, 2]);
    assert_eq!(keep_if(not_equal(2), &values), vec![1, 3]);
    assert_eq!(keep_if(greater_or_equal(2), &values), vec![2, 3, 2]);
    assert_eq!(remove_if(less_or_equal(2), &values), vec![3]);
}

#[rstest]
fn test_comparisons_on_text() {
    let words = ["apple", "pear", "fig"];
    assert_eq!(keep_if(greater_or_equal("fig"), words), vec!["pear", "fig"]);
}

// =============================================================================
// Property access
// =============================================================================

#[rstest]
fn test_pluck_reads_named_fields() {
    let rows: Vec<HashMap<&str, u32>> = vec![
        HashMap::from([("age", 36), ("rank", 1)]),
        HashMap::from([("rank", 2)]),
    ];
    assert_eq!(transform(pluck("age"), &rows), vec![Some(36), None]);
    assert_eq!(transform(pluck("rank"), &rows), vec![Some(1), Some(2)]);
}

#[rstest]
fn test_pluck_on_optional_rows() {
    let rows: Vec<Option<HashMap<String, bool>>> =
        vec![None, Some(HashMap::from([(String::from("done"), true)]))];
    assert_eq!(transform(pluck("done"), rows), vec![None, Some(true)]);
}

#[rstest]
fn test_pluck_on_scalars_is_always_absent() {
    let plucked = transform(pluck("length"), ["abc", "de"]);
    assert!(plucked.iter().all(Option::is_none));
}
