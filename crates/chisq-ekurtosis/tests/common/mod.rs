//! Shared utilities for integration tests
#![allow(dead_code)]

pub use approx::assert_relative_eq;
use chisq_ekurtosis::{Data, Value};
use serde_json::json;

pub const EPSILON: f64 = 1e-5;

/// Assert two slices agree within tolerance; NaN matches only NaN
pub fn assert_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "{context}[{i}]: expected NaN, got {a}");
        } else {
            assert!((a - e).abs() <= EPSILON, "{context}[{i}]: expected {e}, got {a}");
        }
    }
}

/// Numbers of a plain sequence output; non-numbers read as NaN
pub fn sequence_numbers(data: &Data) -> Vec<f64> {
    data.as_sequence()
        .expect("expected a sequence")
        .iter()
        .map(|v| v.as_f64().unwrap_or(f64::NAN))
        .collect()
}

/// `[{"k": 2}, {"k": 4}, {"k": 8}, {"k": 16}]`
pub fn records() -> Vec<Value> {
    match Value::from(json!([{"k": 2}, {"k": 4}, {"k": 8}, {"k": 16}])) {
        Value::Array(items) => items,
        _ => unreachable!(),
    }
}

/// `[{"x": [9, k]}, ...]` for k in 2, 4, 8, 16
pub fn nested_records() -> Vec<Value> {
    match Value::from(json!([{"x": [9, 2]}, {"x": [9, 4]}, {"x": [9, 8]}, {"x": [9, 16]}])) {
        Value::Array(items) => items,
        _ => unreachable!(),
    }
}

/// Degrees of freedom used across scenarios
pub fn degrees() -> Vec<f64> {
    vec![2.0, 4.0, 8.0, 16.0]
}

/// Excess kurtosis of [`degrees`]
pub fn expected() -> Vec<f64> {
    vec![6.0, 3.0, 1.5, 0.75]
}
