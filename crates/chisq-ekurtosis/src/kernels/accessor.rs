//! Accessor-based sequence kernel
//!
//! Elements are first mapped through a caller-supplied function; its return
//! value is what the formula sees.

use super::{numeric_or_nan, ElementSink};
use crate::formula::excess_kurtosis;
use chisq_core::Value;
use std::sync::Arc;

/// Shared element extraction function
pub type Accessor = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// `out[i] = f(accessor(input[i]))`
///
/// The accessor runs exactly once per element, in index order.
pub fn ekurtosis_into<'a, O, A>(out: &'a mut O, input: &[Value], accessor: &A) -> &'a mut O
where
    O: ElementSink + ?Sized,
    A: Fn(&Value) -> Value + ?Sized,
{
    for (i, element) in input.iter().enumerate() {
        let k = numeric_or_nan(&accessor(element));
        out.put(i, excess_kurtosis(k));
    }
    out
}

/// Replace every element with the excess kurtosis of its accessed value
pub fn ekurtosis_in_place<'a, A>(seq: &'a mut [Value], accessor: &A) -> &'a mut [Value]
where
    A: Fn(&Value) -> Value + ?Sized,
{
    for element in seq.iter_mut() {
        let k = numeric_or_nan(&accessor(element));
        *element = Value::Number(excess_kurtosis(k));
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use chisq_core::{Buffer, DType};
    use serde_json::json;
    use std::cell::RefCell;

    fn records() -> Vec<Value> {
        match Value::from(json!([{"k": 2}, {"k": 4}, {"k": 8}, {"k": 16}])) {
            Value::Array(items) => items,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_into_plain_sequence() {
        let input = records();
        let mut out = vec![Value::Null; input.len()];
        ekurtosis_into(out.as_mut_slice(), &input, &|d: &Value| d["k"].clone());
        let got: Vec<f64> = out.iter().filter_map(Value::as_f64).collect();
        assert_eq!(got, vec![6.0, 3.0, 1.5, 0.75]);
    }

    #[test]
    fn test_into_buffer() {
        let input = records();
        let mut out = Buffer::zeros(DType::Float32, input.len());
        ekurtosis_into(&mut out, &input, &|d: &Value| d["k"].clone());
        assert_eq!(out, Buffer::from(vec![6.0f32, 3.0, 1.5, 0.75]));
    }

    #[test]
    fn test_accessor_called_once_per_element_in_order() {
        let input = records();
        let seen = RefCell::new(Vec::new());
        let accessor = |d: &Value| {
            seen.borrow_mut().push(d["k"].as_f64().unwrap_or_default());
            d["k"].clone()
        };
        let mut out = vec![Value::Null; input.len()];
        ekurtosis_into(out.as_mut_slice(), &input, &accessor);
        assert_eq!(*seen.borrow(), vec![2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_non_numeric_access_is_nan() {
        let input = records();
        let mut out = vec![Value::Null; input.len()];
        ekurtosis_into(out.as_mut_slice(), &input, &|d: &Value| d["missing"].clone());
        assert!(out.iter().all(|v| v.as_f64().is_some_and(f64::is_nan)));
    }

    #[test]
    fn test_in_place_through_shared_accessor() {
        let accessor: Accessor = Arc::new(|d: &Value| d["k"].clone());
        let mut seq = records();
        ekurtosis_in_place(&mut seq, accessor.as_ref());
        assert_eq!(seq[0], Value::Number(6.0));
        assert_eq!(seq[3], Value::Number(0.75));
    }
}
