//! Plain sequence kernel

use super::{numeric_or_nan, ElementSink};
use crate::formula::excess_kurtosis;
use chisq_core::Value;

/// `out[i] = f(input[i])`; non-numeric elements yield NaN
pub fn ekurtosis_into<'a, O>(out: &'a mut O, input: &[Value]) -> &'a mut O
where
    O: ElementSink + ?Sized,
{
    for (i, value) in input.iter().enumerate() {
        out.put(i, excess_kurtosis(numeric_or_nan(value)));
    }
    out
}

/// Replace every element with its excess kurtosis
pub fn ekurtosis_in_place(seq: &mut [Value]) -> &mut [Value] {
    for value in seq.iter_mut() {
        *value = Value::Number(excess_kurtosis(numeric_or_nan(value)));
    }
    seq
}
