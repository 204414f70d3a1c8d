//! Elementwise kernels
//!
//! Each kernel applies [`excess_kurtosis`](crate::excess_kurtosis) across one
//! input shape. Kernels do not validate lengths or options; the dispatcher
//! sizes outputs before calling them.

pub mod accessor;
pub mod buffer;
pub mod deepset;
pub mod matrix;
pub mod sequence;

pub use accessor::Accessor;

use chisq_core::{Buffer, Value};

/// Destination of an elementwise kernel
///
/// Plain sequences receive `Value::Number`; buffers narrow to their width.
pub trait ElementSink {
    fn put(&mut self, index: usize, val: f64);
}

impl ElementSink for [Value] {
    #[inline]
    fn put(&mut self, index: usize, val: f64) {
        if let Some(slot) = self.get_mut(index) {
            *slot = Value::Number(val);
        }
    }
}

impl ElementSink for Vec<Value> {
    #[inline]
    fn put(&mut self, index: usize, val: f64) {
        self.as_mut_slice().put(index, val);
    }
}

impl ElementSink for Buffer {
    #[inline]
    fn put(&mut self, index: usize, val: f64) {
        self.set(index, val);
    }
}

/// Numeric reading of an element; anything but a number is NaN
#[inline]
pub(crate) fn numeric_or_nan(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}
