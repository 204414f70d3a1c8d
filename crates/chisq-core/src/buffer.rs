//! Fixed-width numeric buffers
//!
//! A [`Buffer`] is a closed set of typed vectors, one variant per [`DType`].
//! Element access goes through `f64`; bulk operations stay typed so the inner
//! loops monomorphize per width pair.

use crate::dtype::DType;
use crate::numeric::{ClampedU8, Numeric};

/// Contiguous numeric storage with a runtime dtype tag
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<ClampedU8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Bind the typed vector inside a buffer and evaluate `$body` once per variant
macro_rules! with_vec {
    ($buffer:expr, $v:ident => $body:expr) => {
        match $buffer {
            Buffer::Int8($v) => $body,
            Buffer::Uint8($v) => $body,
            Buffer::Uint8Clamped($v) => $body,
            Buffer::Int16($v) => $body,
            Buffer::Uint16($v) => $body,
            Buffer::Int32($v) => $body,
            Buffer::Uint32($v) => $body,
            Buffer::Float32($v) => $body,
            Buffer::Float64($v) => $body,
        }
    };
}

impl Buffer {
    /// Zero-filled buffer of the given dtype
    pub fn zeros(dtype: DType, len: usize) -> Self {
        (dtype.constructor())(len)
    }

    /// Dtype tag of this buffer
    pub fn dtype(&self) -> DType {
        match self {
            Self::Int8(_) => DType::Int8,
            Self::Uint8(_) => DType::Uint8,
            Self::Uint8Clamped(_) => DType::Uint8Clamped,
            Self::Int16(_) => DType::Int16,
            Self::Uint16(_) => DType::Uint16,
            Self::Int32(_) => DType::Int32,
            Self::Uint32(_) => DType::Uint32,
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` widened to `f64`
    pub fn get(&self, index: usize) -> Option<f64> {
        with_vec!(self, v => v.get(index).map(|&x| x.to_f64()))
    }

    /// Store `val` at `index`, narrowed to this buffer's width
    ///
    /// Returns `false` when `index` is out of bounds.
    pub fn set(&mut self, index: usize, val: f64) -> bool {
        with_vec!(self, v => match v.get_mut(index) {
            Some(slot) => {
                *slot = Numeric::from_f64(val);
                true
            }
            None => false,
        })
    }

    /// Overwrite elements from the front with `values`
    ///
    /// Stops at whichever of the buffer or the iterator ends first.
    pub fn assign<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        with_vec!(self, v => assign_slice(v, values))
    }

    /// `self[i] = f(src[i])` for every index of `src`
    ///
    /// The two buffers may have different dtypes. Callers ensure
    /// `self.len() == src.len()`; indices past the shorter side are untouched.
    pub fn map_from<F: Fn(f64) -> f64>(&mut self, src: &Buffer, f: F) {
        with_vec!(src, input => with_vec!(&mut *self, out => map_slice(out, input, &f)))
    }

    /// `self[i] = f(self[i])` for every index
    pub fn map_in_place<F: Fn(f64) -> f64>(&mut self, f: F) {
        with_vec!(self, v => {
            for x in v.iter_mut() {
                *x = Numeric::from_f64(f(x.to_f64()));
            }
        })
    }

    /// All elements widened to `f64`
    pub fn to_vec_f64(&self) -> Vec<f64> {
        with_vec!(self, v => v.iter().map(|&x| x.to_f64()).collect())
    }

    /// Raw byte view of the storage in native endianness
    pub fn as_bytes(&self) -> &[u8] {
        with_vec!(self, v => bytemuck::cast_slice(v.as_slice()))
    }
}

fn assign_slice<T: Numeric, I: IntoIterator<Item = f64>>(out: &mut [T], values: I) {
    for (slot, val) in out.iter_mut().zip(values) {
        *slot = T::from_f64(val);
    }
}

fn map_slice<O: Numeric, I: Numeric, F: Fn(f64) -> f64>(out: &mut [O], input: &[I], f: &F) {
    for (slot, &x) in out.iter_mut().zip(input) {
        *slot = O::from_f64(f(x.to_f64()));
    }
}

macro_rules! impl_from_vec {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<Vec<$t>> for Buffer {
            fn from(v: Vec<$t>) -> Self {
                Buffer::$variant(v)
            }
        }
    )*};
}

impl_from_vec! {
    i8 => Int8,
    u8 => Uint8,
    ClampedU8 => Uint8Clamped,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dtype_and_len() {
        let buffer = Buffer::from(vec![1i16, 2, 3]);
        assert_eq!(buffer.dtype(), DType::Int16);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_empty());
        assert!(Buffer::zeros(DType::Float32, 0).is_empty());
    }

    #[test]
    fn test_get_and_set_narrow_to_width() {
        let mut buffer = Buffer::zeros(DType::Int32, 2);
        assert!(buffer.set(0, 1.5));
        assert!(buffer.set(1, -7.9));
        assert!(!buffer.set(2, 1.0));
        assert_eq!(buffer.get(0), Some(1.0));
        assert_eq!(buffer.get(1), Some(-7.0));
        assert_eq!(buffer.get(2), None);
    }

    #[test]
    fn test_map_from_across_widths() {
        let src = Buffer::from(vec![2.0f64, 4.0, 8.0, 16.0]);
        let mut out = Buffer::zeros(DType::Float32, 4);
        out.map_from(&src, |x| 12.0 / x);
        assert_eq!(out, Buffer::from(vec![6.0f32, 3.0, 1.5, 0.75]));

        let mut out = Buffer::zeros(DType::Uint8, 4);
        out.map_from(&src, |x| 12.0 / x);
        assert_eq!(out, Buffer::from(vec![6u8, 3, 1, 0]));
    }

    #[test]
    fn test_map_from_leaves_tail_when_src_shorter() {
        let src = Buffer::from(vec![1i8]);
        let mut out = Buffer::from(vec![9.0f64, 9.0]);
        out.map_from(&src, |x| x * 2.0);
        assert_eq!(out.to_vec_f64(), vec![2.0, 9.0]);
    }

    #[test]
    fn test_map_in_place() {
        let mut buffer = Buffer::from(vec![1.0f64, 2.0]);
        buffer.map_in_place(|x| x + 0.5);
        assert_eq!(buffer.to_vec_f64(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_assign_stops_at_shorter_side() {
        let mut buffer = Buffer::zeros(DType::Float64, 3);
        buffer.assign([1.0, 2.0]);
        assert_eq!(buffer.to_vec_f64(), vec![1.0, 2.0, 0.0]);
        buffer.assign([4.0, 5.0, 6.0, 7.0]);
        assert_eq!(buffer.to_vec_f64(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_as_bytes_reflects_width() {
        for dtype in DType::ALL {
            let buffer = Buffer::zeros(dtype, 3);
            assert_eq!(buffer.as_bytes().len(), 3 * dtype.bytes_per_element());
        }
        let buffer = Buffer::from(vec![0.5f32]);
        assert_relative_eq!(
            f32::from_ne_bytes(buffer.as_bytes().try_into().unwrap()),
            0.5
        );
    }
}
