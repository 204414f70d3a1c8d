//! Element types that can back a fixed-width buffer
//!
//! Every buffer element converts to `f64` for computation and back into its
//! own width for storage. Narrowing follows Rust's `as` semantics: integers
//! truncate toward zero and saturate at their bounds, NaN becomes zero.
//! [`ClampedU8`] is the one exception: it rounds half to even before clamping.

use crate::dtype::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::fmt::{self, Debug};

/// Base trait for buffer element types
pub trait Numeric: Pod + Default + PartialOrd + Debug + Send + Sync + 'static {
    /// Dtype tag of buffers holding this element
    const DTYPE: DType;

    /// Widen to `f64` for the formula
    fn to_f64(self) -> f64;

    /// Narrow an `f64` result into this width
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_numeric {
    ($($t:ty => $dtype:ident),* $(,)?) => {$(
        impl Numeric for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                <$t as AsPrimitive<f64>>::as_(self)
            }

            #[inline]
            fn from_f64(val: f64) -> Self {
                <f64 as AsPrimitive<$t>>::as_(val)
            }
        }
    )*};
}

impl_numeric! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}

/// Unsigned byte that clamps instead of truncating
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct ClampedU8(pub u8);

impl Debug for ClampedU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl From<u8> for ClampedU8 {
    fn from(val: u8) -> Self {
        ClampedU8(val)
    }
}

impl From<ClampedU8> for u8 {
    fn from(val: ClampedU8) -> Self {
        val.0
    }
}

impl Numeric for ClampedU8 {
    const DTYPE: DType = DType::Uint8Clamped;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        if val.is_nan() {
            return ClampedU8(0);
        }
        ClampedU8(val.clamp(0.0, 255.0).round_ties_even() as u8)
    }
}
