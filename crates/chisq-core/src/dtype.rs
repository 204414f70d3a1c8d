//! Data type catalogue and the buffer constructor registry
//!
//! Output containers are allocated by dtype *name* at runtime. The registry
//! maps each recognized name to a constructor; unknown names have no entry
//! and the caller decides how fatal that is.

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::numeric::ClampedU8;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric width/kind of a buffer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    #[default]
    Float64,
}

/// Allocates a zero-filled buffer of the given length
pub type BufferConstructor = fn(usize) -> Buffer;

impl DType {
    /// Every supported dtype, narrowest first
    pub const ALL: [DType; 9] = [
        DType::Int8,
        DType::Uint8,
        DType::Uint8Clamped,
        DType::Int16,
        DType::Uint16,
        DType::Int32,
        DType::Uint32,
        DType::Float32,
        DType::Float64,
    ];

    /// Registry name of this dtype
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Uint8Clamped => "uint8_clamped",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Size of one element in bytes
    #[inline]
    pub const fn bytes_per_element(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Constructor producing zero-filled buffers of this dtype
    pub fn constructor(self) -> BufferConstructor {
        match self {
            Self::Int8 => |len| Buffer::Int8(vec![0; len]),
            Self::Uint8 => |len| Buffer::Uint8(vec![0; len]),
            Self::Uint8Clamped => |len| Buffer::Uint8Clamped(vec![ClampedU8(0); len]),
            Self::Int16 => |len| Buffer::Int16(vec![0; len]),
            Self::Uint16 => |len| Buffer::Uint16(vec![0; len]),
            Self::Int32 => |len| Buffer::Int32(vec![0; len]),
            Self::Uint32 => |len| Buffer::Uint32(vec![0; len]),
            Self::Float32 => |len| Buffer::Float32(vec![0.0; len]),
            Self::Float64 => |len| Buffer::Float64(vec![0.0; len]),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|dtype| dtype.name() == s)
            .ok_or_else(|| Error::unsupported_dtype(s))
    }
}

/// Look up the buffer constructor registered under `name`
///
/// Returns `None` for any name outside [`DType::ALL`]. Matching is
/// case-sensitive.
pub fn buffer_constructor_for(name: &str) -> Option<BufferConstructor> {
    name.parse::<DType>().ok().map(DType::constructor)
}
