//! Input/output values and their shape classification
//!
//! Every entry point takes a [`Data`] and classifies it exactly once into a
//! [`Shape`]. The classification order matters: a matrix is checked before a
//! buffer, and a buffer before a generic sequence.

use crate::buffer::Buffer;
use crate::matrix::Matrix;
use crate::value::Value;
use std::collections::BTreeMap;

/// Any value a chisq function accepts or returns
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// A single number, NaN included
    Scalar(f64),
    /// Ordered sequence of arbitrary elements
    Sequence(Vec<Value>),
    /// Fixed-width numeric buffer
    Buffer(Buffer),
    /// Two-dimensional numeric matrix
    Matrix(Matrix),
    /// Anything without a recognized shape
    Other(Value),
}

/// Result of classifying a [`Data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Matrix,
    Buffer,
    Sequence,
    Unrecognized,
}

impl Data {
    /// Classify in dispatch order: scalar, matrix, buffer, sequence
    pub fn classify(&self) -> Shape {
        if self.is_scalar_numeric() || self.is_nan() {
            Shape::Scalar
        } else if self.is_matrix_like() {
            Shape::Matrix
        } else if self.is_buffer_like() {
            Shape::Buffer
        } else if self.is_sequence_like() {
            Shape::Sequence
        } else {
            Shape::Unrecognized
        }
    }

    /// A number other than NaN
    pub fn is_scalar_numeric(&self) -> bool {
        matches!(self, Data::Scalar(x) if !x.is_nan())
    }

    /// The not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, Data::Scalar(x) if x.is_nan())
    }

    /// Ordered and length-bearing; buffers qualify too
    pub fn is_sequence_like(&self) -> bool {
        matches!(self, Data::Sequence(_) | Data::Buffer(_))
    }

    pub fn is_buffer_like(&self) -> bool {
        matches!(self, Data::Buffer(_))
    }

    pub fn is_matrix_like(&self) -> bool {
        matches!(self, Data::Matrix(_))
    }

    /// Element count for container shapes
    pub fn len(&self) -> Option<usize> {
        match self {
            Data::Sequence(items) => Some(items.len()),
            Data::Buffer(buffer) => Some(buffer.len()),
            Data::Matrix(matrix) => Some(matrix.len()),
            Data::Scalar(_) | Data::Other(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Data::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Data::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&Buffer> {
        match self {
            Data::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Data::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<Value>> {
        match self {
            Data::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_buffer(self) -> Option<Buffer> {
        match self {
            Data::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Data::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }
}

impl From<f64> for Data {
    fn from(x: f64) -> Self {
        Data::Scalar(x)
    }
}

/// Plain `f64` vectors become generic sequences, not buffers
impl From<Vec<f64>> for Data {
    fn from(items: Vec<f64>) -> Self {
        Data::Sequence(items.into_iter().map(Value::Number).collect())
    }
}

impl From<Vec<Value>> for Data {
    fn from(items: Vec<Value>) -> Self {
        Data::Sequence(items)
    }
}

impl From<Buffer> for Data {
    fn from(buffer: Buffer) -> Self {
        Data::Buffer(buffer)
    }
}

impl From<Matrix> for Data {
    fn from(matrix: Matrix) -> Self {
        Data::Matrix(matrix)
    }
}

/// Largest `length` an object may declare and still count as a sequence
const MAX_LENGTH: f64 = 4_294_967_295.0;

/// Integer `length` member of an array-like object
fn array_like_length(map: &BTreeMap<String, Value>) -> Option<usize> {
    let len = map.get("length")?.as_f64()?;
    (len >= 0.0 && len <= MAX_LENGTH && len.fract() == 0.0).then_some(len as usize)
}

/// Numbers become scalars, arrays sequences; strings are sequences of their
/// characters. Objects with an integer `length` are sequences of their
/// members `"0"` to `"length - 1"`, missing members reading as null.
/// Everything else is unrecognized.
impl From<Value> for Data {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(x) => Data::Scalar(x),
            Value::Array(items) => Data::Sequence(items),
            Value::String(s) => {
                Data::Sequence(s.chars().map(|c| Value::String(c.to_string())).collect())
            }
            Value::Object(mut map) => match array_like_length(&map) {
                Some(len) => Data::Sequence(
                    (0..len)
                        .map(|i| map.remove(&i.to_string()).unwrap_or_default())
                        .collect(),
                ),
                None => Data::Other(Value::Object(map)),
            },
            other => Data::Other(other),
        }
    }
}

impl From<serde_json::Value> for Data {
    fn from(json: serde_json::Value) -> Self {
        Data::from(Value::from(json))
    }
}
