//! Two-dimensional matrix over a flat buffer

use crate::buffer::Buffer;
use crate::dtype::DType;
use crate::error::{Error, Result};
use std::fmt;

/// Row-major `[rows, cols]` view over a [`Buffer`]
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    shape: [usize; 2],
    data: Buffer,
}

impl Matrix {
    /// Wrap `data` as a `shape[0] x shape[1]` matrix
    ///
    /// The matrix dtype is the buffer's dtype.
    pub fn new(data: Buffer, shape: [usize; 2]) -> Result<Self> {
        let [rows, cols] = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Zero-filled matrix of the given shape and dtype
    pub fn zeros(shape: [usize; 2], dtype: DType) -> Result<Self> {
        let [rows, cols] = shape;
        let len = rows.checked_mul(cols).ok_or(Error::ShapeMismatch {
            rows,
            cols,
            len: usize::MAX,
        })?;
        Ok(Self {
            shape,
            data: Buffer::zeros(dtype, len),
        })
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Total number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn data(&self) -> &Buffer {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Buffer {
        &mut self.data
    }

    pub fn into_data(self) -> Buffer {
        self.data
    }

    /// Element at `(row, col)` widened to `f64`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }
}

/// Rows separated by `;`, columns by `,`
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.data.to_vec_f64();
        let cols = self.cols().max(1);
        for (r, row) in values.chunks(cols).take(self.rows()).enumerate() {
            if r > 0 {
                f.write_str(";")?;
            }
            for (c, x) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}
