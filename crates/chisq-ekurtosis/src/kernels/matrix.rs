//! Matrix kernel
//!
//! Operates on the flat backing buffer; rows and columns are not interpreted.

use super::buffer;
use chisq_core::Matrix;

/// `out.data[i] = f(input.data[i])` for every stored element
pub fn ekurtosis_into<'a>(out: &'a mut Matrix, input: &Matrix) -> &'a mut Matrix {
    buffer::ekurtosis_into(out.data_mut(), input.data());
    out
}

pub fn ekurtosis_in_place(matrix: &mut Matrix) -> &mut Matrix {
    buffer::ekurtosis_in_place(matrix.data_mut());
    matrix
}
