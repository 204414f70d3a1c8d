//! Fixed-width buffer kernel

use crate::formula::excess_kurtosis;
use chisq_core::Buffer;

/// `out[i] = f(input[i])` across possibly different widths
///
/// Expects `out.len() == input.len()`. Results narrow to `out`'s dtype.
pub fn ekurtosis_into<'a>(out: &'a mut Buffer, input: &Buffer) -> &'a mut Buffer {
    out.map_from(input, excess_kurtosis);
    out
}

/// Replace every element with its excess kurtosis, keeping the dtype
pub fn ekurtosis_in_place(buffer: &mut Buffer) -> &mut Buffer {
    buffer.map_in_place(excess_kurtosis);
    buffer
}
