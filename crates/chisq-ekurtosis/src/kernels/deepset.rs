//! Deep-path kernel
//!
//! Each element of the sequence is a nested structure. A delimited key path
//! (`"x.1"`: member `x`, then index `1`) locates one number inside it, which
//! is replaced by its excess kurtosis. Always in place.
//!
//! By default an element whose path does not resolve is left untouched and
//! the scan continues. The `try_` variant refuses to mutate anything unless
//! every element resolves.

use super::numeric_or_nan;
use crate::formula::excess_kurtosis;
use chisq_core::{Error, Result, Value};
use tracing::trace;

/// Separator used when none (or an empty one) is given
pub const DEFAULT_SEP: &str = ".";

/// Split `path` on `sep` into lookup segments
pub fn split_path<'a>(path: &'a str, sep: &str) -> Vec<&'a str> {
    let sep = if sep.is_empty() { DEFAULT_SEP } else { sep };
    path.split(sep).collect()
}

/// Apply the formula at `path` inside every element, skipping misses
pub fn ekurtosis_at_path<'a>(seq: &'a mut [Value], path: &str, sep: &str) -> &'a mut [Value] {
    let segments = split_path(path, sep);
    for (index, element) in seq.iter_mut().enumerate() {
        match element.lookup_mut(segments.iter().copied()) {
            Some(slot) => *slot = Value::Number(excess_kurtosis(numeric_or_nan(slot))),
            None => trace!(index, path, "deep path did not resolve; element unchanged"),
        }
    }
    seq
}

/// Strict variant of [`ekurtosis_at_path`]
///
/// Checks that the path resolves in every element before writing. On the
/// first miss returns [`Error::PathNotFound`] and leaves `seq` unmodified.
pub fn try_ekurtosis_at_path<'a>(
    seq: &'a mut [Value],
    path: &str,
    sep: &str,
) -> Result<&'a mut [Value]> {
    let segments = split_path(path, sep);
    if let Some(index) = seq.iter().position(|element| !resolves(element, &segments)) {
        return Err(Error::PathNotFound {
            index,
            path: path.to_string(),
        });
    }
    Ok(ekurtosis_at_path(seq, path, sep))
}

fn resolves(element: &Value, segments: &[&str]) -> bool {
    segments
        .iter()
        .try_fold(element, |node, segment| node.child(segment))
        .is_some()
}
