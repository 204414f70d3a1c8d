//! Entry points: classify the input, resolve the output, pick a kernel
//!
//! Decision order, first match wins:
//!
//! 1. Scalar (NaN included): the formula directly, options ignored
//! 2. Options supplied: validate them before touching any container
//! 3. Matrix: new matrix of the requested dtype, or the input itself when
//!    `copy` is false
//! 4. Buffer: same policy as matrices
//! 5. Sequence: a deep path mutates in place; otherwise allocate or reuse,
//!    then run the accessor or plain sequence kernel
//! 6. Anything else: NaN
//!
//! The input is taken by value. With `copy: false` (or a deep path) the
//! returned container is the caller's own allocation, mutated.

use crate::formula::excess_kurtosis;
use crate::kernels::{accessor, buffer, deepset, matrix, sequence};
use crate::options::{validate, Options, RawOptions};
use chisq_core::{
    buffer_constructor_for, Buffer, BufferConstructor, DType, Data, Error, Matrix, Result, Value,
};
use tracing::{debug, instrument};

/// Excess kurtosis of a chi-squared distribution, applied elementwise
///
/// `options` are validated unless `input` is a scalar, in which case they
/// are ignored entirely.
///
/// ```rust
/// use chisq_ekurtosis::{ekurtosis, Data, RawOptions};
///
/// let out = ekurtosis(vec![2.0, 4.0, 8.0, 16.0], None).unwrap();
/// assert_eq!(out, Data::from(vec![6.0, 3.0, 1.5, 0.75]));
///
/// let opts = RawOptions::new().set("dtype", "int32");
/// let out = ekurtosis(vec![2.0, 4.0, 8.0, 16.0], Some(&opts)).unwrap();
/// assert_eq!(out.as_buffer().unwrap().to_vec_f64(), vec![6.0, 3.0, 1.0, 0.0]);
/// ```
pub fn ekurtosis<D: Into<Data>>(input: D, options: Option<&RawOptions>) -> Result<Data> {
    let input = input.into();
    if let Data::Scalar(k) = input {
        return Ok(Data::Scalar(excess_kurtosis(k)));
    }
    let mut opts = Options::default();
    if let Some(raw) = options {
        validate(&mut opts, raw)?;
    }
    dispatch(input, &opts)
}

/// Typed counterpart of [`ekurtosis`] for already-normalized options
pub fn ekurtosis_with<D: Into<Data>>(input: D, options: &Options) -> Result<Data> {
    dispatch(input.into(), options)
}

#[instrument(level = "debug", skip_all, fields(shape = ?input.classify(), len = ?input.len()))]
fn dispatch(input: Data, options: &Options) -> Result<Data> {
    match input {
        Data::Scalar(k) => Ok(Data::Scalar(excess_kurtosis(k))),
        Data::Matrix(m) => matrix_output(m, options).map(Data::Matrix),
        Data::Buffer(b) => buffer_output(b, options).map(Data::Buffer),
        Data::Sequence(items) => sequence_output(items, options),
        Data::Other(value) => {
            debug!(kind = value.kind(), "unrecognized input, returning NaN");
            Ok(Data::Scalar(f64::NAN))
        }
    }
}

/// Constructor for `name`, or the error that aborts the call
fn resolve_constructor(name: &str) -> Result<BufferConstructor> {
    buffer_constructor_for(name).ok_or_else(|| Error::unsupported_dtype(name))
}

fn matrix_output(mut input: Matrix, options: &Options) -> Result<Matrix> {
    if !options.copy {
        debug!(dtype = %input.dtype(), "mutating matrix in place");
        matrix::ekurtosis_in_place(&mut input);
        return Ok(input);
    }
    let name = options.requested_dtype().unwrap_or(DType::default().name());
    let ctor = resolve_constructor(name)?;
    debug!(dtype = name, shape = ?input.shape(), "allocating output matrix");
    let mut out = Matrix::new(ctor(input.len()), input.shape())?;
    matrix::ekurtosis_into(&mut out, &input);
    Ok(out)
}

fn buffer_output(mut input: Buffer, options: &Options) -> Result<Buffer> {
    if !options.copy {
        debug!(dtype = %input.dtype(), "mutating buffer in place");
        buffer::ekurtosis_in_place(&mut input);
        return Ok(input);
    }
    let name = options.requested_dtype().unwrap_or(DType::default().name());
    let ctor = resolve_constructor(name)?;
    debug!(dtype = name, "allocating output buffer");
    let mut out = ctor(input.len());
    buffer::ekurtosis_into(&mut out, &input);
    Ok(out)
}

fn sequence_output(mut items: Vec<Value>, options: &Options) -> Result<Data> {
    if let Some(path) = options.deep_path() {
        let sep = options.separator();
        debug!(path, sep, strict = options.strict_path, "deep path update in place");
        if options.strict_path {
            deepset::try_ekurtosis_at_path(&mut items, path, sep)?;
        } else {
            deepset::ekurtosis_at_path(&mut items, path, sep);
        }
        return Ok(Data::Sequence(items));
    }

    let access = options.accessor.as_deref();
    if !options.copy {
        debug!(accessor = access.is_some(), "mutating sequence in place");
        match access {
            Some(f) => accessor::ekurtosis_in_place(&mut items, f),
            None => sequence::ekurtosis_in_place(&mut items),
        };
        return Ok(Data::Sequence(items));
    }

    match options.requested_dtype() {
        Some(name) => {
            let ctor = resolve_constructor(name)?;
            debug!(dtype = name, accessor = access.is_some(), "allocating typed output");
            let mut out = ctor(items.len());
            match access {
                Some(f) => accessor::ekurtosis_into(&mut out, &items, f),
                None => sequence::ekurtosis_into(&mut out, &items),
            };
            Ok(Data::Buffer(out))
        }
        None => {
            debug!(accessor = access.is_some(), "allocating plain output sequence");
            let mut out = vec![Value::Null; items.len()];
            match access {
                Some(f) => accessor::ekurtosis_into(&mut out, &items, f),
                None => sequence::ekurtosis_into(&mut out, &items),
            };
            Ok(Data::Sequence(out))
        }
    }
}
