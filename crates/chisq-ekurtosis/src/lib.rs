//! Excess kurtosis of the chi-squared distribution
//!
//! For `k` degrees of freedom the excess kurtosis is `12 / k`. This crate
//! applies that formula to a scalar or elementwise across containers:
//!
//! - plain sequences of [`Value`]s, optionally read through an accessor
//! - sequences of nested structures, updated in place at a deep path
//! - fixed-width numeric [`Buffer`]s
//! - two-dimensional [`Matrix`] values
//!
//! [`ekurtosis`] decides the kernel and the output container from the input
//! shape and a set of options (`copy`, `accessor`, `path`, `sep`, `dtype`).
//!
//! # Examples
//!
//! ```rust
//! use chisq_ekurtosis::{ekurtosis, Buffer, Data, DType, Matrix, OptionValue, RawOptions, Value};
//!
//! // Scalars
//! assert_eq!(ekurtosis(2.0, None).unwrap(), Data::Scalar(6.0));
//!
//! // Accessors
//! let records: Vec<Value> = vec![
//!     [("k", 2.0)].into_iter().collect(),
//!     [("k", 4.0)].into_iter().collect(),
//! ];
//! let opts = RawOptions::new().set("accessor", OptionValue::function(|d: &Value| d["k"].clone()));
//! let out = ekurtosis(records, Some(&opts)).unwrap();
//! assert_eq!(out, Data::from(vec![6.0, 3.0]));
//!
//! // Matrices with a narrower output dtype
//! let m = Matrix::new(Buffer::from(vec![2.0f64, 4.0, 8.0, 16.0]), [2, 2]).unwrap();
//! let opts = RawOptions::new().set("dtype", DType::Uint8);
//! let out = ekurtosis(m, Some(&opts)).unwrap();
//! assert_eq!(out.as_matrix().unwrap().to_string(), "6,3;1,0");
//! ```

pub mod dispatch;
pub mod formula;
pub mod kernels;
pub mod options;

pub use dispatch::{ekurtosis, ekurtosis_with};
pub use formula::excess_kurtosis;
pub use kernels::{Accessor, ElementSink};
pub use options::{validate, OptionValue, Options, RawOptions};

pub use chisq_core::{Buffer, DType, Data, Error, Matrix, Result, Shape, Value};
