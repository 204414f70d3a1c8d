//! Chi-squared distribution statistics over polymorphic inputs
//!
//! This crate re-exports the workspace members:
//!
//! - [`chisq_core`]: containers ([`Buffer`], [`Matrix`], [`Value`], [`Data`]), the
//!   dtype registry and the shared [`Error`] type
//! - [`chisq_ekurtosis`]: the excess kurtosis formula, its elementwise
//!   kernels and the dispatching entry point
//!
//! # Example
//!
//! ```rust
//! use chisq_stats::prelude::*;
//!
//! let out = ekurtosis(vec![2.0, 4.0, 8.0, 16.0], None).unwrap();
//! assert_eq!(out, Data::from(vec![6.0, 3.0, 1.5, 0.75]));
//! ```

pub use chisq_core;
pub use chisq_ekurtosis;

pub use chisq_core::{
    buffer_constructor_for, Buffer, DType, Data, Error, Matrix, Result, Shape, Value,
};
pub use chisq_ekurtosis::{ekurtosis_with, excess_kurtosis, OptionValue, Options, RawOptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use chisq_core::{Buffer, DType, Data, Error, Matrix, Result, Value};
    pub use chisq_ekurtosis::{
        ekurtosis, ekurtosis_with, excess_kurtosis, OptionValue, Options, RawOptions,
    };
}
