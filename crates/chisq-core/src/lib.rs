//! Core containers and types for chi-squared statistics
//!
//! This crate provides the data model the computation crates operate on:
//!
//! - [`Data`]: the tagged input/output value and its [`Shape`] classification
//! - [`Buffer`]: fixed-width numeric storage tagged with a [`DType`]
//! - [`Matrix`]: a two-dimensional view over a [`Buffer`]
//! - [`Value`]: dynamically-typed nested elements for generic sequences
//! - [`buffer_constructor_for`]: the dtype-name → buffer constructor registry
//!
//! # Example
//!
//! ```rust
//! use chisq_core::{buffer_constructor_for, DType, Matrix};
//!
//! let ctor = buffer_constructor_for("float32").unwrap();
//! let matrix = Matrix::new(ctor(6), [2, 3]).unwrap();
//! assert_eq!(matrix.dtype(), DType::Float32);
//! assert!(buffer_constructor_for("beep").is_none());
//! ```

pub mod buffer;
pub mod data;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod numeric;
pub mod value;

pub use buffer::Buffer;
pub use data::{Data, Shape};
pub use dtype::{buffer_constructor_for, BufferConstructor, DType};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use numeric::{ClampedU8, Numeric};
pub use value::Value;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
