//! Error types for chi-squared statistics
//!
//! Provides a unified error type for all chisq crates.

use thiserror::Error;

/// Core error type for chisq operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A recognized option holds a value of the wrong kind
    #[error("Invalid option `{key}`: expected {expected}, got {found}")]
    InvalidOption {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// The requested dtype has no buffer constructor
    #[error("Unsupported dtype: `{0}` does not have a corresponding buffer constructor")]
    UnsupportedDtype(String),

    /// Matrix shape does not cover the backing buffer
    #[error("Shape mismatch: {rows}x{cols} matrix cannot wrap a buffer of length {len}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// A deep path could not be resolved inside a sequence element
    #[error("Path not found: `{path}` does not resolve in element {index}")]
    PathNotFound { index: usize, path: String },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an option of the wrong kind
    pub fn invalid_option(key: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.to_string(),
            expected,
            found: found.into(),
        }
    }

    /// Create an error for an unknown dtype name
    pub fn unsupported_dtype(name: &str) -> Self {
        Self::UnsupportedDtype(name.to_string())
    }

    /// True for errors caused by caller configuration rather than data
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidOption { .. } | Self::UnsupportedDtype(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_option("copy", "a boolean", "string");
        assert_eq!(
            err.to_string(),
            "Invalid option `copy`: expected a boolean, got string"
        );

        let err = Error::unsupported_dtype("beep");
        assert_eq!(
            err.to_string(),
            "Unsupported dtype: `beep` does not have a corresponding buffer constructor"
        );

        let err = Error::ShapeMismatch { rows: 2, cols: 3, len: 5 };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: 2x3 matrix cannot wrap a buffer of length 5"
        );

        let err = Error::PathNotFound { index: 3, path: "x.1".to_string() };
        assert_eq!(err.to_string(), "Path not found: `x.1` does not resolve in element 3");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(Error::invalid_option("sep", "a string", "number").is_configuration());
        assert!(Error::unsupported_dtype("boop").is_configuration());
        assert!(!Error::ShapeMismatch { rows: 1, cols: 1, len: 0 }.is_configuration());
        assert!(!Error::PathNotFound { index: 0, path: String::new() }.is_configuration());
    }

    #[test]
    fn test_result_type_alias() {
        fn check(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::unsupported_dtype("float128"))
            }
        }

        assert_eq!(check(true).unwrap(), 42);
        assert!(matches!(check(false), Err(Error::UnsupportedDtype(name)) if name == "float128"));
    }
}
