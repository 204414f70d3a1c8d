//! Options controlling output materialization
//!
//! [`Options`] is the normalized, typed record the dispatcher reads.
//! [`RawOptions`] is the loosely-typed form callers build at runtime or load
//! from JSON; [`validate`] turns one into the other.
//!
//! Recognized keys are `copy`, `accessor`, `path`, `sep` and `dtype`.
//! Anything else is ignored.

use crate::kernels::deepset::DEFAULT_SEP;
use crate::kernels::Accessor;
use chisq_core::{DType, Error, Result, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Normalized options
#[derive(Clone)]
pub struct Options {
    /// Allocate a new output (`true`) or mutate the input in place
    pub copy: bool,
    /// Maps each sequence element to the value to transform
    pub accessor: Option<Accessor>,
    /// Deep path into each sequence element; takes precedence over `accessor`
    pub path: Option<String>,
    /// Path delimiter
    pub sep: String,
    /// Dtype name for freshly allocated outputs, resolved lazily
    pub dtype: Option<String>,
    /// Fail instead of skipping elements where `path` does not resolve
    pub strict_path: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            copy: true,
            accessor: None,
            path: None,
            sep: DEFAULT_SEP.to_string(),
            dtype: None,
            strict_path: false,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("copy", &self.copy)
            .field("accessor", &self.accessor.as_ref().map(|_| "<fn>"))
            .field("path", &self.path)
            .field("sep", &self.sep)
            .field("dtype", &self.dtype)
            .field("strict_path", &self.strict_path)
            .finish()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn with_dtype(mut self, dtype: impl Into<String>) -> Self {
        self.dtype = Some(dtype.into());
        self
    }

    pub fn with_strict_path(mut self, strict: bool) -> Self {
        self.strict_path = strict;
        self
    }

    /// The deep path, if one is set and non-empty
    pub fn deep_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Path delimiter, falling back to `"."` when empty
    pub fn separator(&self) -> &str {
        if self.sep.is_empty() {
            DEFAULT_SEP
        } else {
            &self.sep
        }
    }

    /// The requested dtype name, if one is set and non-empty
    pub fn requested_dtype(&self) -> Option<&str> {
        self.dtype.as_deref().filter(|d| !d.is_empty())
    }
}

/// A single raw option value
#[derive(Clone)]
pub enum OptionValue {
    Value(Value),
    Function(Accessor),
}

impl OptionValue {
    /// Wrap a closure as an accessor option
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        OptionValue::Function(Arc::new(f))
    }

    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Value(value) => value.kind(),
            OptionValue::Function(_) => "function",
        }
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            OptionValue::Function(_) => f.write_str("Function(<fn>)"),
        }
    }
}

macro_rules! impl_from_value {
    ($($t:ty),*) => {$(
        impl From<$t> for OptionValue {
            fn from(value: $t) -> Self {
                OptionValue::Value(Value::from(value))
            }
        }
    )*};
}

impl_from_value!(Value, bool, f64, &str, String);

impl From<DType> for OptionValue {
    fn from(dtype: DType) -> Self {
        OptionValue::Value(Value::from(dtype.name()))
    }
}

/// Unvalidated options keyed by name
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    entries: BTreeMap<String, OptionValue>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load options from a JSON object
    ///
    /// JSON cannot carry an accessor; every other key maps directly.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let map = json.as_object().ok_or_else(|| {
            Error::invalid_option("options", "an object", Value::from(json.clone()).kind())
        })?;
        Ok(Self {
            entries: map
                .iter()
                .map(|(k, v)| (k.clone(), OptionValue::Value(Value::from(v.clone()))))
                .collect(),
        })
    }
}

/// Type-check `raw` and copy recognized keys into `target`
///
/// Keys are checked in the order `copy`, `accessor`, `path`, `sep`, `dtype`;
/// the first violation is returned and `target` may be partially updated.
/// Whether a dtype name is supported is not checked here.
pub fn validate(target: &mut Options, raw: &RawOptions) -> Result<()> {
    if let Some(value) = raw.get("copy") {
        match value {
            OptionValue::Value(Value::Bool(copy)) => target.copy = *copy,
            other => return Err(Error::invalid_option("copy", "a boolean", other.kind())),
        }
    }
    if let Some(value) = raw.get("accessor") {
        match value {
            OptionValue::Function(accessor) => target.accessor = Some(Arc::clone(accessor)),
            other => return Err(Error::invalid_option("accessor", "a function", other.kind())),
        }
    }
    if let Some(value) = raw.get("path") {
        target.path = Some(expect_string("path", value)?);
    }
    if let Some(value) = raw.get("sep") {
        target.sep = expect_string("sep", value)?;
    }
    if let Some(value) = raw.get("dtype") {
        target.dtype = Some(expect_string("dtype", value)?);
    }
    Ok(())
}

fn expect_string(key: &str, value: &OptionValue) -> Result<String> {
    match value {
        OptionValue::Value(Value::String(s)) => Ok(s.clone()),
        other => Err(Error::invalid_option(key, "a string", other.kind())),
    }
}

impl TryFrom<&RawOptions> for Options {
    type Error = Error;

    fn try_from(raw: &RawOptions) -> Result<Self> {
        let mut options = Options::default();
        validate(&mut options, raw)?;
        Ok(options)
    }
}
