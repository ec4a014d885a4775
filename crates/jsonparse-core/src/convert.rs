//! Structural Converter — turns a parsed JSON tree into an [`OutputValue`].
//!
//! Arrays are the interesting case. Each array's elements are run through the
//! analyzer and then either:
//!
//! - **materialized** into a typed vector when they share one scalar kind
//!   (nulls allowed), or
//! - **listed**, with every element converted on its own, when they are
//!   mixed, all structures, or all null.
//!
//! A parent falling back to a list never forces its children to do the same:
//! `[[1, 2], "x"]` is a list whose first item is still an int vector.
//!
//! # Example
//! ```
//! use jsonparse_core::{convert, JsonValue, OutputValue, TypedVector};
//!
//! let value = JsonValue::Array(vec![JsonValue::Int(1), JsonValue::Null]);
//! let out = convert(&value).unwrap();
//! assert_eq!(out, OutputValue::Vector(TypedVector::Int(vec![Some(1), None])));
//! ```

use tracing::trace;

use crate::analyze::{analyze, Decision};
use crate::error::{JsonParseError, Result};
use crate::materialize::materialize;
use crate::options::ConvertOptions;
use crate::types::{JsonValue, OutputValue, Scalar};

/// Convert a parsed value with default options.
pub fn convert(value: &JsonValue) -> Result<OutputValue> {
    convert_with_options(value, &ConvertOptions::default())
}

/// Convert a parsed value, enforcing the nesting limit in `options`.
pub fn convert_with_options(value: &JsonValue, options: &ConvertOptions) -> Result<OutputValue> {
    Converter::new(options).value(value, 0)
}

/// Recursive walker. Holds only the configuration; all per-array scratch
/// state lives inside [`analyze`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Converter {
    max_depth: usize,
}

impl Converter {
    pub(crate) fn new(options: &ConvertOptions) -> Self {
        Self {
            max_depth: options.max_depth,
        }
    }

    /// Convert any value found at `depth` (number of enclosing containers).
    pub(crate) fn value(&self, value: &JsonValue, depth: usize) -> Result<OutputValue> {
        match value {
            JsonValue::Null => Ok(OutputValue::Null),
            JsonValue::Bool(b) => Ok(OutputValue::Scalar(Scalar::Bool(*b))),
            JsonValue::Int(i) => Ok(OutputValue::Scalar(Scalar::Int(*i))),
            JsonValue::Double(f) => Ok(OutputValue::Scalar(Scalar::Double(*f))),
            JsonValue::String(s) => Ok(OutputValue::Scalar(Scalar::String(s.clone()))),
            JsonValue::Array(items) => self.array(items, depth),
            JsonValue::Object(members) => self.object(members, depth),
        }
    }

    /// Convert the elements of an array that sits at `depth`.
    pub(crate) fn array(&self, items: &[JsonValue], depth: usize) -> Result<OutputValue> {
        let depth = self.enter(depth)?;
        let decision = analyze(items);
        trace!(len = items.len(), depth, %decision, "array analyzed");

        if let Some(kind) = decision.vector_kind() {
            return materialize(kind, items).map(OutputValue::Vector);
        }
        match decision {
            Decision::Empty => Ok(OutputValue::List(Vec::new())),
            Decision::Uniform(_) | Decision::UniformWithNulls(_) | Decision::Mixed => items
                .iter()
                .map(|item| self.value(item, depth))
                .collect::<Result<Vec<_>>>()
                .map(OutputValue::List),
        }
    }

    /// Convert the members of an object that sits at `depth`, keeping order
    /// and duplicate keys.
    pub(crate) fn object(&self, members: &[(String, JsonValue)], depth: usize) -> Result<OutputValue> {
        let depth = self.enter(depth)?;
        members
            .iter()
            .map(|(key, value)| self.value(value, depth).map(|v| (key.clone(), v)))
            .collect::<Result<Vec<_>>>()
            .map(OutputValue::Mapping)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(JsonParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_arrays(levels: usize) -> JsonValue {
        let mut v = JsonValue::Int(0);
        for _ in 0..levels {
            v = JsonValue::Array(vec![v]);
        }
        v
    }

    #[test]
    fn depth_at_limit_is_accepted() {
        let opts = ConvertOptions::default().with_max_depth(3);
        assert!(convert_with_options(&nested_arrays(3), &opts).is_ok());
    }

    #[test]
    fn depth_past_limit_fails() {
        let opts = ConvertOptions::default().with_max_depth(3);
        let err = convert_with_options(&nested_arrays(4), &opts).unwrap_err();
        assert!(matches!(err, JsonParseError::DepthExceeded { limit: 3 }));
    }

    #[test]
    fn zero_depth_still_converts_scalars() {
        let opts = ConvertOptions::default().with_max_depth(0);
        assert_eq!(
            convert_with_options(&JsonValue::Bool(true), &opts).unwrap(),
            OutputValue::Scalar(Scalar::Bool(true))
        );
    }
}
