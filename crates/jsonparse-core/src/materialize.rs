//! Scalar Materializer: builds a typed vector from values the analyzer
//! accepted as one scalar kind plus optional nulls.

use crate::error::{JsonParseError, Result};
use crate::kind::{classify, ScalarKind, SemanticKind};
use crate::types::{JsonValue, TypedVector};

/// Build a `TypedVector` of `kind` with one slot per input value.
///
/// Null values become `None`. Values of any other kind than `kind` fail with
/// [`JsonParseError::UnsupportedValueKind`]; there is no cross-kind coercion.
///
/// # Examples
///
/// ```
/// use jsonparse_core::{materialize, JsonValue, ScalarKind, TypedVector};
///
/// let values = [JsonValue::Bool(true), JsonValue::Null];
/// let vector = materialize(ScalarKind::Bool, &values).unwrap();
/// assert_eq!(vector, TypedVector::Bool(vec![Some(true), None]));
/// ```
pub fn materialize(kind: ScalarKind, values: &[JsonValue]) -> Result<TypedVector> {
    Ok(match kind {
        ScalarKind::Bool => TypedVector::Bool(collect_slots(kind, values, JsonValue::as_bool)?),
        ScalarKind::Int => TypedVector::Int(collect_slots(kind, values, JsonValue::as_i64)?),
        ScalarKind::Double => {
            TypedVector::Double(collect_slots(kind, values, JsonValue::as_f64)?)
        }
        ScalarKind::String => TypedVector::String(collect_slots(kind, values, |v| {
            v.as_str().map(str::to_owned)
        })?),
    })
}

/// Extract one slot per value with `extract`, mapping nulls to `None`.
fn collect_slots<T, F>(kind: ScalarKind, values: &[JsonValue], extract: F) -> Result<Vec<Option<T>>>
where
    F: Fn(&JsonValue) -> Option<T>,
{
    values
        .iter()
        .map(|value| match value {
            JsonValue::Null => Ok(None),
            other => extract(other).map(Some).ok_or_else(|| mismatch(kind, other)),
        })
        .collect()
}

fn mismatch(kind: ScalarKind, found: &JsonValue) -> JsonParseError {
    JsonParseError::UnsupportedValueKind {
        expected: SemanticKind::from(kind),
        found: classify(found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_in_double_vector_is_rejected() {
        let values = [JsonValue::Double(1.5), JsonValue::Int(2)];
        let err = materialize(ScalarKind::Double, &values).unwrap_err();
        assert!(matches!(
            err,
            JsonParseError::UnsupportedValueKind {
                expected: SemanticKind::Double,
                found: SemanticKind::Int
            }
        ));
    }

    #[test]
    fn all_null_slots() {
        let values = [JsonValue::Null, JsonValue::Null];
        let v = materialize(ScalarKind::String, &values).unwrap();
        assert_eq!(v, TypedVector::String(vec![None, None]));
    }
}
