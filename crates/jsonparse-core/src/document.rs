//! Document Adapter — the text-in, value-out boundary.
//!
//! Parsing is delegated to `serde_json`, which builds a [`JsonValue`] tree
//! directly. The root shape then picks the converter path:
//!
//! - **object root**: the root members become the output mapping, with no
//!   extra wrapping level
//! - **array root**: the same analyze-then-materialize path as nested arrays
//! - **scalar or null root**: converted as a bare value
//!
//! # Example
//! ```
//! use jsonparse_core::{from_json, OutputValue, Scalar, TypedVector};
//!
//! let out = from_json(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
//! assert_eq!(out.get("a"), Some(&OutputValue::Scalar(Scalar::Int(1))));
//! assert_eq!(
//!     out.get("b"),
//!     Some(&OutputValue::Vector(TypedVector::Int(vec![Some(1), Some(2)])))
//! );
//! ```

use tracing::debug;

use crate::convert::Converter;
use crate::error::{JsonParseError, Result};
use crate::options::ConvertOptions;
use crate::types::{JsonValue, OutputValue};

/// Parse JSON text and convert it with default options.
pub fn from_json(json: &str) -> Result<OutputValue> {
    from_json_with_options(json, &ConvertOptions::default())
}

/// Parse JSON text and convert it with `options`.
///
/// Fails with [`JsonParseError::Parse`] when the text is not well-formed
/// JSON; nothing is returned in that case.
pub fn from_json_with_options(json: &str, options: &ConvertOptions) -> Result<OutputValue> {
    debug!(bytes = json.len(), "parsing JSON document");
    let root = parse(json)?;
    convert_root(&root, options)
}

/// Convert a document already parsed into a `serde_json` DOM.
///
/// `serde_json::Map` has merged any duplicate keys by this point; use
/// [`from_json`] on the original text when duplicates matter.
pub fn from_value(value: &serde_json::Value) -> Result<OutputValue> {
    let root = JsonValue::from(value.clone());
    convert_root(&root, &ConvertOptions::default())
}

/// Parse text into the input tree without converting it.
pub fn parse(json: &str) -> Result<JsonValue> {
    serde_json::from_str::<JsonValue>(json).map_err(|err| JsonParseError::from_serde(&err, json))
}

fn convert_root(root: &JsonValue, options: &ConvertOptions) -> Result<OutputValue> {
    let converter = Converter::new(options);
    debug!(root = %root.kind(), "converting document");
    match root {
        JsonValue::Object(members) => converter.object(members, 0),
        JsonValue::Array(items) => converter.array(items, 0),
        scalar => converter.value(scalar, 0),
    }
}
