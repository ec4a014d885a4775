//! Kind Classifier: maps a parsed JSON value onto one of seven semantic kinds.
//!
//! The parser's own distinctions (true vs false, integer vs floating point)
//! are folded into this fixed set. Int vs Double follows the parser's numeric
//! tagging, never value inspection: `1.0` is a Double, `1` is an Int.

use std::fmt;

use serde::Serialize;

use crate::types::JsonValue;

/// The seven-way classification used to decide output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticKind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

/// The four kinds a typed vector can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Bool,
    Int,
    Double,
    String,
}

impl SemanticKind {
    pub const ALL: [SemanticKind; 7] = [
        SemanticKind::Null,
        SemanticKind::Bool,
        SemanticKind::Int,
        SemanticKind::Double,
        SemanticKind::String,
        SemanticKind::Array,
        SemanticKind::Object,
    ];

    /// Narrow to a scalar kind. `None` for Null, Array and Object.
    pub fn scalar(self) -> Option<ScalarKind> {
        match self {
            SemanticKind::Bool => Some(ScalarKind::Bool),
            SemanticKind::Int => Some(ScalarKind::Int),
            SemanticKind::Double => Some(ScalarKind::Double),
            SemanticKind::String => Some(ScalarKind::String),
            SemanticKind::Null | SemanticKind::Array | SemanticKind::Object => None,
        }
    }

    pub fn is_structural(self) -> bool {
        matches!(self, SemanticKind::Array | SemanticKind::Object)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticKind::Null => "null",
            SemanticKind::Bool => "bool",
            SemanticKind::Int => "int",
            SemanticKind::Double => "double",
            SemanticKind::String => "string",
            SemanticKind::Array => "array",
            SemanticKind::Object => "object",
        }
    }
}

impl From<ScalarKind> for SemanticKind {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Bool => SemanticKind::Bool,
            ScalarKind::Int => SemanticKind::Int,
            ScalarKind::Double => SemanticKind::Double,
            ScalarKind::String => SemanticKind::String,
        }
    }
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        SemanticKind::from(self).as_str()
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a parsed JSON value.
///
/// # Examples
///
/// ```
/// use jsonparse_core::{classify, JsonValue, SemanticKind};
///
/// assert_eq!(classify(&JsonValue::Int(3)), SemanticKind::Int);
/// assert_eq!(classify(&JsonValue::Bool(false)), SemanticKind::Bool);
/// ```
pub fn classify(value: &JsonValue) -> SemanticKind {
    match value {
        JsonValue::Null => SemanticKind::Null,
        JsonValue::Bool(_) => SemanticKind::Bool,
        JsonValue::Int(_) => SemanticKind::Int,
        JsonValue::Double(_) => SemanticKind::Double,
        JsonValue::String(_) => SemanticKind::String,
        JsonValue::Array(_) => SemanticKind::Array,
        JsonValue::Object(_) => SemanticKind::Object,
    }
}

/// Classify a `serde_json` DOM value with the same rules as [`classify`].
///
/// Integers that fit `i64` are Int; everything else numeric is Double.
pub fn classify_serde(value: &serde_json::Value) -> SemanticKind {
    match value {
        serde_json::Value::Null => SemanticKind::Null,
        serde_json::Value::Bool(_) => SemanticKind::Bool,
        serde_json::Value::Number(n) if n.is_i64() => SemanticKind::Int,
        serde_json::Value::Number(_) => SemanticKind::Double,
        serde_json::Value::String(_) => SemanticKind::String,
        serde_json::Value::Array(_) => SemanticKind::Array,
        serde_json::Value::Object(_) => SemanticKind::Object,
    }
}
