//! Input and output value trees.
//!
//! [`JsonValue`] is the parsed input. It is built directly by `serde_json`
//! through a hand-written [`Deserialize`] impl so that objects keep every
//! member in source order, duplicate keys included. A `serde_json::Map`
//! would merge duplicates, which is why the intermediate `serde_json::Value`
//! is skipped on the text path.
//!
//! [`OutputValue`] is the converted tree handed back to the caller.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::kind::{classify, ScalarKind, SemanticKind};

/// A parsed JSON value. Objects are key-value pairs in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    /// Members in source order; duplicate keys are kept positionally.
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    pub fn kind(&self) -> SemanticKind {
        classify(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JsonValue, E> {
        // Above i64::MAX there is no integer slot; keep the magnitude as a double.
        Ok(match i64::try_from(v) {
            Ok(i) => JsonValue::Int(i),
            Err(_) => JsonValue::Double(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<JsonValue>()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
            members.push((key, value));
        }
        Ok(JsonValue::Object(members))
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Int(i),
                None => JsonValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// A single converted scalar.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::String(_) => ScalarKind::String,
        }
    }
}

/// A fixed-length, single-kind vector. `None` marks a JSON `null` slot.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedVector {
    Bool(Vec<Option<bool>>),
    Int(Vec<Option<i64>>),
    Double(Vec<Option<f64>>),
    String(Vec<Option<String>>),
}

impl TypedVector {
    pub fn kind(&self) -> ScalarKind {
        match self {
            TypedVector::Bool(_) => ScalarKind::Bool,
            TypedVector::Int(_) => ScalarKind::Int,
            TypedVector::Double(_) => ScalarKind::Double,
            TypedVector::String(_) => ScalarKind::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedVector::Bool(v) => v.len(),
            TypedVector::Int(v) => v.len(),
            TypedVector::Double(v) => v.len(),
            TypedVector::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether slot `index` holds a null. Out-of-range indices are not null.
    pub fn is_null(&self, index: usize) -> bool {
        match self {
            TypedVector::Bool(v) => matches!(v.get(index), Some(None)),
            TypedVector::Int(v) => matches!(v.get(index), Some(None)),
            TypedVector::Double(v) => matches!(v.get(index), Some(None)),
            TypedVector::String(v) => matches!(v.get(index), Some(None)),
        }
    }

    pub fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }
}

/// The converted value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    /// A bare JSON `null` outside of a typed vector.
    Null,
    Scalar(Scalar),
    Vector(TypedVector),
    List(Vec<OutputValue>),
    /// Entries in source order; duplicate keys are kept positionally.
    Mapping(Vec<(String, OutputValue)>),
}

impl OutputValue {
    /// Short name of the variant (and scalar kind), e.g. `"int"`, `"vector"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            OutputValue::Null => "null",
            OutputValue::Scalar(s) => s.kind().as_str(),
            OutputValue::Vector(_) => "vector",
            OutputValue::List(_) => "list",
            OutputValue::Mapping(_) => "mapping",
        }
    }

    /// Number of elements; scalars and null count as one.
    pub fn len(&self) -> usize {
        match self {
            OutputValue::Null | OutputValue::Scalar(_) => 1,
            OutputValue::Vector(v) => v.len(),
            OutputValue::List(items) => items.len(),
            OutputValue::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OutputValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            OutputValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&TypedVector> {
        match self {
            OutputValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[OutputValue]> {
        match self {
            OutputValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, OutputValue)]> {
        match self {
            OutputValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// First mapping entry named `key`.
    pub fn get(&self, key: &str) -> Option<&OutputValue> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl Serialize for OutputValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OutputValue::Null => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "null")?;
                map.end()
            }
            OutputValue::Scalar(scalar) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", scalar.kind().as_str())?;
                map.serialize_entry("value", scalar)?;
                map.end()
            }
            OutputValue::Vector(vector) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "vector")?;
                map.serialize_entry("kind", &vector.kind())?;
                match vector {
                    TypedVector::Bool(values) => map.serialize_entry("values", values)?,
                    TypedVector::Int(values) => map.serialize_entry("values", values)?,
                    TypedVector::Double(values) => map.serialize_entry("values", values)?,
                    TypedVector::String(values) => map.serialize_entry("values", values)?,
                }
                map.end()
            }
            OutputValue::List(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "list")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            OutputValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "mapping")?;
                map.serialize_entry("entries", entries)?;
                map.end()
            }
        }
    }
}
