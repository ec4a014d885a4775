//! # jsonparse-core
//!
//! Converts JSON text into typed vectors, lists and mappings.
//!
//! For every JSON array the converter decides whether the elements can share
//! one **typed vector** (all one scalar kind, nulls allowed as empty slots)
//! or must become a **list** of independently converted values. Objects
//! become ordered **mappings** that keep duplicate keys. Heterogeneous data is
//! never an error; it only selects the looser container.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonparse_core::{from_json, OutputValue, Scalar, TypedVector};
//!
//! let out = from_json("[1, null, 3]").unwrap();
//! assert_eq!(out, OutputValue::Vector(TypedVector::Int(vec![Some(1), None, Some(3)])));
//!
//! let out = from_json(r#"[1, "a", 3]"#).unwrap();
//! assert_eq!(out.as_list().unwrap()[1], OutputValue::Scalar(Scalar::String("a".into())));
//! ```
//!
//! ## Modules
//!
//! - [`kind`] — `SemanticKind` classification of parsed values
//! - [`analyze`] — vector-vs-list decision for sibling values
//! - [`materialize`] — typed vector construction with null slots
//! - [`convert`] — recursive structural conversion
//! - [`document`] — text entry points (`from_json`)
//! - [`describe`] — human-readable structure summary
//! - [`types`] — input (`JsonValue`) and output (`OutputValue`) trees
//! - [`error`] — error types

pub mod analyze;
pub mod convert;
pub mod describe;
pub mod document;
pub mod error;
pub mod kind;
pub mod materialize;
pub mod options;
pub mod types;

pub use analyze::{analyze, survey, ArrayDecision, Decision, KindSet};
pub use convert::{convert, convert_with_options};
pub use describe::describe;
pub use document::{from_json, from_json_with_options, from_value, parse};
pub use error::{JsonParseError, Result};
pub use kind::{classify, classify_serde, ScalarKind, SemanticKind};
pub use materialize::materialize;
pub use options::ConvertOptions;
pub use types::{JsonValue, OutputValue, Scalar, TypedVector};
