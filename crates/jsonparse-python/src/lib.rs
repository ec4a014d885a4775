//! # jsonparse-python
//!
//! Python bindings for jsonparse-core, built with PyO3.
//!
//! Exposes the following functions to Python as the `jsonparse` module:
//!
//! - `from_json(json)` -- JSON string -> nested Python objects
//! - `describe(json)` -- JSON string -> structural summary string
//!
//! Typed vectors become `list`s with `None` in null slots, lists become
//! `list`s, and mappings become `dict`s. A Python `dict` cannot hold a key
//! twice, so a later duplicate key overwrites the earlier one.

use jsonparse_core::{OutputValue, Scalar, TypedVector};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyList, PyString};

/// Convert a JSON string into Python objects.
///
/// Args:
///     json: A valid JSON string.
///
/// Returns:
///     A `list`, `dict`, scalar or `None`.
///
/// Raises:
///     ValueError: If the input is not valid JSON or nests too deeply.
#[pyfunction]
fn from_json<'py>(py: Python<'py>, json: &str) -> PyResult<Bound<'py, PyAny>> {
    let value = jsonparse_core::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    to_python(py, &value)
}

/// Summarize the converted structure of a JSON string.
///
/// Args:
///     json: A valid JSON string.
///
/// Returns:
///     A multi-line summary, e.g. `List of 1\n $ a: int [1:2] 1 NA`.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
#[pyfunction]
fn describe(json: &str) -> PyResult<String> {
    jsonparse_core::from_json(json)
        .map(|value| jsonparse_core::describe(&value))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn to_python<'py>(py: Python<'py>, value: &OutputValue) -> PyResult<Bound<'py, PyAny>> {
    Ok(match value {
        OutputValue::Null => py.None().into_bound(py),
        OutputValue::Scalar(scalar) => scalar_to_python(py, scalar)?,
        OutputValue::Vector(vector) => vector_to_python(py, vector)?.into_any(),
        OutputValue::List(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(to_python(py, item)?)?;
            }
            list.into_any()
        }
        OutputValue::Mapping(entries) => {
            let dict = PyDict::new(py);
            for (key, item) in entries {
                dict.set_item(key.as_str(), to_python(py, item)?)?;
            }
            dict.into_any()
        }
    })
}

fn scalar_to_python<'py>(py: Python<'py>, scalar: &Scalar) -> PyResult<Bound<'py, PyAny>> {
    Ok(match scalar {
        Scalar::Bool(b) => PyBool::new(py, *b).to_owned().into_any(),
        Scalar::Int(i) => (*i).into_pyobject(py)?.into_any(),
        Scalar::Double(f) => (*f).into_pyobject(py)?.into_any(),
        Scalar::String(s) => PyString::new(py, s).into_any(),
    })
}

fn vector_to_python<'py>(py: Python<'py>, vector: &TypedVector) -> PyResult<Bound<'py, PyList>> {
    match vector {
        TypedVector::Bool(values) => PyList::new(py, values.iter().copied()),
        TypedVector::Int(values) => PyList::new(py, values.iter().copied()),
        TypedVector::Double(values) => PyList::new(py, values.iter().copied()),
        TypedVector::String(values) => PyList::new(py, values.iter().map(|s| s.as_deref())),
    }
}

/// The `jsonparse` Python module, implemented in Rust via PyO3.
#[pymodule]
fn jsonparse(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(from_json, m)?)?;
    m.add_function(wrap_pyfunction!(describe, m)?)?;
    Ok(())
}
