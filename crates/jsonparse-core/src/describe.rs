//! Structural summary of a converted value, one line per node.
//!
//! ```text
//! List of 3
//!  $ a: int 1
//!  $ b: int [1:3] 1 NA 3
//!  $ c:List of 1
//!   ..$ d: chr "x"
//! ```
//!
//! Vectors show at most [`PREVIEW_LIMIT`] values followed by `...`.

use crate::types::{OutputValue, Scalar, TypedVector};

/// Maximum number of vector values printed per line.
pub const PREVIEW_LIMIT: usize = 10;

/// Render a structural summary of `value`.
pub fn describe(value: &OutputValue) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &OutputValue, depth: usize, out: &mut String) {
    match value {
        OutputValue::Null => out.push_str(" NULL"),
        OutputValue::Scalar(scalar) => {
            out.push(' ');
            out.push_str(scalar_abbrev(scalar));
            out.push(' ');
            write_scalar(scalar, out);
        }
        OutputValue::Vector(vector) => write_vector(vector, out),
        OutputValue::List(items) => {
            out.push_str(&format!("List of {}", items.len()));
            for item in items {
                write_child("", item, depth, out);
            }
        }
        OutputValue::Mapping(entries) => {
            out.push_str(&format!("List of {}", entries.len()));
            for (key, item) in entries {
                write_child(key, item, depth, out);
            }
        }
    }
}

fn write_child(name: &str, value: &OutputValue, depth: usize, out: &mut String) {
    out.push('\n');
    out.push_str(&child_prefix(depth));
    out.push_str(name);
    out.push(':');
    write_value(value, depth + 1, out);
}

/// ` $ ` at the top level, then `  ..$ `, `  .. ..$ `, ...
fn child_prefix(depth: usize) -> String {
    if depth == 0 {
        " $ ".to_string()
    } else {
        format!("  {}..$ ", ".. ".repeat(depth - 1))
    }
}

fn write_vector(vector: &TypedVector, out: &mut String) {
    let len = vector.len();
    out.push(' ');
    out.push_str(vector_abbrev(vector));
    if len != 1 {
        out.push_str(&format!(" [1:{len}]"));
    }
    let shown = len.min(PREVIEW_LIMIT);
    match vector {
        TypedVector::Bool(values) => push_slots(&values[..shown], out, |b, out| {
            out.push_str(if *b { "TRUE" } else { "FALSE" })
        }),
        TypedVector::Int(values) => {
            push_slots(&values[..shown], out, |i, out| out.push_str(&i.to_string()))
        }
        TypedVector::Double(values) => {
            push_slots(&values[..shown], out, |f, out| out.push_str(&f.to_string()))
        }
        TypedVector::String(values) => push_slots(&values[..shown], out, |s, out| push_quoted(s, out)),
    }
    if len > shown {
        out.push_str(" ...");
    }
}

fn push_slots<T>(values: &[Option<T>], out: &mut String, write: impl Fn(&T, &mut String)) {
    for slot in values {
        out.push(' ');
        match slot {
            Some(v) => write(v, out),
            None => out.push_str("NA"),
        }
    }
}

fn write_scalar(scalar: &Scalar, out: &mut String) {
    match scalar {
        Scalar::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        Scalar::Int(i) => out.push_str(&i.to_string()),
        Scalar::Double(f) => out.push_str(&f.to_string()),
        Scalar::String(s) => push_quoted(s, out),
    }
}

fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn scalar_abbrev(scalar: &Scalar) -> &'static str {
    match scalar {
        Scalar::Bool(_) => "logi",
        Scalar::Int(_) => "int",
        Scalar::Double(_) => "num",
        Scalar::String(_) => "chr",
    }
}

fn vector_abbrev(vector: &TypedVector) -> &'static str {
    match vector {
        TypedVector::Bool(_) => "logi",
        TypedVector::Int(_) => "int",
        TypedVector::Double(_) => "num",
        TypedVector::String(_) => "chr",
    }
}
