//! Error types for JSON conversion.

use thiserror::Error;

use crate::kind::SemanticKind;

/// Longest slice of the offending input echoed back in a parse error.
const INPUT_EXCERPT_LIMIT: usize = 120;

/// Errors that can occur while converting a JSON document.
#[derive(Error, Debug)]
pub enum JsonParseError {
    /// The input text was not well-formed JSON.
    ///
    /// `line` and `column` are 1-based as reported by `serde_json`; `offset`
    /// is the approximate byte offset derived from them.
    #[error("JSON parse error at line {line}, column {column} (offset {offset}): {message}; input: {input}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
        offset: usize,
        input: String,
    },

    /// A value reached the materializer with a kind that does not belong in
    /// the target vector. Indicates the classifier and analyzer disagree.
    #[error("Unsupported value kind: expected {expected} or null, found {found}")]
    UnsupportedValueKind {
        expected: SemanticKind,
        found: SemanticKind,
    },

    /// Nesting went deeper than the configured limit.
    #[error("Maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

impl JsonParseError {
    /// Build a `Parse` error from a `serde_json` failure on `input`.
    pub(crate) fn from_serde(err: &serde_json::Error, input: &str) -> Self {
        let line = err.line();
        let column = err.column();
        JsonParseError::Parse {
            message: err.to_string(),
            line,
            column,
            offset: approximate_offset(input, line, column),
            input: excerpt(input),
        }
    }
}

/// Translate a 1-based line/column pair into a byte offset into `input`.
/// Clamps to the input length; serde_json reports column 0 for errors
/// detected before the first character of a line.
fn approximate_offset(input: &str, line: usize, column: usize) -> usize {
    let line_start: usize = input
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(input.len())
}

fn excerpt(input: &str) -> String {
    if input.len() <= INPUT_EXCERPT_LIMIT {
        return input.to_string();
    }
    let mut end = INPUT_EXCERPT_LIMIT;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &input[..end])
}

/// Convenience alias used throughout jsonparse-core.
pub type Result<T> = std::result::Result<T, JsonParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_on_first_line() {
        assert_eq!(approximate_offset("not json", 1, 2), 1);
    }

    #[test]
    fn offset_on_later_line() {
        let input = "{\n  \"a\": ,\n}";
        // line 2, column 8 -> 2 bytes for "{\n" plus 7
        assert_eq!(approximate_offset(input, 2, 8), 9);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(approximate_offset("[1,", 1, 99), 3);
    }

    #[test]
    fn long_input_is_truncated_on_char_boundary() {
        let input = "é".repeat(100);
        let out = excerpt(&input);
        assert!(out.ends_with("..."));
        assert!(out.len() <= INPUT_EXCERPT_LIMIT + 3);
    }
}
