//! Homogeneity Analyzer: decides whether a run of sibling values can share
//! one typed vector.
//!
//! Each call builds its own [`KindSet`] and drops it on return, so nested
//! and sibling arrays never observe each other's kinds.

use std::fmt;

use serde::Serialize;

use crate::kind::{classify, ScalarKind, SemanticKind};
use crate::types::JsonValue;

/// Outcome of analyzing a sibling sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// No elements; no scalar kind can be determined.
    Empty,
    /// Every element has this kind. For Array, Object and Null the converter
    /// handles each element on its own instead of building a vector.
    Uniform(SemanticKind),
    /// Elements are exactly this scalar kind plus nulls.
    UniformWithNulls(ScalarKind),
    /// Anything else; the container becomes a list.
    Mixed,
}

impl Decision {
    /// The vector kind this decision materializes as, if any.
    pub fn vector_kind(self) -> Option<ScalarKind> {
        match self {
            Decision::Uniform(kind) => kind.scalar(),
            Decision::UniformWithNulls(kind) => Some(kind),
            Decision::Empty | Decision::Mixed => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Empty => f.write_str("empty"),
            Decision::Uniform(kind) => write!(f, "uniform({kind})"),
            Decision::UniformWithNulls(kind) => write!(f, "uniform_with_nulls({kind})"),
            Decision::Mixed => f.write_str("mixed"),
        }
    }
}

/// A set of semantic kinds packed into one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSet(u8);

impl KindSet {
    pub fn new() -> Self {
        Self(0)
    }

    fn bit(kind: SemanticKind) -> u8 {
        1 << (kind as u8)
    }

    pub fn insert(&mut self, kind: SemanticKind) {
        self.0 |= Self::bit(kind);
    }

    pub fn contains(self, kind: SemanticKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SemanticKind> {
        SemanticKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// Apply the unification rules to the collected kinds.
    pub fn decide(self) -> Decision {
        match self.len() {
            0 => Decision::Empty,
            1 => match self.iter().next() {
                Some(kind) => Decision::Uniform(kind),
                None => Decision::Empty,
            },
            2 if self.contains(SemanticKind::Null) => {
                let other = self.iter().find(|k| *k != SemanticKind::Null);
                match other.and_then(SemanticKind::scalar) {
                    Some(kind) => Decision::UniformWithNulls(kind),
                    // Nulls next to structures never form a vector.
                    None => Decision::Mixed,
                }
            }
            _ => Decision::Mixed,
        }
    }

    /// True once no further element can change the decision away from Mixed.
    fn is_settled_mixed(self) -> bool {
        match self.len() {
            0 | 1 => false,
            2 => !self.contains(SemanticKind::Null) || self.iter().any(SemanticKind::is_structural),
            _ => true,
        }
    }
}

/// Analyze a sequence of sibling values.
///
/// # Examples
///
/// ```
/// use jsonparse_core::{analyze, Decision, JsonValue, ScalarKind};
///
/// let values = [JsonValue::Int(1), JsonValue::Null, JsonValue::Int(3)];
/// assert_eq!(analyze(&values), Decision::UniformWithNulls(ScalarKind::Int));
/// ```
pub fn analyze(values: &[JsonValue]) -> Decision {
    let mut seen = KindSet::new();
    for value in values {
        seen.insert(classify(value));
        if seen.is_settled_mixed() {
            return Decision::Mixed;
        }
    }
    seen.decide()
}

/// The decision taken for one array inside a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayDecision {
    /// JSONPath-style location, `$` for the root.
    pub path: String,
    pub len: usize,
    pub decision: Decision,
}

/// Walk `root` depth-first and report the analyzer decision for every array,
/// in document order.
pub fn survey(root: &JsonValue) -> Vec<ArrayDecision> {
    let mut out = Vec::new();
    survey_into(root, "$".to_string(), &mut out);
    out
}

fn survey_into(value: &JsonValue, path: String, out: &mut Vec<ArrayDecision>) {
    match value {
        JsonValue::Array(items) => {
            out.push(ArrayDecision {
                path: path.clone(),
                len: items.len(),
                decision: analyze(items),
            });
            for (i, item) in items.iter().enumerate() {
                survey_into(item, format!("{path}[{i}]"), out);
            }
        }
        JsonValue::Object(members) => {
            for (key, item) in members {
                survey_into(item, format!("{path}.{key}"), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(kinds: &[SemanticKind]) -> KindSet {
        let mut s = KindSet::new();
        for k in kinds {
            s.insert(*k);
        }
        s
    }

    #[test]
    fn kind_set_counts_distinct_kinds() {
        let s = set(&[SemanticKind::Int, SemanticKind::Int, SemanticKind::Null]);
        assert_eq!(s.len(), 2);
        assert!(s.contains(SemanticKind::Int));
        assert!(!s.contains(SemanticKind::Double));
    }

    #[test]
    fn settled_mixed_matches_decide() {
        // Every pair of kinds: early exit must agree with the final rule.
        for a in SemanticKind::ALL {
            for b in SemanticKind::ALL {
                let s = set(&[a, b]);
                if s.is_settled_mixed() {
                    assert_eq!(s.decide(), Decision::Mixed, "{a} + {b}");
                }
            }
        }
    }

    #[test]
    fn null_with_object_is_mixed() {
        assert_eq!(set(&[SemanticKind::Null, SemanticKind::Object]).decide(), Decision::Mixed);
    }

    #[test]
    fn three_kinds_are_mixed() {
        let s = set(&[SemanticKind::Null, SemanticKind::Int, SemanticKind::String]);
        assert_eq!(s.decide(), Decision::Mixed);
    }
}
