//! Conversion settings.

/// Default nesting limit. Matches `serde_json`'s own parser limit, so text
/// input deeper than this already fails while parsing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Maximum number of nested arrays/objects the converter descends into.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
