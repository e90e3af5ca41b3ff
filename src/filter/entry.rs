use std::fmt;

use super::matcher;
use super::mode::FilterMode;

/// Wildcard marker used when no custom token is supplied.
pub const DEFAULT_WILDCARD: &str = "*";

/// A classified filter: the matching mode derived from wildcard placement
/// plus the wildcard-stripped search value.
///
/// Construction is total; every pattern/token combination yields a usable
/// filter. Instances are immutable and can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEntry {
    mode: FilterMode,
    search_value: String,
    original_value: String,
}

impl FilterEntry {
    /// Classifies `pattern` using the default `*` wildcard.
    pub fn new(pattern: &str) -> Self {
        Self::with_wildcard(pattern, DEFAULT_WILDCARD)
    }

    /// Classifies `pattern` using a caller-chosen wildcard token.
    ///
    /// The mode comes from the token's placement at the pattern's ends;
    /// every occurrence of the token is stripped from the search value,
    /// interior ones included. An empty token classifies as
    /// [`FilterMode::Equals`] and strips nothing.
    pub fn with_wildcard(pattern: &str, wildcard: &str) -> Self {
        let search_value = if wildcard.is_empty() {
            pattern.to_string()
        } else {
            pattern.replace(wildcard, "")
        };
        Self {
            mode: detect_mode(pattern, wildcard),
            search_value,
            original_value: pattern.to_string(),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// The literal term compared against candidates.
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// The unmodified input pattern, kept for display and debugging.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Case-insensitive test of `value` against this filter.
    pub fn matches(&self, value: &str) -> bool {
        matcher::matches(self, value)
    }
}

impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.mode, self.search_value)
    }
}

/// ワイルドカードパターンのコレクションをまとめて分類する
pub fn classify_all(patterns: &[String]) -> Vec<FilterEntry> {
    patterns
        .iter()
        .map(|pattern| FilterEntry::new(pattern))
        .collect()
}

fn detect_mode(pattern: &str, wildcard: &str) -> FilterMode {
    // Every string starts and ends with "", so an empty token means
    // "no wildcard found".
    if wildcard.is_empty() {
        return FilterMode::Equals;
    }
    // Interior occurrences do not affect the mode; they are only stripped
    // from the search value.
    match (pattern.starts_with(wildcard), pattern.ends_with(wildcard)) {
        (true, true) => FilterMode::Contains,
        (true, false) => FilterMode::EndsWith,
        (false, true) => FilterMode::StartsWith,
        (false, false) => FilterMode::Equals,
    }
}
