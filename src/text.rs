use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Case-insensitive substring test.
///
/// Empty inputs never match, on either side.
pub fn contains_ignore_case(value: &str, needle: &str) -> bool {
    if value.is_empty() || needle.is_empty() {
        return false;
    }
    value.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality.
///
/// Empty inputs never match, on either side.
pub fn equals_ignore_case(value: &str, other: &str) -> bool {
    if value.is_empty() || other.is_empty() {
        return false;
    }
    value.to_lowercase() == other.to_lowercase()
}

/// Parses `value`, falling back to `fallback` when it does not parse.
pub fn parse_or<T: FromStr>(value: &str, fallback: T) -> T {
    value.trim().parse().unwrap_or(fallback)
}

/// Joins displayable items with `separator`.
pub fn join<I, T>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let mut joined = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        let _ = write!(joined, "{item}");
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ignore_case("Monthly Report", "report"));
        assert!(!contains_ignore_case("Monthly Report", "budget"));
    }

    #[test]
    fn empty_inputs_never_match() {
        assert!(!contains_ignore_case("", "a"));
        assert!(!contains_ignore_case("a", ""));
        assert!(!equals_ignore_case("", ""));
    }

    #[test]
    fn equals_ignores_case() {
        assert!(equals_ignore_case("INVOICE", "invoice"));
        assert!(!equals_ignore_case("invoice", "invoices"));
    }

    #[test]
    fn parse_falls_back() {
        assert_eq!(parse_or("42", 0), 42);
        assert_eq!(parse_or("not a number", 7), 7);
        assert_eq!(parse_or(" 13 ", 0), 13);
    }

    #[test]
    fn joins_with_separator() {
        assert_eq!(join(["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join(Vec::<String>::new(), ", "), "");
        assert_eq!(join([1, 2, 3], "-"), "1-2-3");
    }
}
